//! HTTP fetch backend
//!
//! Resolves page-relative paths against the URL of a running site.

use async_trait::async_trait;
use reqwest::{Client, Url};

use super::{Fetch, FetchResponse};
use crate::error::{LoadError, LoadResult};

/// Fetches documents from a site served over HTTP
pub struct HttpFetch {
    client: Client,
    base: Url,
}

impl HttpFetch {
    /// Create a backend for the page at `base`.
    ///
    /// A base without a trailing slash is treated as a directory, so
    /// `http://host/portfolio` resolves `./data/x.json` under `/portfolio/`.
    pub fn new(base: &str) -> Result<Self, url::ParseError> {
        let mut base = Url::parse(base)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            client: Client::new(),
            base,
        })
    }

    /// Absolute URL for a page-relative path
    pub fn resolve(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base.join(path)
    }
}

#[async_trait(?Send)]
impl Fetch for HttpFetch {
    async fn fetch(&self, path: &str) -> LoadResult<FetchResponse> {
        let transport = |message: String| LoadError::Transport {
            path: path.to_string(),
            message,
        };

        let url = self.resolve(path).map_err(|e| transport(e.to_string()))?;
        tracing::debug!(%url, "Fetching");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| transport(e.to_string()))?;

        Ok(FetchResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_paths() {
        let fetch = HttpFetch::new("http://localhost:8084").unwrap();
        assert_eq!(
            fetch.resolve("./data/aboutMeData.json").unwrap().as_str(),
            "http://localhost:8084/data/aboutMeData.json"
        );

        let fetch = HttpFetch::new("https://example.com/portfolio").unwrap();
        assert_eq!(
            fetch.resolve("./data/projectsData.json").unwrap().as_str(),
            "https://example.com/portfolio/data/projectsData.json"
        );
    }

    #[test]
    fn test_invalid_base() {
        assert!(HttpFetch::new("not a url").is_err());
    }
}
