//! HTTP Fetch Backend
//!
//! Requests data documents from the origin that served the page.

use async_trait::async_trait;
use gloo_net::http::Request;

use folio::error::{LoadError, LoadResult};
use folio::loader::{Fetch, FetchResponse};

/// Fetches relative paths against the page location
pub struct GlooFetch {
    base: String,
}

impl GlooFetch {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Resolve against the current `window.location`
    pub fn from_location() -> Option<Self> {
        let href = web_sys::window()?.location().href().ok()?;
        Some(Self::new(href))
    }

    fn resolve(&self, path: &str) -> LoadResult<String> {
        web_sys::Url::new_with_base(path, &self.base)
            .map(|url| url.href())
            .map_err(|_| LoadError::Transport {
                path: path.to_string(),
                message: format!("Cannot resolve against {}", self.base),
            })
    }
}

#[async_trait(?Send)]
impl Fetch for GlooFetch {
    async fn fetch(&self, path: &str) -> LoadResult<FetchResponse> {
        let url = self.resolve(path)?;
        let transport = |e: gloo_net::Error| LoadError::Transport {
            path: path.to_string(),
            message: format!("Network error: {}", e),
        };

        let response = Request::get(&url).send().await.map_err(transport)?;
        let status = response.status();
        let body = response.text().await.map_err(transport)?;

        Ok(FetchResponse::new(status, body))
    }
}
