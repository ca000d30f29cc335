//! Data Loading
//!
//! Fetches the page's JSON documents through a [`Fetch`] backend and parses
//! them into model records. Failures are logged here and returned to the
//! caller; there are no retries.

#[cfg(feature = "native")]
mod dir;
#[cfg(feature = "native")]
mod http;

#[cfg(feature = "native")]
pub use dir::DirFetch;
#[cfg(feature = "native")]
pub use http::HttpFetch;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::{LoadError, LoadResult};

/// Status and body of a completed fetch
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport that retrieves a resource by its page-relative path
#[async_trait(?Send)]
pub trait Fetch {
    async fn fetch(&self, path: &str) -> LoadResult<FetchResponse>;
}

/// Loads and parses data documents
pub struct DataLoader<F> {
    fetch: F,
}

impl<F: Fetch> DataLoader<F> {
    pub fn new(fetch: F) -> Self {
        Self { fetch }
    }

    /// The fetch backend this loader reads through
    pub fn backend(&self) -> &F {
        &self.fetch
    }

    /// Fetch `path` and parse its body as JSON
    pub async fn load<T: DeserializeOwned>(&self, path: &str) -> LoadResult<T> {
        tracing::debug!(path, "Loading data document");

        let result = self.fetch_and_parse(path).await;
        if let Err(e) = &result {
            tracing::error!(path, error = %e, "Error loading JSON");
        }
        result
    }

    async fn fetch_and_parse<T: DeserializeOwned>(&self, path: &str) -> LoadResult<T> {
        let response = self.fetch.fetch(path).await?;

        if !response.ok() {
            return Err(LoadError::Fetch {
                path: path.to_string(),
                status: response.status,
            });
        }

        serde_json::from_str(&response.body).map_err(|source| LoadError::Parse {
            path: path.to_string(),
            source,
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Fetch backend serving canned responses and recording requests
    #[derive(Default)]
    pub struct StaticFetch {
        responses: HashMap<String, FetchResponse>,
        pub requests: RefCell<Vec<String>>,
    }

    impl StaticFetch {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(mut self, path: &str, status: u16, body: &str) -> Self {
            self.responses
                .insert(path.to_string(), FetchResponse::new(status, body));
            self
        }
    }

    #[async_trait(?Send)]
    impl Fetch for StaticFetch {
        async fn fetch(&self, path: &str) -> LoadResult<FetchResponse> {
            self.requests.borrow_mut().push(path.to_string());
            self.responses
                .get(path)
                .cloned()
                .ok_or_else(|| LoadError::Transport {
                    path: path.to_string(),
                    message: "connection refused".to_string(),
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::StaticFetch;
    use super::*;
    use crate::model::{BiographyRecord, ProjectCollection};

    #[tokio::test]
    async fn test_load_parses_body() {
        let fetch = StaticFetch::new().with(
            "./data/aboutMeData.json",
            200,
            r#"{"aboutMe": "Hello", "headshot": "./images/me.webp"}"#,
        );
        let loader = DataLoader::new(fetch);

        let bio: BiographyRecord = loader.load("./data/aboutMeData.json").await.unwrap();
        assert_eq!(bio.about_me, "Hello");
        assert_eq!(*loader.fetch.requests.borrow(), vec!["./data/aboutMeData.json"]);
    }

    #[tokio::test]
    async fn test_non_ok_status_is_fetch_error() {
        let fetch = StaticFetch::new().with("./data/projectsData.json", 500, "[]");
        let loader = DataLoader::new(fetch);

        let err = loader
            .load::<ProjectCollection>("./data/projectsData.json")
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Fetch { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_invalid_json_is_parse_error() {
        let fetch = StaticFetch::new().with("./data/projectsData.json", 200, "{not json");
        let loader = DataLoader::new(fetch);

        let err = loader
            .load::<ProjectCollection>("./data/projectsData.json")
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_parse_error() {
        let fetch = StaticFetch::new().with("./data/aboutMeData.json", 200, r#"{"bio": 1}"#);
        let loader = DataLoader::new(fetch);

        let err = loader
            .load::<BiographyRecord>("./data/aboutMeData.json")
            .await
            .unwrap_err();
        assert_eq!(err.path(), "./data/aboutMeData.json");
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let loader = DataLoader::new(StaticFetch::new());
        let err = loader
            .load::<BiographyRecord>("./data/aboutMeData.json")
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Transport { .. }));
    }

    #[test]
    fn test_ok_range() {
        assert!(FetchResponse::new(200, "").ok());
        assert!(FetchResponse::new(204, "").ok());
        assert!(!FetchResponse::new(304, "").ok());
        assert!(!FetchResponse::new(404, "").ok());
    }
}
