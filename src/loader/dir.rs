//! Filesystem fetch backend
//!
//! Reads documents straight from a site directory, answering like a static
//! file server would: a missing file is a 404 response rather than an error.

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};

use super::{Fetch, FetchResponse};
use crate::error::{LoadError, LoadResult};

/// Fetches documents from a local site directory
pub struct DirFetch {
    root: PathBuf,
}

impl DirFetch {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// File path for a page-relative path; `None` if it escapes the root
    pub fn resolve(&self, path: &str) -> Option<PathBuf> {
        let mut resolved = self.root.clone();
        for component in Path::new(path).components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir | Component::RootDir => {}
                Component::ParentDir | Component::Prefix(_) => return None,
            }
        }
        Some(resolved)
    }
}

#[async_trait(?Send)]
impl Fetch for DirFetch {
    async fn fetch(&self, path: &str) -> LoadResult<FetchResponse> {
        let Some(file) = self.resolve(path) else {
            tracing::warn!(path, "Refusing path outside the site directory");
            return Ok(FetchResponse::new(404, ""));
        };

        match tokio::fs::read_to_string(&file).await {
            Ok(body) => Ok(FetchResponse::new(200, body)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FetchResponse::new(404, "")),
            Err(e) => Err(LoadError::Transport {
                path: path.to_string(),
                message: format!("{}: {}", file.display(), e),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_resolve() {
        let fetch = DirFetch::new("/srv/site");
        assert_eq!(
            fetch.resolve("./data/aboutMeData.json"),
            Some(PathBuf::from("/srv/site/data/aboutMeData.json"))
        );
        assert_eq!(fetch.resolve("../secret.json"), None);
    }

    #[tokio::test]
    async fn test_reads_existing_file() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("data")).unwrap();
        std::fs::write(dir.path().join("data/projectsData.json"), "[]").unwrap();

        let fetch = DirFetch::new(dir.path());
        let response = fetch.fetch("./data/projectsData.json").await.unwrap();
        assert_eq!(response, FetchResponse::new(200, "[]"));
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let fetch = DirFetch::new(dir.path());
        let response = fetch.fetch("./data/aboutMeData.json").await.unwrap();
        assert_eq!(response.status, 404);
        assert!(!response.ok());
    }
}
