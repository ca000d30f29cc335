//! Error types
//!
//! Failures surfaced while loading page data and while rendering sections.

use thiserror::Error;

use crate::render::Mount;

/// Message carried by every non-success fetch response
pub const FETCH_FAILED_MESSAGE: &str = "An error occurred while reading data.";

/// Errors that can occur while loading a data document
#[derive(Error, Debug)]
pub enum LoadError {
    /// The response arrived with a non-success status
    #[error("{} ({path} returned status {status})", FETCH_FAILED_MESSAGE)]
    Fetch { path: String, status: u16 },

    /// The request never produced a response
    #[error("Network error loading {path}: {message}")]
    Transport { path: String, message: String },

    /// The body was not JSON of the expected shape
    #[error("Parse error in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Path of the document that failed to load
    pub fn path(&self) -> &str {
        match self {
            LoadError::Fetch { path, .. }
            | LoadError::Transport { path, .. }
            | LoadError::Parse { path, .. } => path,
        }
    }
}

/// Errors that can occur while rendering into a surface
#[derive(Error, Debug)]
pub enum RenderError {
    /// The selector for a mount point matched nothing
    #[error("Mount point not found: {0}")]
    MissingMount(Mount),

    /// The rendering backend rejected an operation
    #[error("Platform error: {0}")]
    Platform(String),

    /// The project collection has no first project to spotlight
    #[error("No projects available")]
    NoProjects,

    /// A failure inside a named page section
    #[error("Error loading {section}: {source}")]
    Section {
        section: &'static str,
        #[source]
        source: Box<RenderError>,
    },
}

impl RenderError {
    /// Wrap this error with the name of the section it happened in
    pub fn in_section(self, section: &'static str) -> Self {
        RenderError::Section {
            section,
            source: Box::new(self),
        }
    }
}

/// Result type alias for load operations
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type alias for render operations
pub type RenderResult<T> = Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_carries_generic_message() {
        let err = LoadError::Fetch {
            path: "./data/projectsData.json".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "An error occurred while reading data. (./data/projectsData.json returned status 404)"
        );
        assert!(err.to_string().starts_with(FETCH_FAILED_MESSAGE));
        assert_eq!(err.path(), "./data/projectsData.json");
    }

    #[test]
    fn test_section_error_display() {
        let err = RenderError::MissingMount(Mount::ProjectList)
            .in_section("project list")
            .in_section("Projects section");
        assert_eq!(
            err.to_string(),
            "Error loading Projects section: Error loading project list: Mount point not found: #projectList"
        );
    }
}
