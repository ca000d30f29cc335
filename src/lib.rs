//! # Folio
//!
//! Populates a personal portfolio page from two JSON documents: a biography
//! and a project list. The page shell is static; this crate fills in its
//! sections and wires the interactive parts.
//!
//! ## Modules
//!
//! - [`model`]: Biography and project records, with defaults for optional fields
//! - [`loader`]: Fetch-and-parse of data documents over a [`loader::Fetch`] backend
//! - [`render`]: The [`render::Surface`] capability and an in-memory implementation
//! - [`sections`]: Biography, project list and spotlight rendering
//! - [`interaction`]: Scroll arrows, spotlight selection, counter and form validation
//! - [`bootstrap`]: Load, render, attach sequencing
//!
//! With the default `native` feature the crate also provides filesystem and
//! HTTP fetch backends, a static site server and log setup for the `folio`
//! binary. The wasm client depends on it with default features disabled.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use folio::bootstrap::Bootstrap;
//! use folio::config::Config;
//! use folio::loader::DirFetch;
//! use folio::render::MemoryDom;
//! use std::rc::Rc;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dom = Rc::new(MemoryDom::portfolio_page());
//!     let bootstrap = Bootstrap::new(DirFetch::new("./site"), dom.clone(), Config::default());
//!
//!     let report = bootstrap.run().await?;
//!     println!("Loaded {} projects", report.state.projects.len());
//!
//!     Ok(())
//! }
//! ```

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod interaction;
pub mod loader;
pub mod model;
pub mod render;
pub mod sections;

#[cfg(feature = "native")]
pub mod logging;
#[cfg(feature = "native")]
pub mod server;

// Re-export top-level types for convenience
pub use bootstrap::{AppState, Bootstrap, BuildReport};
pub use config::{Config, ConfigError, LoggingConfig, PageConfig, ServerConfig, SiteConfig};
pub use error::{LoadError, LoadResult, RenderError, RenderResult};
pub use interaction::{FormReport, InteractionController, ScrollDirection};
pub use loader::{DataLoader, Fetch, FetchResponse};
pub use model::{BiographyRecord, ProjectCollection, ProjectRecord};
pub use render::{EventKind, EventTarget, MemoryDom, Mount, Node, ScrollBy, Surface, UiEvent};
pub use sections::SectionRenderer;
