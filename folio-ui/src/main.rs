//! Folio Page Client
//!
//! Populates the portfolio page in the browser (WASM). The page shell is
//! served as static HTML; this client fetches the biography and project
//! documents, fills in the sections and wires the interactive parts.

use std::rc::Rc;

use folio::bootstrap::Bootstrap;
use folio::config::Config;

mod api;
mod dom;
mod logging;

use api::GlooFetch;
use dom::DomSurface;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();
    logging::init();

    wasm_bindgen_futures::spawn_local(async {
        let surface = match DomSurface::new() {
            Ok(surface) => Rc::new(surface),
            Err(e) => {
                tracing::error!(error = %e, "Page document unavailable");
                return;
            }
        };
        let Some(fetch) = GlooFetch::from_location() else {
            tracing::error!("Page location unavailable");
            return;
        };

        // Failures are logged by the bootstrap itself
        if let Ok(report) = Bootstrap::new(fetch, surface, Config::default()).run().await {
            tracing::info!(
                projects = report.state.projects.len(),
                complete = report.is_complete(),
                "Portfolio page ready"
            );
        }
    });
}
