//! Application Bootstrap
//!
//! Loads both data documents in sequence, then renders the page sections and
//! wires the event handlers. The loaded [`AppState`] is built once and shared
//! read-only with every handler.

use std::rc::Rc;

use crate::config::{Config, SiteConfig};
use crate::error::{LoadResult, RenderResult};
use crate::interaction::InteractionController;
use crate::loader::{DataLoader, Fetch};
use crate::model::{BiographyRecord, ProjectCollection};
use crate::render::Surface;
use crate::sections::SectionRenderer;

/// Data the page is built from, immutable after loading
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub biography: BiographyRecord,
    pub projects: ProjectCollection,
}

impl AppState {
    /// Load the biography, then the projects. The second request is not
    /// issued until the first has completed.
    pub async fn load<F: Fetch>(loader: &DataLoader<F>, site: &SiteConfig) -> LoadResult<Self> {
        let biography = loader.load(&site.bio_path).await?;
        let projects = loader.load(&site.projects_path).await?;
        Ok(Self {
            biography,
            projects,
        })
    }
}

/// What happened while populating the page
pub struct BuildReport {
    pub state: Rc<AppState>,
    /// Project list, arrows, initial spotlight and card selection
    pub projects: RenderResult<()>,
    /// Character counter and form validation
    pub contact_form: RenderResult<()>,
}

impl BuildReport {
    pub fn is_complete(&self) -> bool {
        self.projects.is_ok() && self.contact_form.is_ok()
    }
}

/// Drives the load, render, attach sequence
pub struct Bootstrap<F> {
    loader: DataLoader<F>,
    surface: Rc<dyn Surface>,
    config: Config,
}

impl<F: Fetch> Bootstrap<F> {
    pub fn new(fetch: F, surface: Rc<dyn Surface>, config: Config) -> Self {
        Self {
            loader: DataLoader::new(fetch),
            surface,
            config,
        }
    }

    /// Build the page.
    ///
    /// A load failure aborts before anything is rendered. Section failures
    /// after loading are logged and recorded in the report; the biography
    /// section logs its own failures and never aborts the rest.
    pub async fn run(&self) -> LoadResult<BuildReport> {
        let state = match AppState::load(&self.loader, &self.config.site).await {
            Ok(state) => Rc::new(state),
            Err(e) => {
                tracing::error!(error = %e, "Error loading application");
                return Err(e);
            }
        };
        tracing::info!(projects = state.projects.len(), "Page data loaded");

        let renderer = SectionRenderer::new(Rc::clone(&self.surface));
        let controller = InteractionController::new(
            Rc::clone(&state),
            Rc::clone(&self.surface),
            renderer.clone(),
            self.config.page.clone(),
        );

        renderer.render_biography(&state.biography);

        let projects = populate_projects(&renderer, &controller, &state.projects)
            .map_err(|e| e.in_section("Projects section"));
        if let Err(e) = &projects {
            tracing::error!(error = %e, "Error loading application");
        }

        let contact_form = controller
            .attach_message_counter()
            .and_then(|_| controller.attach_form_validation());
        if let Err(e) = &contact_form {
            tracing::error!(error = %e, "Error loading application");
        }

        Ok(BuildReport {
            state,
            projects,
            contact_form,
        })
    }
}

fn populate_projects(
    renderer: &SectionRenderer,
    controller: &InteractionController,
    projects: &ProjectCollection,
) -> RenderResult<()> {
    renderer.render_project_list(projects)?;
    controller.attach_scroll_handler()?;
    renderer.render_initial_spotlight(projects)?;
    controller.attach_spotlight_handler()
}
