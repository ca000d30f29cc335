//! UI Interaction
//!
//! Event handlers for the project list arrows, spotlight selection, the
//! contact message counter and contact form validation. Handlers capture the
//! shared [`AppState`] and the surface they were attached to.

pub mod validation;

pub use validation::{EmailError, FormReport, MessageError};

use std::rc::Rc;

use crate::bootstrap::AppState;
use crate::config::PageConfig;
use crate::error::RenderResult;
use crate::render::{EventKind, EventTarget, Mount, ScrollBy, Surface, UiEvent};
use crate::sections::SectionRenderer;

/// Arrow direction; left/up scrolls back, right/down scrolls forward
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Back,
    Forward,
}

impl ScrollDirection {
    fn sign(self) -> f64 {
        match self {
            ScrollDirection::Back => -1.0,
            ScrollDirection::Forward => 1.0,
        }
    }
}

/// Attaches and implements the page's event handlers
#[derive(Clone)]
pub struct InteractionController {
    state: Rc<AppState>,
    surface: Rc<dyn Surface>,
    renderer: SectionRenderer,
    page: PageConfig,
}

impl InteractionController {
    pub fn new(
        state: Rc<AppState>,
        surface: Rc<dyn Surface>,
        renderer: SectionRenderer,
        page: PageConfig,
    ) -> Self {
        Self {
            state,
            surface,
            renderer,
            page,
        }
    }

    /// Scroll the project list when an arrow is pressed
    pub fn attach_scroll_handler(&self) -> RenderResult<()> {
        for (mount, direction) in [
            (Mount::ArrowLeft, ScrollDirection::Back),
            (Mount::ArrowRight, ScrollDirection::Forward),
        ] {
            let controller = self.clone();
            self.surface.listen(
                mount,
                EventKind::PointerDown,
                Rc::new(move |_: &UiEvent| controller.handle_scroll(direction)),
            )?;
        }
        Ok(())
    }

    /// Re-render the spotlight when a project card is pressed
    pub fn attach_spotlight_handler(&self) -> RenderResult<()> {
        let controller = self.clone();
        self.surface.listen(
            Mount::ProjectList,
            EventKind::PointerDown,
            Rc::new(move |event: &UiEvent| controller.handle_spotlight_selection(event)),
        )
    }

    /// Keep the character counter in step with the message field
    pub fn attach_message_counter(&self) -> RenderResult<()> {
        let controller = self.clone();
        self.surface.listen(
            Mount::ContactMessage,
            EventKind::Input,
            Rc::new(move |event: &UiEvent| controller.handle_message_input(event)),
        )
    }

    /// Validate the contact form on submit
    pub fn attach_form_validation(&self) -> RenderResult<()> {
        let controller = self.clone();
        self.surface.listen(
            Mount::ContactForm,
            EventKind::Submit,
            Rc::new(move |event: &UiEvent| {
                controller.handle_form_submit(event);
            }),
        )
    }

    /// Scroll the project list one step. The axis follows the viewport: wide
    /// layouts stack the list vertically, narrow ones lay it out in a row.
    pub fn handle_scroll(&self, direction: ScrollDirection) {
        let amount = direction.sign() * self.page.scroll_step;
        let scroll = if self.surface.viewport_width() >= self.page.wide_breakpoint {
            ScrollBy::vertical(amount)
        } else {
            ScrollBy::horizontal(amount)
        };

        if let Err(e) = self.surface.scroll_by(Mount::ProjectList, scroll) {
            tracing::error!(error = %e, "Error scrolling project list");
        }
    }

    /// Show the pressed card's project in the spotlight
    pub fn handle_spotlight_selection(&self, event: &UiEvent) {
        let project_id = match &event.target {
            EventTarget::Listener => return,
            EventTarget::Card(id) => id,
            EventTarget::Other => {
                tracing::warn!("Pointer press in project list outside any card");
                return;
            }
        };

        let Some(project) = self.state.projects.find(project_id) else {
            tracing::warn!(project_id = %project_id, "No project matches the selected card");
            return;
        };

        if let Err(e) = self.renderer.render_spotlight(project) {
            tracing::error!(error = %e, "Error updating project spotlight");
        }
    }

    /// Update the counter label and its emphasis for the current message
    pub fn handle_message_input(&self, event: &UiEvent) {
        let message = match &event.value {
            Some(value) => value.clone(),
            None => match self.surface.value(Mount::ContactMessage) {
                Ok(value) => value,
                Err(e) => {
                    tracing::error!(error = %e, "Error reading contact message");
                    return;
                }
            },
        };

        let length = validation::message_length(&message);
        let limit = self.page.message_limit;

        let result = self
            .surface
            .set_text(Mount::CharacterCounter, &validation::counter_label(length, limit))
            .and_then(|_| {
                self.surface.set_style(
                    Mount::CharacterCounter,
                    "color",
                    validation::counter_color(length, limit),
                )
            });
        if let Err(e) = result {
            tracing::error!(error = %e, "Error updating character counter");
        }
    }

    /// Validate both fields and show their error labels.
    ///
    /// The default submission is always suppressed and nothing is sent, even
    /// when both fields are valid.
    pub fn handle_form_submit(&self, event: &UiEvent) -> Option<FormReport> {
        event.prevent_default();

        let report = match self.read_form() {
            Ok((email, message)) => FormReport::check(&email, &message, self.page.message_limit),
            Err(e) => {
                tracing::error!(error = %e, "Error reading contact form");
                return None;
            }
        };

        let result = self
            .surface
            .set_text(Mount::EmailError, &report.email_text())
            .and_then(|_| self.surface.set_text(Mount::MessageError, &report.message_text()));
        if let Err(e) = result {
            tracing::error!(error = %e, "Error showing contact form errors");
        }

        tracing::debug!(valid = report.is_valid(), "Contact form validated");
        Some(report)
    }

    fn read_form(&self) -> RenderResult<(String, String)> {
        let email = self.surface.value(Mount::ContactEmail)?;
        let message = self.surface.value(Mount::ContactMessage)?;
        Ok((email, message))
    }
}
