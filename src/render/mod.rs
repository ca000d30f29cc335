//! Rendering Surface
//!
//! The page is populated through the [`Surface`] capability: named mount
//! points that accept declarative [`Node`] fragments, expose a few element
//! properties, and dispatch UI events to registered handlers. The browser
//! backend lives in the wasm client; [`MemoryDom`] is an in-memory backend.

mod memory;
mod node;

pub use memory::MemoryDom;
pub use node::Node;

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::error::RenderResult;

/// Elements of the static page document that the application writes to or
/// listens on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mount {
    Bio,
    ProjectList,
    ProjectSpotlight,
    SpotlightTitles,
    ArrowLeft,
    ArrowRight,
    ContactForm,
    ContactEmail,
    ContactMessage,
    EmailError,
    MessageError,
    CharacterCounter,
}

impl Mount {
    pub const ALL: [Mount; 12] = [
        Mount::Bio,
        Mount::ProjectList,
        Mount::ProjectSpotlight,
        Mount::SpotlightTitles,
        Mount::ArrowLeft,
        Mount::ArrowRight,
        Mount::ContactForm,
        Mount::ContactEmail,
        Mount::ContactMessage,
        Mount::EmailError,
        Mount::MessageError,
        Mount::CharacterCounter,
    ];

    /// CSS selector for the element in the page document
    pub fn selector(&self) -> &'static str {
        match self {
            Mount::Bio => "#aboutMe",
            Mount::ProjectList => "#projectList",
            Mount::ProjectSpotlight => "#projectSpotlight",
            Mount::SpotlightTitles => "#spotlightTitles",
            Mount::ArrowLeft => ".arrow-left",
            Mount::ArrowRight => ".arrow-right",
            Mount::ContactForm => "#formSection",
            Mount::ContactEmail => "#contactEmail",
            Mount::ContactMessage => "#contactMessage",
            Mount::EmailError => "#emailError",
            Mount::MessageError => "#messageError",
            Mount::CharacterCounter => "#charactersLeft",
        }
    }
}

impl fmt::Display for Mount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

/// Scroll axis of a [`ScrollBy`] request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// A smooth relative scroll of a container
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollBy {
    pub axis: Axis,
    pub amount: f64,
}

impl ScrollBy {
    pub fn vertical(amount: f64) -> Self {
        Self {
            axis: Axis::Vertical,
            amount,
        }
    }

    pub fn horizontal(amount: f64) -> Self {
        Self {
            axis: Axis::Horizontal,
            amount,
        }
    }
}

/// UI events the application listens for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    PointerDown,
    Input,
    Submit,
}

/// What an event landed on, resolved by the surface
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventTarget {
    /// The element the listener is registered on
    Listener,
    /// Inside a project card; holds the nearest card's id
    Card(String),
    /// Anything else
    Other,
}

/// An event delivered to a [`Handler`]
#[derive(Debug)]
pub struct UiEvent {
    pub kind: EventKind,
    pub target: EventTarget,
    /// Current value of the target field, for input events
    pub value: Option<String>,
    default_prevented: Cell<bool>,
}

impl UiEvent {
    pub fn new(kind: EventKind, target: EventTarget) -> Self {
        Self {
            kind,
            target,
            value: None,
            default_prevented: Cell::new(false),
        }
    }

    pub fn pointer_down(target: EventTarget) -> Self {
        Self::new(EventKind::PointerDown, target)
    }

    pub fn input(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::new(EventKind::Input, EventTarget::Listener)
        }
    }

    pub fn submit() -> Self {
        Self::new(EventKind::Submit, EventTarget::Listener)
    }

    /// Ask the surface to suppress the platform's default action
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

/// Event callback registered on a surface
pub type Handler = Rc<dyn Fn(&UiEvent)>;

/// Rendering capability over the page document.
///
/// Every operation addresses a [`Mount`]; a mount that does not exist yields
/// [`RenderError::MissingMount`](crate::error::RenderError::MissingMount).
pub trait Surface {
    /// Append a batch of nodes as the last children of a mount
    fn append(&self, mount: Mount, nodes: Vec<Node>) -> RenderResult<()>;

    /// Remove every child of a mount
    fn clear(&self, mount: Mount) -> RenderResult<()>;

    /// Replace the text content of a mount
    fn set_text(&self, mount: Mount, text: &str) -> RenderResult<()>;

    /// Set an inline style property; an empty value removes it
    fn set_style(&self, mount: Mount, property: &str, value: &str) -> RenderResult<()>;

    /// Current value of a form field
    fn value(&self, mount: Mount) -> RenderResult<String>;

    /// Smoothly scroll a container
    fn scroll_by(&self, mount: Mount, scroll: ScrollBy) -> RenderResult<()>;

    /// Current viewport width in CSS pixels
    fn viewport_width(&self) -> f64;

    /// Register a handler for an event on a mount
    fn listen(&self, mount: Mount, kind: EventKind, handler: Handler) -> RenderResult<()>;
}

/// CSS value for a background image path
pub fn background_image(path: &str) -> String {
    format!("url({})", path)
}
