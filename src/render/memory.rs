//! In-memory surface
//!
//! Keeps a model of each mount point so page population can run without a
//! browser: the `check` command renders into it, and tests dispatch events
//! through it.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use super::{EventKind, Handler, Mount, Node, ScrollBy, Surface, UiEvent};
use crate::error::{RenderError, RenderResult};

/// Viewport width used by [`MemoryDom::portfolio_page`]
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;

#[derive(Default)]
struct Element {
    children: Vec<Node>,
    text: String,
    styles: BTreeMap<String, String>,
    value: String,
    scrolls: Vec<ScrollBy>,
    listeners: Vec<(EventKind, Handler)>,
}

impl Element {
    fn is_pristine(&self) -> bool {
        self.children.is_empty()
            && self.text.is_empty()
            && self.styles.is_empty()
            && self.scrolls.is_empty()
            && self.listeners.is_empty()
    }
}

/// Surface backed by plain data structures
pub struct MemoryDom {
    elements: RefCell<HashMap<Mount, Element>>,
    viewport_width: Cell<f64>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    /// A document without any mount points
    pub fn new() -> Self {
        Self {
            elements: RefCell::new(HashMap::new()),
            viewport_width: Cell::new(DEFAULT_VIEWPORT_WIDTH),
        }
    }

    /// A document with every mount point the portfolio page defines
    pub fn portfolio_page() -> Self {
        Mount::ALL
            .iter()
            .fold(Self::new(), |dom, mount| dom.with_mount(*mount))
    }

    pub fn with_mount(self, mount: Mount) -> Self {
        self.elements.borrow_mut().entry(mount).or_default();
        self
    }

    pub fn without_mount(self, mount: Mount) -> Self {
        self.elements.borrow_mut().remove(&mount);
        self
    }

    pub fn set_viewport_width(&self, width: f64) {
        self.viewport_width.set(width);
    }

    /// Set a form field's value without firing events
    pub fn set_value(&self, mount: Mount, value: &str) -> RenderResult<()> {
        self.with_element(mount, |el| el.value = value.to_string())
    }

    /// Set a field's value and fire an input event, like typing would
    pub fn type_into(&self, mount: Mount, value: &str) -> RenderResult<usize> {
        self.set_value(mount, value)?;
        Ok(self.dispatch(mount, &UiEvent::input(value)))
    }

    /// Children appended to a mount, in order
    pub fn children(&self, mount: Mount) -> Vec<Node> {
        self.read(mount, |el| el.children.clone()).unwrap_or_default()
    }

    /// Text content of a mount (its own text, then its children's)
    pub fn text(&self, mount: Mount) -> String {
        self.read(mount, |el| {
            let mut out = el.text.clone();
            for child in &el.children {
                out.push_str(&child.text_content());
            }
            out
        })
        .unwrap_or_default()
    }

    /// Inline style property of a mount
    pub fn style(&self, mount: Mount, property: &str) -> Option<String> {
        self.read(mount, |el| el.styles.get(property).cloned())
            .flatten()
    }

    /// Scroll requests issued against a mount, oldest first
    pub fn scrolls(&self, mount: Mount) -> Vec<ScrollBy> {
        self.read(mount, |el| el.scrolls.clone()).unwrap_or_default()
    }

    pub fn listener_count(&self, mount: Mount, kind: EventKind) -> usize {
        self.read(mount, |el| el.listeners.iter().filter(|(k, _)| *k == kind).count())
            .unwrap_or(0)
    }

    /// Whether nothing has been written to or registered on any mount
    pub fn is_pristine(&self) -> bool {
        self.elements.borrow().values().all(Element::is_pristine)
    }

    /// Deliver an event to the handlers registered on a mount for its kind.
    ///
    /// Returns the number of handlers invoked.
    pub fn dispatch(&self, mount: Mount, event: &UiEvent) -> usize {
        // Handlers render back into this surface, so release the borrow first
        let handlers: Vec<Handler> = self
            .read(mount, |el| {
                el.listeners
                    .iter()
                    .filter(|(kind, _)| *kind == event.kind)
                    .map(|(_, handler)| Rc::clone(handler))
                    .collect()
            })
            .unwrap_or_default();

        for handler in &handlers {
            handler(event);
        }
        handlers.len()
    }

    fn read<T>(&self, mount: Mount, f: impl FnOnce(&Element) -> T) -> Option<T> {
        self.elements.borrow().get(&mount).map(f)
    }

    fn with_element<T>(&self, mount: Mount, f: impl FnOnce(&mut Element) -> T) -> RenderResult<T> {
        self.elements
            .borrow_mut()
            .get_mut(&mount)
            .map(f)
            .ok_or(RenderError::MissingMount(mount))
    }
}

impl Surface for MemoryDom {
    fn append(&self, mount: Mount, nodes: Vec<Node>) -> RenderResult<()> {
        self.with_element(mount, |el| el.children.extend(nodes))
    }

    fn clear(&self, mount: Mount) -> RenderResult<()> {
        self.with_element(mount, |el| {
            el.children.clear();
            el.text.clear();
        })
    }

    fn set_text(&self, mount: Mount, text: &str) -> RenderResult<()> {
        self.with_element(mount, |el| {
            el.children.clear();
            el.text = text.to_string();
        })
    }

    fn set_style(&self, mount: Mount, property: &str, value: &str) -> RenderResult<()> {
        self.with_element(mount, |el| {
            if value.is_empty() {
                el.styles.remove(property);
            } else {
                el.styles.insert(property.to_string(), value.to_string());
            }
        })
    }

    fn value(&self, mount: Mount) -> RenderResult<String> {
        self.with_element(mount, |el| el.value.clone())
    }

    fn scroll_by(&self, mount: Mount, scroll: ScrollBy) -> RenderResult<()> {
        self.with_element(mount, |el| el.scrolls.push(scroll))
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width.get()
    }

    fn listen(&self, mount: Mount, kind: EventKind, handler: Handler) -> RenderResult<()> {
        self.with_element(mount, |el| el.listeners.push((kind, handler)))
    }
}
