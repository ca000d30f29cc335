//! Browser Surface
//!
//! Implements the page [`Surface`] over the live document. Mounts are looked
//! up by selector on every call, so markup added after startup is picked up.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, ScrollBehavior,
    ScrollToOptions, Window,
};

use folio::error::{RenderError, RenderResult};
use folio::render::{Axis, EventKind, EventTarget, Handler, Mount, Node, ScrollBy, Surface, UiEvent};
use folio::sections::PROJECT_CARD_CLASS;

pub struct DomSurface {
    window: Window,
    document: Document,
}

impl DomSurface {
    pub fn new() -> RenderResult<Self> {
        let window =
            web_sys::window().ok_or_else(|| RenderError::Platform("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| RenderError::Platform("no document".to_string()))?;
        Ok(Self { window, document })
    }

    fn element(&self, mount: Mount) -> RenderResult<Element> {
        self.document
            .query_selector(mount.selector())
            .map_err(platform)?
            .ok_or(RenderError::MissingMount(mount))
    }

    fn html_element(&self, mount: Mount) -> RenderResult<HtmlElement> {
        self.element(mount)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| RenderError::Platform(format!("{} is not an HTML element", mount)))
    }

    fn build(&self, node: &Node) -> RenderResult<Element> {
        let element = self.document.create_element(&node.tag).map_err(platform)?;

        if let Some(id) = &node.id {
            element.set_id(id);
        }
        for class in &node.classes {
            element.class_list().add_1(class).map_err(platform)?;
        }
        for (name, value) in &node.attributes {
            element.set_attribute(name, value).map_err(platform)?;
        }
        if !node.styles.is_empty() {
            let style = element
                .dyn_ref::<HtmlElement>()
                .ok_or_else(|| RenderError::Platform(format!("<{}> has no style", node.tag)))?
                .style();
            for (property, value) in &node.styles {
                style.set_property(property, value).map_err(platform)?;
            }
        }
        if let Some(text) = &node.text {
            element.set_text_content(Some(text));
        }
        for child in &node.children {
            element.append_child(&self.build(child)?).map_err(platform)?;
        }

        Ok(element)
    }
}

impl Surface for DomSurface {
    fn append(&self, mount: Mount, nodes: Vec<Node>) -> RenderResult<()> {
        let target = self.element(mount)?;
        // One insertion for the whole batch
        let fragment = self.document.create_document_fragment();
        for node in &nodes {
            fragment.append_child(&self.build(node)?).map_err(platform)?;
        }
        target.append_child(&fragment).map_err(platform)?;
        Ok(())
    }

    fn clear(&self, mount: Mount) -> RenderResult<()> {
        let target = self.element(mount)?;
        while let Some(child) = target.first_child() {
            target.remove_child(&child).map_err(platform)?;
        }
        Ok(())
    }

    fn set_text(&self, mount: Mount, text: &str) -> RenderResult<()> {
        self.element(mount)?.set_text_content(Some(text));
        Ok(())
    }

    fn set_style(&self, mount: Mount, property: &str, value: &str) -> RenderResult<()> {
        let style = self.html_element(mount)?.style();
        if value.is_empty() {
            style.remove_property(property).map_err(platform)?;
        } else {
            style.set_property(property, value).map_err(platform)?;
        }
        Ok(())
    }

    fn value(&self, mount: Mount) -> RenderResult<String> {
        let element = self.element(mount)?;
        field_value(&element)
            .ok_or_else(|| RenderError::Platform(format!("{} is not a form field", mount)))
    }

    fn scroll_by(&self, mount: Mount, scroll: ScrollBy) -> RenderResult<()> {
        let options = ScrollToOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        match scroll.axis {
            Axis::Vertical => options.set_top(scroll.amount),
            Axis::Horizontal => options.set_left(scroll.amount),
        }
        self.element(mount)?.scroll_by_with_scroll_to_options(&options);
        Ok(())
    }

    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or_default()
    }

    fn listen(&self, mount: Mount, kind: EventKind, handler: Handler) -> RenderResult<()> {
        let element = self.element(mount)?;
        let listener = element.clone();

        let callback = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let ui_event = translate(kind, &event, &listener);
            handler(&ui_event);
            if ui_event.default_prevented() {
                event.prevent_default();
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        element
            .add_event_listener_with_callback(event_name(kind), callback.as_ref().unchecked_ref())
            .map_err(platform)?;
        // Listeners live as long as the page
        callback.forget();
        Ok(())
    }
}

fn platform(value: JsValue) -> RenderError {
    RenderError::Platform(format!("{:?}", value))
}

fn event_name(kind: EventKind) -> &'static str {
    match kind {
        EventKind::PointerDown => "pointerdown",
        EventKind::Input => "input",
        EventKind::Submit => "submit",
    }
}

fn field_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        Some(input.value())
    } else {
        element.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
    }
}

/// Resolve a DOM event into the platform-neutral form handlers see
fn translate(kind: EventKind, event: &web_sys::Event, listener: &Element) -> UiEvent {
    let target = event.target().and_then(|t| t.dyn_into::<Element>().ok());

    let resolved = match &target {
        Some(element) if element.is_same_node(Some(listener)) => EventTarget::Listener,
        Some(element) => match element.closest(&format!(".{}", PROJECT_CARD_CLASS)) {
            Ok(Some(card)) => EventTarget::Card(card.id()),
            _ => EventTarget::Other,
        },
        None => EventTarget::Other,
    };

    let mut ui_event = UiEvent::new(kind, resolved);
    if kind == EventKind::Input {
        ui_event.value = target.as_ref().and_then(field_value);
    }
    ui_event
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const SHELL: &str = r#"
        <section id="aboutMe"></section>
        <div id="projectList"></div>
        <div id="projectSpotlight"><div id="spotlightTitles"><p>stale</p></div></div>
        <form id="formSection">
            <input id="contactEmail" value="a@b.com">
            <textarea id="contactMessage">hello</textarea>
        </form>
        <span id="charactersLeft"></span>
    "#;

    fn surface() -> DomSurface {
        let surface = DomSurface::new().unwrap();
        surface.document.body().unwrap().set_inner_html(SHELL);
        surface
    }

    #[wasm_bindgen_test]
    fn builds_nested_nodes() {
        let surface = surface();
        let card = Node::new("div")
            .id("alpha")
            .class(PROJECT_CARD_CLASS)
            .style("background-image", "url(./a.webp)")
            .child(Node::new("h4").text("Alpha"));
        surface.append(Mount::ProjectList, vec![card]).unwrap();

        let card = surface.document.get_element_by_id("alpha").unwrap();
        assert!(card.class_list().contains(PROJECT_CARD_CLASS));
        assert_eq!(card.inner_html(), "<h4>Alpha</h4>");
        let style = card.dyn_into::<HtmlElement>().unwrap().style();
        assert!(style.get_property_value("background-image").unwrap().contains("a.webp"));
    }

    #[wasm_bindgen_test]
    fn clear_removes_children() {
        let surface = surface();
        surface.clear(Mount::SpotlightTitles).unwrap();
        assert_eq!(surface.element(Mount::SpotlightTitles).unwrap().child_element_count(), 0);
    }

    #[wasm_bindgen_test]
    fn reads_field_values() {
        let surface = surface();
        assert_eq!(surface.value(Mount::ContactEmail).unwrap(), "a@b.com");
        assert_eq!(surface.value(Mount::ContactMessage).unwrap(), "hello");
        assert!(surface.value(Mount::Bio).is_err());
    }

    #[wasm_bindgen_test]
    fn missing_mount() {
        let surface = surface();
        assert!(matches!(
            surface.set_text(Mount::EmailError, "x"),
            Err(RenderError::MissingMount(Mount::EmailError))
        ));
    }

    #[wasm_bindgen_test]
    fn empty_style_removes_property() {
        let surface = surface();
        surface.set_style(Mount::CharacterCounter, "color", "darkred").unwrap();
        surface.set_style(Mount::CharacterCounter, "color", "").unwrap();
        let counter = surface.html_element(Mount::CharacterCounter).unwrap();
        assert_eq!(counter.style().get_property_value("color").unwrap(), "");
    }

    #[wasm_bindgen_test]
    fn card_events_resolve_to_card_id() {
        let surface = surface();
        let card = Node::new("div")
            .id("beta")
            .class(PROJECT_CARD_CLASS)
            .child(Node::new("p").text("inner"));
        surface.append(Mount::ProjectList, vec![card]).unwrap();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        surface
            .listen(
                Mount::ProjectList,
                EventKind::PointerDown,
                Rc::new(move |event: &UiEvent| sink.borrow_mut().push(event.target.clone())),
            )
            .unwrap();

        let inner = surface.document.query_selector("#beta p").unwrap().unwrap();
        let list = surface.element(Mount::ProjectList).unwrap();
        let init = web_sys::EventInit::new();
        init.set_bubbles(true);
        for element in [&inner, &list] {
            let event = web_sys::Event::new_with_event_init_dict("pointerdown", &init).unwrap();
            element.dispatch_event(&event).unwrap();
        }

        assert_eq!(
            *seen.borrow(),
            vec![EventTarget::Card("beta".to_string()), EventTarget::Listener]
        );
    }

    #[wasm_bindgen_test]
    fn submit_default_is_prevented() {
        let surface = surface();
        surface
            .listen(
                Mount::ContactForm,
                EventKind::Submit,
                Rc::new(|event: &UiEvent| event.prevent_default()),
            )
            .unwrap();

        let init = web_sys::EventInit::new();
        init.set_cancelable(true);
        let event = web_sys::Event::new_with_event_init_dict("submit", &init).unwrap();
        surface.element(Mount::ContactForm).unwrap().dispatch_event(&event).unwrap();
        assert!(event.default_prevented());
    }
}
