//! Section Rendering
//!
//! Builds the biography, project list and spotlight fragments from loaded
//! records and mounts them on a [`Surface`].

use std::rc::Rc;

use crate::error::{RenderError, RenderResult};
use crate::model::{BiographyRecord, ProjectCollection, ProjectRecord};
use crate::render::{background_image, Mount, Node, Surface};

/// Alt text of the headshot image
pub const HEADSHOT_ALT: &str = "A picture of me.";

/// Label of the spotlight link for projects that have a URL
pub const CALL_TO_ACTION: &str = "Click here to see more...";

/// Class marking project cards in the list
pub const PROJECT_CARD_CLASS: &str = "projectCard";

/// Renders page sections onto a surface
#[derive(Clone)]
pub struct SectionRenderer {
    surface: Rc<dyn Surface>,
}

impl SectionRenderer {
    pub fn new(surface: Rc<dyn Surface>) -> Self {
        Self { surface }
    }

    /// Populate the "about me" section.
    ///
    /// Failures are logged and swallowed so the rest of the page still builds.
    pub fn render_biography(&self, record: &BiographyRecord) {
        if let Err(e) = self.surface.append(Mount::Bio, biography_fragment(record)) {
            tracing::error!(error = %e, "Error loading About Me section");
        }
    }

    /// Populate the project list with one card per project, in order
    pub fn render_project_list(&self, projects: &ProjectCollection) -> RenderResult<()> {
        let cards = projects.iter().map(project_card).collect();
        self.surface
            .append(Mount::ProjectList, cards)
            .map_err(|e| e.in_section("project list"))
    }

    /// Replace the spotlight with `project`
    pub fn render_spotlight(&self, project: &ProjectRecord) -> RenderResult<()> {
        self.replace_spotlight(project)
            .map_err(|e| e.in_section("project spotlight section"))
    }

    fn replace_spotlight(&self, project: &ProjectRecord) -> RenderResult<()> {
        self.surface.set_style(
            Mount::ProjectSpotlight,
            "background-image",
            &background_image(&project.spotlight_image),
        )?;
        self.surface.clear(Mount::SpotlightTitles)?;
        self.surface
            .append(Mount::SpotlightTitles, spotlight_fragment(project))?;

        tracing::debug!(project_id = %project.project_id, "Spotlight updated");
        Ok(())
    }

    /// Spotlight the first project of the collection
    pub fn render_initial_spotlight(&self, projects: &ProjectCollection) -> RenderResult<()> {
        let first = projects
            .first()
            .ok_or_else(|| RenderError::NoProjects.in_section("project spotlight section"))?;
        self.render_spotlight(first)
    }
}

/// Bio paragraph followed by the headshot in its container
pub fn biography_fragment(record: &BiographyRecord) -> Vec<Node> {
    let paragraph = Node::new("p").text(&record.about_me);

    let headshot = Node::new("img")
        .attr("src", &record.headshot)
        .attr("alt", HEADSHOT_ALT);
    let container = Node::new("div").class("headshotContainer").child(headshot);

    vec![paragraph, container]
}

/// Clickable card summarizing a project
pub fn project_card(project: &ProjectRecord) -> Node {
    Node::new("div")
        .class(PROJECT_CARD_CLASS)
        .id(&project.project_id)
        .style("background-image", background_image(&project.card_image))
        .child(Node::new("h4").text(&project.project_name))
        .child(Node::new("p").text(&project.short_description))
}

/// Title, description and link of the spotlight panel
pub fn spotlight_fragment(project: &ProjectRecord) -> Vec<Node> {
    let title = Node::new("h3").text(&project.project_name);
    let description = Node::new("p").text(&project.long_description);
    vec![title, description, spotlight_link(project)]
}

/// Anchor to the project URL, or the sentinel as plain text
pub fn spotlight_link(project: &ProjectRecord) -> Node {
    if project.has_link() {
        Node::new("a").text(CALL_TO_ACTION).attr("href", &project.url)
    } else {
        Node::new("a").text(&project.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CARD_PLACEHOLDER_IMAGE, SPOTLIGHT_PLACEHOLDER_IMAGE, URL_UNAVAILABLE};
    use crate::render::MemoryDom;

    fn setup(dom: MemoryDom) -> (Rc<MemoryDom>, SectionRenderer) {
        let dom = Rc::new(dom);
        let renderer = SectionRenderer::new(dom.clone());
        (dom, renderer)
    }

    fn bio() -> BiographyRecord {
        BiographyRecord {
            about_me: "I build things.".to_string(),
            headshot: "./images/headshot.webp".to_string(),
        }
    }

    fn linked() -> ProjectRecord {
        ProjectRecord::new("linked", "Linked")
            .long_description("Has a page")
            .spotlight_image("./images/linked.webp")
            .url("https://example.com/linked")
    }

    #[test]
    fn test_biography_fragment() {
        let (dom, renderer) = setup(MemoryDom::portfolio_page());
        renderer.render_biography(&bio());

        let children = dom.children(Mount::Bio);
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].tag, "p");
        assert_eq!(children[0].text.as_deref(), Some("I build things."));
        assert!(children[1].has_class("headshotContainer"));

        let img = &children[1].children[0];
        assert_eq!(img.tag, "img");
        assert_eq!(img.attribute("src"), Some("./images/headshot.webp"));
        assert_eq!(img.attribute("alt"), Some(HEADSHOT_ALT));
    }

    #[test]
    fn test_biography_failure_is_swallowed() {
        let (dom, renderer) = setup(MemoryDom::portfolio_page().without_mount(Mount::Bio));
        renderer.render_biography(&bio());
        assert!(dom.is_pristine());
    }

    #[test]
    fn test_project_cards_in_order_with_defaults() {
        let (dom, renderer) = setup(MemoryDom::portfolio_page());
        let projects = ProjectCollection::new(vec![
            ProjectRecord::new("first", "First"),
            ProjectRecord::new("second", "Second")
                .short_description("Two")
                .card_image("./images/second.webp"),
        ]);

        renderer.render_project_list(&projects).unwrap();

        let cards = dom.children(Mount::ProjectList);
        assert_eq!(cards.len(), 2);

        assert_eq!(cards[0].id.as_deref(), Some("first"));
        assert!(cards[0].has_class(PROJECT_CARD_CLASS));
        assert_eq!(
            cards[0].style_value("background-image"),
            Some(format!("url({})", CARD_PLACEHOLDER_IMAGE).as_str())
        );
        assert_eq!(cards[0].children[0].tag, "h4");
        assert_eq!(cards[0].children[0].text.as_deref(), Some("First"));
        assert_eq!(cards[0].children[1].text.as_deref(), Some(""));

        assert_eq!(cards[1].id.as_deref(), Some("second"));
        assert_eq!(
            cards[1].style_value("background-image"),
            Some("url(./images/second.webp)")
        );
        assert_eq!(cards[1].children[1].text.as_deref(), Some("Two"));
    }

    #[test]
    fn test_project_list_missing_mount_propagates() {
        let (_dom, renderer) = setup(MemoryDom::portfolio_page().without_mount(Mount::ProjectList));
        let err = renderer
            .render_project_list(&ProjectCollection::new(vec![ProjectRecord::new("a", "A")]))
            .unwrap_err();
        assert!(err.to_string().starts_with("Error loading project list"));
    }

    #[test]
    fn test_spotlight_with_link() {
        let (dom, renderer) = setup(MemoryDom::portfolio_page());
        renderer.render_spotlight(&linked()).unwrap();

        assert_eq!(
            dom.style(Mount::ProjectSpotlight, "background-image").as_deref(),
            Some("url(./images/linked.webp)")
        );

        let nodes = dom.children(Mount::SpotlightTitles);
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].tag, "h3");
        assert_eq!(nodes[0].text.as_deref(), Some("Linked"));
        assert_eq!(nodes[1].text.as_deref(), Some("Has a page"));
        assert_eq!(nodes[2].tag, "a");
        assert_eq!(nodes[2].text.as_deref(), Some(CALL_TO_ACTION));
        assert_eq!(nodes[2].attribute("href"), Some("https://example.com/linked"));
    }

    #[test]
    fn test_spotlight_without_link_is_not_navigable() {
        let (dom, renderer) = setup(MemoryDom::portfolio_page());
        renderer.render_spotlight(&ProjectRecord::new("bare", "Bare")).unwrap();

        assert_eq!(
            dom.style(Mount::ProjectSpotlight, "background-image"),
            Some(format!("url({})", SPOTLIGHT_PLACEHOLDER_IMAGE))
        );

        let nodes = dom.children(Mount::SpotlightTitles);
        assert_eq!(nodes[1].text.as_deref(), Some(""));
        assert_eq!(nodes[2].text.as_deref(), Some(URL_UNAVAILABLE));
        assert_eq!(nodes[2].attribute("href"), None);
    }

    #[test]
    fn test_spotlight_replaces_previous_content() {
        let (dom, renderer) = setup(MemoryDom::portfolio_page());
        renderer.render_spotlight(&linked()).unwrap();
        renderer.render_spotlight(&ProjectRecord::new("bare", "Bare")).unwrap();

        let nodes = dom.children(Mount::SpotlightTitles);
        assert_eq!(nodes, spotlight_fragment(&ProjectRecord::new("bare", "Bare")));
    }

    #[test]
    fn test_initial_spotlight_requires_a_project() {
        let (dom, renderer) = setup(MemoryDom::portfolio_page());
        let err = renderer
            .render_initial_spotlight(&ProjectCollection::default())
            .unwrap_err();
        assert!(matches!(err, RenderError::Section { .. }));
        assert!(dom.children(Mount::SpotlightTitles).is_empty());
    }
}
