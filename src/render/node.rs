//! Declarative element fragments

use std::fmt;

/// An element to be created by a surface, with its children
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Node {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: Vec<(String, String)>,
    pub styles: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.push((property.into(), value.into()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Value of an attribute, if set
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Value of an inline style property, if set
    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Text of this node followed by the text of its descendants
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone().unwrap_or_default();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }
}

fn escape(text: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for c in text.chars() {
        match c {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' => f.write_str("&quot;")?,
            _ => write!(f, "{}", c)?,
        }
    }
    Ok(())
}

/// Markup form, used for diagnostics and reports
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        if let Some(id) = &self.id {
            f.write_str(" id=\"")?;
            escape(id, f)?;
            f.write_str("\"")?;
        }
        if !self.classes.is_empty() {
            f.write_str(" class=\"")?;
            escape(&self.classes.join(" "), f)?;
            f.write_str("\"")?;
        }
        if !self.styles.is_empty() {
            let style: Vec<String> = self
                .styles
                .iter()
                .map(|(p, v)| format!("{}: {}", p, v))
                .collect();
            f.write_str(" style=\"")?;
            escape(&style.join("; "), f)?;
            f.write_str("\"")?;
        }
        for (name, value) in &self.attributes {
            write!(f, " {}=\"", name)?;
            escape(value, f)?;
            f.write_str("\"")?;
        }
        f.write_str(">")?;
        if let Some(text) = &self.text {
            escape(text, f)?;
        }
        for child in &self.children {
            write!(f, "{}", child)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_lookup() {
        let node = Node::new("img")
            .attr("src", "./me.webp")
            .attr("alt", "A picture of me.")
            .style("background-image", "url(./bg.webp)");

        assert_eq!(node.attribute("src"), Some("./me.webp"));
        assert_eq!(node.attribute("href"), None);
        assert_eq!(node.style_value("background-image"), Some("url(./bg.webp)"));
    }

    #[test]
    fn test_display_escapes_text() {
        let node = Node::new("div")
            .id("p1")
            .class("projectCard")
            .child(Node::new("h4").text("Fish & <Chips>"));

        assert_eq!(
            node.to_string(),
            r#"<div id="p1" class="projectCard"><h4>Fish &amp; &lt;Chips&gt;</h4></div>"#
        );
        assert_eq!(node.text_content(), "Fish & <Chips>");
    }
}
