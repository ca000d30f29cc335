//! Page data model
//!
//! Records loaded from the two JSON documents that drive the page. Optional
//! project fields are defaulted once, while deserializing, so rendering code
//! never has to deal with absent values.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Card background used when a project has no `card_image`
pub const CARD_PLACEHOLDER_IMAGE: &str = "./images/card_placeholder_bg.webp";

/// Spotlight background used when a project has no `spotlight_image`
pub const SPOTLIGHT_PLACEHOLDER_IMAGE: &str = "./images/spotlight_placeholder_bg.webp";

/// Sentinel `url` for projects without a link; rendered as plain text
pub const URL_UNAVAILABLE: &str = "URL currently unavailable.";

/// Biography document (`aboutMeData.json`)
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BiographyRecord {
    pub about_me: String,
    pub headshot: String,
}

/// A single project with every optional field resolved
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(from = "RawProject")]
pub struct ProjectRecord {
    pub project_id: String,
    pub project_name: String,
    pub short_description: String,
    pub long_description: String,
    pub card_image: String,
    pub spotlight_image: String,
    pub url: String,
}

/// Project as it appears on the wire
#[derive(Deserialize)]
struct RawProject {
    project_id: ProjectId,
    project_name: String,
    #[serde(default)]
    short_description: Option<String>,
    #[serde(default)]
    long_description: Option<String>,
    #[serde(default)]
    card_image: Option<String>,
    #[serde(default)]
    spotlight_image: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

/// Identifiers are element ids on the page, so numeric ids are accepted and
/// kept in their textual form.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProjectId {
    Text(String),
    Number(serde_json::Number),
}

impl From<ProjectId> for String {
    fn from(id: ProjectId) -> Self {
        match id {
            ProjectId::Text(text) => text,
            ProjectId::Number(number) => number.to_string(),
        }
    }
}

impl From<RawProject> for ProjectRecord {
    fn from(raw: RawProject) -> Self {
        Self {
            project_id: raw.project_id.into(),
            project_name: raw.project_name,
            short_description: raw.short_description.unwrap_or_default(),
            long_description: raw.long_description.unwrap_or_default(),
            card_image: raw
                .card_image
                .unwrap_or_else(|| CARD_PLACEHOLDER_IMAGE.to_string()),
            spotlight_image: raw
                .spotlight_image
                .unwrap_or_else(|| SPOTLIGHT_PLACEHOLDER_IMAGE.to_string()),
            url: raw.url.unwrap_or_else(|| URL_UNAVAILABLE.to_string()),
        }
    }
}

impl ProjectRecord {
    /// Create a project with every optional field at its default
    pub fn new(project_id: impl Into<String>, project_name: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            project_name: project_name.into(),
            short_description: String::new(),
            long_description: String::new(),
            card_image: CARD_PLACEHOLDER_IMAGE.to_string(),
            spotlight_image: SPOTLIGHT_PLACEHOLDER_IMAGE.to_string(),
            url: URL_UNAVAILABLE.to_string(),
        }
    }

    /// Set the card description
    pub fn short_description(mut self, text: impl Into<String>) -> Self {
        self.short_description = text.into();
        self
    }

    /// Set the spotlight description
    pub fn long_description(mut self, text: impl Into<String>) -> Self {
        self.long_description = text.into();
        self
    }

    /// Set the card background image
    pub fn card_image(mut self, path: impl Into<String>) -> Self {
        self.card_image = path.into();
        self
    }

    /// Set the spotlight background image
    pub fn spotlight_image(mut self, path: impl Into<String>) -> Self {
        self.spotlight_image = path.into();
        self
    }

    /// Set the project link
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Whether the spotlight should render a navigable link
    pub fn has_link(&self) -> bool {
        self.url != URL_UNAVAILABLE
    }

    /// Names of optional fields currently holding their default value
    pub fn fields_at_default(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.short_description.is_empty() {
            fields.push("short_description");
        }
        if self.long_description.is_empty() {
            fields.push("long_description");
        }
        if self.card_image == CARD_PLACEHOLDER_IMAGE {
            fields.push("card_image");
        }
        if self.spotlight_image == SPOTLIGHT_PLACEHOLDER_IMAGE {
            fields.push("spotlight_image");
        }
        if !self.has_link() {
            fields.push("url");
        }
        fields
    }
}

/// Projects in display order
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ProjectCollection(Vec<ProjectRecord>);

impl ProjectCollection {
    pub fn new(projects: Vec<ProjectRecord>) -> Self {
        Self(projects)
    }

    /// The project shown in the spotlight at startup
    pub fn first(&self) -> Option<&ProjectRecord> {
        self.0.first()
    }

    /// Look up a project by identifier
    pub fn find(&self, project_id: &str) -> Option<&ProjectRecord> {
        self.0.iter().find(|p| p.project_id == project_id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectRecord> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Identifiers that appear more than once, in first-repeat order
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for project in &self.0 {
            let id = project.project_id.as_str();
            if !seen.insert(id) && !duplicates.contains(&id) {
                duplicates.push(id);
            }
        }
        duplicates
    }
}

impl<'a> IntoIterator for &'a ProjectCollection {
    type Item = &'a ProjectRecord;
    type IntoIter = std::slice::Iter<'a, ProjectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
