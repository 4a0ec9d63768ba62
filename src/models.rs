//! Frontend Models
//!
//! Data structures matching the REST payloads.

use serde::{Deserialize, Serialize};

/// Separator between the display url and the thumbnail url in `Link.url`
pub const LINK_URL_SEPARATOR: char = ';';

/// Category data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Category list response, also the cached value for the category key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryList {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub message: String,
}

/// Create/update body for a category
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryRequest {
    pub title: String,
    pub description: String,
}

/// Create body for a link
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRequest {
    pub category_id: u64,
    pub url: String,
    pub title: String,
    pub description: String,
}

/// Response of link creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkSummary {
    pub id: u64,
    #[serde(default)]
    pub message: String,
}

/// Full link record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkDetail {
    pub id: u64,
    #[serde(default)]
    pub category_id: u64,
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl LinkDetail {
    pub fn link_url(&self) -> LinkUrl {
        LinkUrl::parse(&self.url)
    }
}

/// Link list response, also the cached value for the link key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkList {
    #[serde(default)]
    pub archive_links: Vec<LinkDetail>,
    #[serde(default)]
    pub message: String,
}

/// Values entered in the link form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkForm {
    pub category: Option<u64>,
    pub link_url: String,
    pub thumbnail_url: String,
    pub title: String,
    pub description: String,
}

impl LinkForm {
    /// Build the create payload; an unselected category is sent as 0
    pub fn to_request(&self) -> LinkRequest {
        LinkRequest {
            category_id: self.category.unwrap_or(0),
            url: LinkUrl {
                display: self.link_url.clone(),
                thumbnail: self.thumbnail_url.clone(),
            }
            .join(),
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }
}

/// Display url and thumbnail url packed into a single `url` field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkUrl {
    pub display: String,
    pub thumbnail: String,
}

impl LinkUrl {
    pub fn join(&self) -> String {
        format!("{}{}{}", self.display, LINK_URL_SEPARATOR, self.thumbnail)
    }

    /// Split on the last separator so a `;` inside the page url survives.
    /// A value without one is all display url.
    pub fn parse(raw: &str) -> Self {
        match raw.rsplit_once(LINK_URL_SEPARATOR) {
            Some((display, thumbnail)) => Self {
                display: display.to_string(),
                thumbnail: thumbnail.to_string(),
            },
            None => Self {
                display: raw.to_string(),
                thumbnail: String::new(),
            },
        }
    }
}

/// Question shown in a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "_id")]
    pub id: String,
    pub question_title: String,
    #[serde(default)]
    pub tag_name: String,
}

/// Login token held in the shared store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginToken {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Access token of an optional login, empty when logged out
pub fn access_token(token: Option<&LoginToken>) -> String {
    token.map(|t| t.access_token.clone()).unwrap_or_default()
}
