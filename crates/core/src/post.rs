//! Serialized post and index records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Author written when a post does not name one.
pub const DEFAULT_AUTHOR: &str = "[Your Company]";

/// A published post as stored in `<slug>.json`.
///
/// Every field defaults to an empty string when read back, so older or
/// hand-edited files still load into the index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostRecord {
    /// Post title.
    pub title: String,
    /// URL slug; also the output file stem.
    pub slug: String,
    /// Author name.
    pub author: String,
    /// Publication date as written in the source, compared as a plain string.
    pub date: String,
    /// Short summary for listings and meta tags.
    pub description: String,
    /// Content pillar or category.
    pub pillar: String,
    /// Rendered HTML body.
    pub content: String,
    /// Cover image from the `image` frontmatter key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Summary of a post as listed in `index.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Taken from the post's file name, not its `slug` field.
    pub slug: String,
    /// Post title.
    pub title: String,
    /// Publication date; the index is sorted on this, newest first.
    pub date: String,
    /// Author name.
    pub author: String,
    /// Short summary.
    pub description: String,
}

impl IndexEntry {
    /// Projects an arbitrary post document onto its index summary.
    ///
    /// Fields that are missing or hold anything other than a string become `""`,
    /// so a hand-edited post never blocks the index.
    pub fn from_json(slug: impl Into<String>, post: &Value) -> Self {
        let field = |key: &str| {
            post.get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            slug: slug.into(),
            title: field("title"),
            date: field("date"),
            author: field("author"),
            description: field("description"),
        }
    }
}
