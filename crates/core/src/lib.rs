#![deny(missing_docs)]
//! blogpub core: frontmatter parsing, slugs, rendering, and the blog index.

/// Error type shared by every fallible operation.
pub mod error;
/// Frontmatter and legacy metadata extraction.
pub mod frontmatter;
/// Image post-processing for rendered HTML.
pub mod images;
/// Index regeneration.
pub mod index;
/// Stored post and index entry types.
pub mod post;
/// End-to-end publishing of a single post.
pub mod publish;
/// Markdown rendering.
pub mod render;
/// Slug generation utilities.
pub mod slug;
/// Path-aware file helpers.
pub mod store;

pub use error::{PublishError, Result};
pub use frontmatter::{FRONTMATTER_KEYS, Frontmatter, parse_frontmatter};
pub use images::{IMAGE_SCALING_STYLE, scale_images};
pub use index::{INDEX_FILE_NAME, sort_entries, update_index};
pub use post::{DEFAULT_AUTHOR, IndexEntry, PostRecord};
pub use publish::{PublishOptions, build_record, publish_post};
pub use render::{RenderOptions, markdown_to_html};
pub use slug::generate_slug;
