//! Publishes a markdown post as JSON and refreshes the index.

use crate::frontmatter::{Frontmatter, parse_frontmatter};
use crate::images::scale_images;
use crate::index::update_index;
use crate::render::{RenderOptions, markdown_to_html};
use crate::slug::generate_slug;
use crate::store::{read_text, write_json};
use crate::{DEFAULT_AUTHOR, PostRecord, Result};
use std::path::{Path, PathBuf};

/// Settings applied to every post published in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOptions {
    /// Author recorded when the post does not name one.
    pub default_author: String,
    /// Markdown rendering options.
    pub render: RenderOptions,
}

impl Default for PublishOptions {
    fn default() -> Self {
        Self {
            default_author: DEFAULT_AUTHOR.to_string(),
            render: RenderOptions::default(),
        }
    }
}

/// Converts the markdown file at `md_path` into `<slug>.json` inside
/// `output_dir`, then rebuilds that directory's index.
///
/// Returns the path of the written post. The output directory must already
/// exist.
pub fn publish_post(
    md_path: &Path,
    output_dir: &Path,
    options: &PublishOptions,
) -> Result<PathBuf> {
    let source = read_text(md_path)?;
    let fallback_title = md_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let record = build_record(&source, &fallback_title, options)?;

    let output_path = output_dir.join(format!("{}.json", record.slug));
    write_json(&output_path, &record)?;
    log::debug!("Wrote {}", output_path.display());

    update_index(output_dir)?;

    Ok(output_path)
}

/// Builds the stored record for a post without touching the filesystem.
///
/// `fallback_title` is used when the post carries no title of its own.
pub fn build_record(
    source: &str,
    fallback_title: &str,
    options: &PublishOptions,
) -> Result<PostRecord> {
    let frontmatter = parse_frontmatter(source);
    log::debug!(
        "Parsed frontmatter keys: {:?}",
        frontmatter.fields.keys().collect::<Vec<_>>()
    );

    let title = frontmatter.get("title").unwrap_or(fallback_title).to_string();
    let slug = match frontmatter.non_empty("slug") {
        Some(slug) => slug.to_string(),
        None => generate_slug(&title),
    };
    if slug.is_empty() {
        log::warn!("Post {title:?} produced an empty slug; writing to .json");
    }

    let html = markdown_to_html(&frontmatter.body, &options.render)?;
    let content = scale_images(&html)?;

    Ok(PostRecord {
        author: field_or(&frontmatter, "author", &options.default_author),
        date: field_or(&frontmatter, "date", ""),
        description: field_or(&frontmatter, "description", ""),
        pillar: field_or(&frontmatter, "pillar", ""),
        image: frontmatter.non_empty("image").map(str::to_string),
        title,
        slug,
        content,
    })
}

fn field_or(frontmatter: &Frontmatter, key: &str, default: &str) -> String {
    frontmatter.get(key).unwrap_or(default).to_string()
}
