//! Regenerates `index.json` from the post files in an output directory.

use crate::store::{read_json, write_json};
use crate::{IndexEntry, PublishError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the generated index; never treated as a post.
pub const INDEX_FILE_NAME: &str = "index.json";

/// Rebuilds `index.json` in `dir` from every other `*.json` file there.
///
/// Entries are ordered by date, newest first, using plain string comparison;
/// posts without a date end up last. The index is rewritten in full. A post
/// file that is not valid JSON aborts the rebuild; one with missing or
/// non-string fields is indexed with those fields blank.
pub fn update_index(dir: &Path) -> Result<Vec<IndexEntry>> {
    let mut entries = Vec::new();

    for path in post_files(dir)? {
        let post = read_json(&path)?;
        let slug = post_slug(&path);
        log::debug!("Indexing {} as {:?}", path.display(), slug);
        entries.push(IndexEntry::from_json(slug, &post));
    }

    sort_entries(&mut entries);

    write_json(&dir.join(INDEX_FILE_NAME), &entries)?;
    log::info!("Updated index with {} posts", entries.len());

    Ok(entries)
}

/// Sorts newest first. The sort is stable, so equal dates keep their incoming order.
pub fn sort_entries(entries: &mut [IndexEntry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Lists post JSON files in `dir`, sorted by file name.
fn post_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir = fs::read_dir(dir).map_err(|err| PublishError::io(dir, err))?;

    let mut files = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|err| PublishError::io(dir, err))?;
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();
        // `.json` itself counts: a post whose slug came out empty is stored there.
        if name.ends_with(".json") && name != INDEX_FILE_NAME && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// The file name without its `.json` suffix.
fn post_slug(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .and_then(|name| name.strip_suffix(".json").map(str::to_string))
        .unwrap_or_default()
}
