use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// Keys accepted from a delimited frontmatter block; anything else is ignored.
pub const FRONTMATTER_KEYS: &[&str] = &[
    "title",
    "author",
    "date",
    "description",
    "pillar",
    "slug",
    "image",
];

/// Bolded metadata markers recognised in legacy posts, paired with the key they set.
const LEGACY_MARKERS: &[(&str, &str)] = &[
    ("**Meta Description:**", "description"),
    ("**Author:**", "author"),
    ("**Date:**", "date"),
    ("**Pillar:**", "pillar"),
];

static LENGTH_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\n---\n\n\*\*Length:\*\*.*$").expect("length section pattern is valid")
});

static KEY_TAKEAWAYS_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\n---\n\n## Key Takeaways.*$").expect("takeaways section pattern is valid")
});

/// Metadata and body split out of a markdown post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    /// Recognised metadata keys and their string values.
    pub fields: BTreeMap<String, String>,
    /// Markdown body with the metadata block and trailing editorial sections removed.
    pub body: String,
}

impl Frontmatter {
    /// Returns the value stored for `key`, if the post supplied one.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Returns the value for `key`, treating an empty string as absent.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    fn set(&mut self, key: &str, value: &str) {
        self.fields.insert(key.to_string(), value.to_string());
    }
}

/// Splits a markdown post into metadata fields and body.
///
/// Posts either open with a `---` delimited block of `key: value` lines, or use
/// the legacy layout: a `# Title` heading followed by bolded markers such as
/// `**Author:**`. Malformed input never fails; unrecognised metadata is
/// dropped and missing fields are left for the caller to default.
pub fn parse_frontmatter(input: &str) -> Frontmatter {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let lines: Vec<&str> = input.split('\n').collect();
    let mut frontmatter = Frontmatter::default();

    let body_start = if is_delimiter(lines[0]) {
        scan_delimited(&lines, &mut frontmatter)
    } else {
        scan_legacy(&lines, &mut frontmatter)
    };

    let body = lines[body_start..].join("\n");
    frontmatter.body = strip_trailing_sections(body.trim());
    frontmatter
}

/// Reads `key: value` pairs up to the closing delimiter and returns the body start line.
fn scan_delimited(lines: &[&str], frontmatter: &mut Frontmatter) -> usize {
    for (index, line) in lines.iter().enumerate().skip(1) {
        if is_delimiter(line) {
            return index + 1;
        }

        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim().to_lowercase();
            if FRONTMATTER_KEYS.contains(&key.as_str()) {
                frontmatter.set(&key, unquote(value));
            }
        }
    }

    // Unterminated block: keys are kept and the whole document is body.
    0
}

fn scan_legacy(lines: &[&str], frontmatter: &mut Frontmatter) -> usize {
    let mut body_start = 0;

    if let Some(index) = lines.iter().position(|line| line.starts_with("# ")) {
        frontmatter.set("title", lines[index][2..].trim());
        body_start = index + 1;
    }

    for (index, line) in lines.iter().enumerate().skip(body_start) {
        if let Some((marker, key)) = LEGACY_MARKERS
            .iter()
            .find(|(marker, _)| line.starts_with(marker))
        {
            frontmatter.set(key, line.replace(marker, "").trim());
        } else if line.starts_with("---") && index > body_start + 1 {
            return index + 1;
        }
    }

    body_start
}

fn strip_trailing_sections(body: &str) -> String {
    let body = LENGTH_SECTION.replace(body, "");
    KEY_TAKEAWAYS_SECTION.replace(&body, "").into_owned()
}

fn unquote(value: &str) -> &str {
    value.trim().trim_matches('"').trim_matches('\'')
}

fn is_delimiter(line: &str) -> bool {
    line.trim() == "---"
}
