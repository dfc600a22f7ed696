use once_cell::sync::Lazy;
use regex::Regex;

static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s-]").expect("disallowed pattern is valid"));
static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_]+").expect("separator pattern is valid"));
static HYPHEN_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-+").expect("hyphen pattern is valid"));

/// Generates a URL slug from a post title.
///
/// 1. Lowercase
/// 2. Drop everything except ASCII letters, digits, whitespace, and hyphens
/// 3. Replace whitespace runs with a single hyphen
/// 4. Collapse repeated hyphens and trim them from both ends
///
/// # Examples
///
/// ```
/// use blogpub_core::slug::generate_slug;
///
/// assert_eq!(generate_slug("Hello, World!"), "hello-world");
/// assert_eq!(generate_slug("  multiple   spaces  "), "multiple-spaces");
/// ```
pub fn generate_slug(title: &str) -> String {
    let slug = title.to_lowercase();
    let slug = DISALLOWED.replace_all(&slug, "");
    let slug = SEPARATORS.replace_all(&slug, "-");
    let slug = HYPHEN_RUNS.replace_all(&slug, "-");
    slug.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_basic() {
        assert_eq!(generate_slug("Hello World"), "hello-world");
    }

    #[test]
    fn punctuation_dropped() {
        assert_eq!(generate_slug("Hello, World!"), "hello-world");
    }

    #[test]
    fn whitespace_collapsed_and_trimmed() {
        assert_eq!(generate_slug("  multiple   spaces  "), "multiple-spaces");
    }

    #[test]
    fn deterministic() {
        let title = "Why Rust? A Retrospective";
        assert_eq!(generate_slug(title), generate_slug(title));
    }

    #[test]
    fn slug_cases() {
        let cases: Vec<(&str, &str)> = vec![
            ("import.meta.glob", "importmetaglob"),
            ("a---b", "a-b"),
            ("--leading and trailing--", "leading-and-trailing"),
            ("snake_case_title", "snakecasetitle"),
            ("Tabs\tand\nnewlines", "tabs-and-newlines"),
            ("TypeScript & JSX", "typescript-jsx"),
            ("Q3 2024: What's Next?", "q3-2024-whats-next"),
            // Non-ASCII letters are not transliterated, only removed
            ("Héllo Wörld", "hllo-wrld"),
            ("🚀 Getting Started", "getting-started"),
            ("!!!", ""),
            ("", ""),
        ];

        for (input, expected) in &cases {
            let actual = generate_slug(input);
            assert_eq!(
                &actual, expected,
                "Mismatch for {:?}: got {:?}, expected {:?}",
                input, actual, expected
            );
        }
    }
}
