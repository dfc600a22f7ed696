//! Markdown to HTML rendering.

use crate::{PublishError, Result};

/// Renderer options for building markdown-rs options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Enable GitHub Flavored Markdown constructs (tables, footnotes, strikethrough, ...).
    pub gfm: bool,
    /// Pass raw HTML in the post body through to the output.
    pub raw_html: bool,
}

impl RenderOptions {
    /// Defaults for blog posts: GFM extras on, raw HTML kept.
    pub const fn blog() -> Self {
        Self {
            gfm: true,
            raw_html: true,
        }
    }

    /// Convert to markdown-rs `Options`.
    pub fn to_markdown(self) -> markdown::Options {
        let mut constructs = markdown::Constructs {
            // Metadata has already been split off by the frontmatter parser.
            frontmatter: false,
            html_flow: self.raw_html,
            html_text: self.raw_html,
            ..Default::default()
        };

        if self.gfm {
            constructs.gfm_autolink_literal = true;
            constructs.gfm_footnote_definition = true;
            constructs.gfm_label_start_footnote = true;
            constructs.gfm_strikethrough = true;
            constructs.gfm_table = true;
            constructs.gfm_task_list_item = true;
        }

        markdown::Options {
            parse: markdown::ParseOptions {
                constructs,
                ..markdown::ParseOptions::default()
            },
            compile: markdown::CompileOptions {
                allow_dangerous_html: self.raw_html,
                ..markdown::CompileOptions::default()
            },
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::blog()
    }
}

/// Render a markdown body to an HTML fragment.
pub fn markdown_to_html(body: &str, options: &RenderOptions) -> Result<String> {
    markdown::to_html_with_options(body, &options.to_markdown())
        .map_err(|err| PublishError::Render(err.to_string()))
}
