//! Forces inline scaling on images in rendered post HTML.

use crate::{PublishError, Result};
use lol_html::{RewriteStrSettings, element, rewrite_str};

/// Inline style every `<img>` receives so images never overflow the post column.
pub const IMAGE_SCALING_STYLE: &str = "max-width: 100%; height: auto;";

/// Adds [`IMAGE_SCALING_STYLE`] to every `<img>` element.
///
/// An existing `style` attribute is preserved after the scaling rules, so
/// author-provided declarations still win in the cascade.
pub fn scale_images(html: &str) -> Result<String> {
    if !html.contains("<img") {
        return Ok(html.to_string());
    }

    rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![element!("img", |el| {
                let style = match el.get_attribute("style") {
                    Some(existing) if !existing.trim().is_empty() => {
                        format!("{IMAGE_SCALING_STYLE} {}", existing.trim())
                    }
                    _ => IMAGE_SCALING_STYLE.to_string(),
                };
                el.set_attribute("style", &style)?;
                Ok(())
            })],
            ..RewriteStrSettings::default()
        },
    )
    .map_err(|err| PublishError::Rewrite(err.to_string()))
}
