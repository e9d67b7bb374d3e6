//! Straylight Renderer
//!
//! Turns highlighted Lean source into HTML. Lines are rendered in order,
//! one block per line, with either inline colors or category classes plus a
//! generated stylesheet.
//!
//! ```text
//! source → highlight() → render() → RenderOutput { html, css, stats }
//! ```

pub mod css;
pub mod html;
pub mod page;
pub mod stats;

pub use page::{render_page, Theme, ThemeError};
pub use stats::DocumentStats;

use straylight_lexer::highlight;

/// How token colors are attached to the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleMode {
    /// `style="color: …"` on every span.
    #[default]
    Inline,
    /// `class="tok-…"` on every span, colors in the generated stylesheet.
    Classes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub style: StyleMode,
}

impl RenderOptions {
    pub fn classes() -> Self {
        Self {
            style: StyleMode::Classes,
        }
    }
}

/// The rendered output of a source document.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    pub html: String,
    pub css: String,
    pub stats: DocumentStats,
}

/// Highlight and render a whole document.
pub fn render(source: &str, options: &RenderOptions) -> RenderOutput {
    let lines = highlight(source);

    let html_output = html::generate(&lines, options);
    let css_output = match options.style {
        StyleMode::Inline => String::new(),
        StyleMode::Classes => css::generate(),
    };

    RenderOutput {
        html: html_output,
        css: css_output,
        stats: stats::collect(&lines),
    }
}
