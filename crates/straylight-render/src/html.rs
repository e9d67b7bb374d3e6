//! HTML generator.
//!
//! Emits a `<pre><code>` block holding one `<div>` per source line. Comment
//! lines are a single muted div; code lines hold one `<span>` per token.

use crate::{RenderOptions, StyleMode};
use straylight_lexer::{Category, HighlightedLine, LineKind};

/// Generate HTML for the given lines.
pub fn generate(lines: &[HighlightedLine<'_>], options: &RenderOptions) -> String {
    let mut html = String::new();
    html.push_str("<pre class=\"lean-source\"><code>");

    for line in lines {
        generate_line(line, options.style, &mut html);
    }

    html.push_str("</code></pre>\n");
    html
}

fn generate_line(line: &HighlightedLine<'_>, style: StyleMode, out: &mut String) {
    match line.kind {
        LineKind::Comment => {
            out.push_str("<div");
            push_style(Category::Comment, style, out);
            out.push('>');
            escape_into(line.text, out);
            out.push_str("</div>");
        }
        LineKind::Code => {
            out.push_str("<div>");
            for token in &line.tokens {
                out.push_str("<span");
                push_style(token.category, style, out);
                out.push('>');
                escape_into(token.text, out);
                out.push_str("</span>");
            }
            out.push_str("</div>");
        }
    }
}

fn push_style(category: Category, style: StyleMode, out: &mut String) {
    match style {
        StyleMode::Inline => {
            out.push_str(&format!(" style=\"color: {}\"", category.color()));
        }
        StyleMode::Classes => {
            out.push_str(&format!(" class=\"{}\"", category.class_name()));
        }
    }
}

/// Escape text for use in element content or a quoted attribute.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
