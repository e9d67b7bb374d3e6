//! Standalone page wrapper.

use std::fmt;
use std::str::FromStr;

use crate::html::escape;
use crate::RenderOutput;

/// Page color scheme. Only affects page chrome; token colors are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown theme name.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown theme: '{name}' (expected 'dark' or 'light')")]
pub struct ThemeError {
    pub name: String,
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(ThemeError { name: s.into() }),
        }
    }
}

const PAGE_STYLE: &str = "\
    body { font-family: ui-sans-serif, system-ui, sans-serif; margin: 2rem; }
    [data-theme=\"dark\"] body { background: #0a0a0a; color: #e6edf3; }
    [data-theme=\"light\"] body { background: #ffffff; color: #1f2328; }
    .lean-source { background: #0d1117; border: 1px solid #30363d; border-radius: 4px;
      padding: 1rem; overflow-x: auto; font-size: 0.8rem; line-height: 1.6; }
    .lean-source div { min-height: 1.6em; white-space: pre; }
    .stats { color: #8b949e; font-size: 0.875rem; }
    .download { margin-top: 1.5rem; font-size: 0.875rem; }";

/// Wrap rendered output in a complete HTML document.
///
/// `title` is the source file name; the page links to it as a raw download
/// alongside the rendered page.
pub fn render_page(title: &str, output: &RenderOutput, theme: Theme) -> String {
    let title = escape(title);
    let mut html = String::new();
    html.push_str(&format!(
        "<!DOCTYPE html>\n<html data-theme=\"{theme}\">\n<head>\n  <meta charset=\"UTF-8\">\n"
    ));
    html.push_str(&format!("  <title>{title}</title>\n"));
    html.push_str(&format!("  <style>\n{PAGE_STYLE}\n"));
    if !output.css.is_empty() {
        html.push_str(&output.css);
    }
    html.push_str("  </style>\n</head>\n<body>\n");
    html.push_str(&format!("<h1>{title}</h1>\n"));
    html.push_str(&format!(
        "<p class=\"stats\">{}</p>\n",
        escape(&output.stats.summary())
    ));
    html.push_str(&output.html);
    html.push_str(&format!(
        "<p class=\"download\"><a href=\"{title}\" download>download raw</a></p>\n"
    ));
    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render, RenderOptions};

    #[test]
    fn test_theme_parse() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        let err = "solarized".parse::<Theme>().unwrap_err();
        assert_eq!(err.name, "solarized");
        assert!(err.to_string().contains("Unknown theme"));
    }

    #[test]
    fn test_theme_display_roundtrips() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
        }
    }

    #[test]
    fn test_page_structure() {
        let output = render("def x := 1", &RenderOptions::default());
        let page = render_page("Sample.lean", &output, Theme::Light);
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<html data-theme=\"light\">"));
        assert!(page.contains("<title>Sample.lean</title>"));
        assert!(page.contains("<h1>Sample.lean</h1>"));
        assert!(page.contains("0 theorems. 0 sorry. 1 lines of Lean 4."));
        assert!(page.contains(&output.html));
    }

    #[test]
    fn test_page_includes_class_stylesheet() {
        let output = render("def x := 1", &RenderOptions::classes());
        let page = render_page("x", &output, Theme::Dark);
        assert!(page.contains(".tok-declaration { color: #d29922; }"));
    }

    #[test]
    fn test_download_link_after_code() {
        let output = render("def x := 1", &RenderOptions::default());
        let page = render_page("Villa.lean", &output, Theme::Dark);
        let link = "<a href=\"Villa.lean\" download>download raw</a>";
        assert!(page.contains(link));
        assert!(page.find(link).unwrap() > page.find("</code></pre>").unwrap());
    }

    #[test]
    fn test_title_is_escaped() {
        let output = render("", &RenderOptions::default());
        let page = render_page("<a&b>", &output, Theme::Dark);
        assert!(page.contains("<title>&lt;a&amp;b&gt;</title>"));
        assert!(page.contains("<a href=\"&lt;a&amp;b&gt;\" download>"));
    }
}
