use serde::Serialize;

/// Byte range of a token within its line (half-open).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Lexical class of a token. Drives display color only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Whole-line documentation or comment.
    Comment,
    StringLiteral,
    /// Control and tactic vocabulary (`if`, `by`, `simp`, ...).
    Keyword,
    /// Definition-introducing words and modifiers (`def`, `theorem`, `private`, ...).
    Declaration,
    /// Capitalized identifier (`Nat`, `List`).
    TypeIdentifier,
    NumericLiteral,
    PlainIdentifier,
    /// Any single non-word character.
    Punctuation,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Comment,
        Category::StringLiteral,
        Category::Keyword,
        Category::Declaration,
        Category::TypeIdentifier,
        Category::NumericLiteral,
        Category::PlainIdentifier,
        Category::Punctuation,
    ];

    /// Fixed display color.
    pub fn color(self) -> &'static str {
        match self {
            Category::Comment => "#596775",
            Category::StringLiteral => "#7ee787",
            Category::Keyword => "#54aeff",
            Category::Declaration => "#d29922",
            Category::TypeIdentifier => "#d2a8ff",
            Category::NumericLiteral => "#f0883e",
            Category::PlainIdentifier => "#b6e3ff",
            Category::Punctuation => "#b6e3ff",
        }
    }

    /// CSS class used by class-based rendering.
    pub fn class_name(self) -> &'static str {
        match self {
            Category::Comment => "tok-comment",
            Category::StringLiteral => "tok-string",
            Category::Keyword => "tok-keyword",
            Category::Declaration => "tok-declaration",
            Category::TypeIdentifier => "tok-type",
            Category::NumericLiteral => "tok-number",
            Category::PlainIdentifier => "tok-ident",
            Category::Punctuation => "tok-punct",
        }
    }

    /// Short lowercase name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Category::Comment => "comment",
            Category::StringLiteral => "string_literal",
            Category::Keyword => "keyword",
            Category::Declaration => "declaration",
            Category::TypeIdentifier => "type_identifier",
            Category::NumericLiteral => "numeric_literal",
            Category::PlainIdentifier => "plain_identifier",
            Category::Punctuation => "punctuation",
        }
    }
}

/// A classified, non-empty slice of a source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub text: &'a str,
    pub category: Category,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, category: Category, span: Span) -> Self {
        Self {
            text,
            category,
            span,
        }
    }
}

/// Outcome of the per-line comment test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Comment,
    Code,
}

/// One source line together with its tokens.
///
/// `index` is the zero-based line number and is only a stable rendering key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightedLine<'a> {
    pub index: usize,
    pub text: &'a str,
    pub kind: LineKind,
    pub tokens: Vec<Token<'a>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_are_fixed() {
        assert_eq!(Category::Comment.color(), "#596775");
        assert_eq!(Category::Keyword.color(), "#54aeff");
        assert_eq!(Category::Declaration.color(), "#d29922");
        assert_eq!(Category::PlainIdentifier.color(), Category::Punctuation.color());
    }

    #[test]
    fn test_class_names_unique() {
        let mut names: Vec<&str> = Category::ALL.iter().map(|c| c.class_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Category::ALL.len());
    }

    #[test]
    fn test_name_matches_serialized_form() {
        for category in Category::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, serde_json::Value::String(category.name().into()));
        }
    }

    #[test]
    fn test_highlighted_line_shape() {
        let line = HighlightedLine {
            index: 2,
            text: "by",
            kind: LineKind::Code,
            tokens: vec![Token::new("by", Category::Keyword, Span::new(0, 2))],
        };
        assert_eq!(
            serde_json::to_value(&line).unwrap(),
            serde_json::json!({
                "index": 2,
                "text": "by",
                "kind": "code",
                "tokens": [
                    { "text": "by", "category": "keyword", "span": { "start": 0, "end": 2 } }
                ]
            })
        );
    }

    #[test]
    fn test_comment_line_kind_serialized() {
        assert_eq!(serde_json::to_value(LineKind::Comment).unwrap(), "comment");
    }

    #[test]
    fn test_span_len() {
        let span = Span::new(3, 7);
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
        assert!(Span::new(2, 2).is_empty());
    }
}
