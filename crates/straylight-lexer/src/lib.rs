//! Straylight Lexer
//!
//! Best-effort, line-oriented highlighting for Lean 4 source. Each line is
//! first tested for a comment prefix; code lines are then split into string
//! literals, word runs and single characters, and each word is classified by
//! its text alone. No state is carried between lines and no input can fail.
//!
//! # Example
//!
//! ```
//! use straylight_lexer::{highlight, Category, LineKind};
//!
//! let lines = highlight("-- hi\ntheorem t : True := trivial");
//! assert_eq!(lines[0].kind, LineKind::Comment);
//! assert_eq!(lines[1].tokens[0].category, Category::Declaration);
//! ```

pub mod line;
pub mod scanner;
pub mod token;
pub mod words;

pub use line::classify;
pub use scanner::Scanner;
pub use token::{Category, HighlightedLine, LineKind, Span, Token};
pub use words::classify_word;

/// Text substituted by callers when the source could not be loaded.
pub const FALLBACK_TEXT: &str = "-- Error loading file";

/// Tokenize one code line. Concatenating the token texts yields `line`.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    Scanner::tokenize(line)
}

/// Classify and tokenize one line.
///
/// A comment line comes back as a single `Comment` token spanning the whole
/// line, leading whitespace included.
pub fn highlight_line(index: usize, line: &str) -> HighlightedLine<'_> {
    let kind = classify(line);
    let tokens = match kind {
        LineKind::Comment => vec![Token::new(
            line,
            Category::Comment,
            Span::new(0, line.len()),
        )],
        LineKind::Code => tokenize(line),
    };
    HighlightedLine {
        index,
        text: line,
        kind,
        tokens,
    }
}

/// Split a document on `\n` and highlight every line in order.
///
/// A trailing `\r` is dropped from each line. Input ending in a newline
/// yields a final empty line.
pub fn highlight(source: &str) -> Vec<HighlightedLine<'_>> {
    source
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .enumerate()
        .map(|(index, line)| highlight_line(index, line))
        .collect()
}
