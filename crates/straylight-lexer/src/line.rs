use crate::token::LineKind;

/// Prefixes that mark a whole line as documentation or comment:
/// doc-block opener, doc-block closer, box-drawing rule, `//`, em dash, `--`.
pub const COMMENT_PREFIXES: &[&str] = &["/-!", "-/", "━", "//", "—", "--"];

/// Classify a single line by prefix after trimming.
///
/// No state is carried between lines, so the body of a multi-line `/-! ... -/`
/// block is only muted where its own text starts with one of the prefixes.
pub fn classify(line: &str) -> LineKind {
    let trimmed = line.trim();
    if COMMENT_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
        LineKind::Comment
    } else {
        LineKind::Code
    }
}
