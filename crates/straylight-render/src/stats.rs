use straylight_lexer::{Category, HighlightedLine, LineKind};

/// Summary figures for a highlighted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentStats {
    pub lines: usize,
    pub comment_lines: usize,
    pub code_lines: usize,
    /// `theorem` and `lemma` declarations.
    pub theorems: usize,
    /// `sorry` placeholders in code.
    pub sorries: usize,
}

impl DocumentStats {
    /// One-line description, e.g. `3 theorems. 0 sorry. 42 lines of Lean 4.`
    pub fn summary(&self) -> String {
        format!(
            "{} theorem{}. {} sorry. {} lines of Lean 4.",
            self.theorems,
            if self.theorems == 1 { "" } else { "s" },
            self.sorries,
            self.lines
        )
    }
}

/// Count lines and notable words. Words inside comments and string
/// literals are not counted.
///
/// Lines are counted the way `wc -l` does: the empty line that follows a
/// final newline is not a line of source.
pub fn collect(lines: &[HighlightedLine<'_>]) -> DocumentStats {
    let lines = match lines.split_last() {
        Some((last, rest)) if last.text.is_empty() => rest,
        _ => lines,
    };
    let mut stats = DocumentStats {
        lines: lines.len(),
        ..DocumentStats::default()
    };

    for line in lines {
        match line.kind {
            LineKind::Comment => stats.comment_lines += 1,
            LineKind::Code => stats.code_lines += 1,
        }
        for token in &line.tokens {
            match (token.category, token.text) {
                (Category::Declaration, "theorem" | "lemma") => stats.theorems += 1,
                (Category::PlainIdentifier, "sorry") => stats.sorries += 1,
                _ => {}
            }
        }
    }

    stats
}
