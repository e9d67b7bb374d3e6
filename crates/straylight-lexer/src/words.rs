use crate::token::Category;

/// Control-flow and tactic vocabulary.
pub const TACTIC_KEYWORDS: &[&str] = &[
    "import", "where", "if", "then", "else", "let", "in", "do", "return", "match", "with", "fun",
    "by", "have", "show", "from", "calc", "at", "intro", "exact", "apply", "rw", "simp", "omega",
    "ring", "constructor", "cases", "induction", "rcases", "obtain", "refine", "use", "ext",
    "push_neg", "by_contra", "by_cases", "subst", "conv",
];

/// Words that introduce a declaration, plus visibility and computability modifiers.
pub const DECLARATION_KEYWORDS: &[&str] = &[
    "def", "theorem", "lemma", "structure", "inductive", "class", "instance", "namespace", "end",
    "section", "variable", "open", "export", "deriving", "private", "protected", "partial",
    "unsafe", "noncomputable",
];

pub fn is_tactic_keyword(word: &str) -> bool {
    TACTIC_KEYWORDS.contains(&word)
}

pub fn is_declaration_keyword(word: &str) -> bool {
    DECLARATION_KEYWORDS.contains(&word)
}

/// Classify a word token by its text alone.
///
/// First match wins: tactic keyword, declaration keyword, leading ASCII
/// uppercase, leading ASCII digit, otherwise a plain identifier.
pub fn classify_word(word: &str) -> Category {
    if is_tactic_keyword(word) {
        return Category::Keyword;
    }
    if is_declaration_keyword(word) {
        return Category::Declaration;
    }
    match word.chars().next() {
        Some(c) if c.is_ascii_uppercase() => Category::TypeIdentifier,
        Some(c) if c.is_ascii_digit() => Category::NumericLiteral,
        _ => Category::PlainIdentifier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_keyword() {
        assert_eq!(classify_word("theorem"), Category::Declaration);
        assert_eq!(classify_word("noncomputable"), Category::Declaration);
        assert_eq!(classify_word("end"), Category::Declaration);
    }

    #[test]
    fn test_tactic_keyword() {
        assert_eq!(classify_word("simp"), Category::Keyword);
        assert_eq!(classify_word("by_contra"), Category::Keyword);
        assert_eq!(classify_word("import"), Category::Keyword);
    }

    #[test]
    fn test_type_identifier() {
        assert_eq!(classify_word("Nat"), Category::TypeIdentifier);
        assert_eq!(classify_word("List"), Category::TypeIdentifier);
    }

    #[test]
    fn test_numeric_literal() {
        assert_eq!(classify_word("42"), Category::NumericLiteral);
        // Leading digit is enough
        assert_eq!(classify_word("0x1F"), Category::NumericLiteral);
    }

    #[test]
    fn test_plain_identifier() {
        assert_eq!(classify_word("foo"), Category::PlainIdentifier);
        assert_eq!(classify_word("_x"), Category::PlainIdentifier);
        assert_eq!(classify_word("sorry"), Category::PlainIdentifier);
    }

    #[test]
    fn test_keyword_match_is_case_sensitive() {
        assert_eq!(classify_word("Theorem"), Category::TypeIdentifier);
        assert_eq!(classify_word("SIMP"), Category::TypeIdentifier);
    }

    #[test]
    fn test_keyword_prefix_is_not_keyword() {
        assert_eq!(classify_word("define"), Category::PlainIdentifier);
        assert_eq!(classify_word("simp_all"), Category::PlainIdentifier);
    }

    #[test]
    fn test_tables_are_disjoint() {
        for word in TACTIC_KEYWORDS {
            assert!(!is_declaration_keyword(word), "{word} in both tables");
        }
    }

    #[test]
    fn test_classification_is_pure() {
        for word in ["theorem", "Nat", "42", "foo", "rw"] {
            assert_eq!(classify_word(word), classify_word(word));
        }
    }
}
