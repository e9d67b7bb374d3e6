use crate::token::{Category, Span, Token};
use crate::words::classify_word;

/// Single-line scanner.
///
/// Walks a byte cursor over one code line and emits string literals, word
/// runs and single characters until the line is exhausted. Every step
/// consumes at least one `char`, so scanning terminates on any input and the
/// emitted tokens tile the line exactly.
pub struct Scanner<'a> {
    line: &'a str,
    pos: usize,
    tokens: Vec<Token<'a>>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given line.
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            pos: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize a whole line.
    pub fn tokenize(line: &'a str) -> Vec<Token<'a>> {
        let mut scanner = Scanner::new(line);
        scanner.scan_tokens();
        scanner.tokens
    }

    fn scan_tokens(&mut self) {
        while !self.is_at_end() {
            self.scan_token();
        }
    }

    fn scan_token(&mut self) {
        match self.peek() {
            '"' => self.scan_string(),
            c if is_word_char(c) => self.scan_word(),
            _ => {
                let start = self.pos;
                self.advance();
                self.emit(start, Category::Punctuation);
            }
        }
    }

    // --- Scanners ---

    /// Scan a string literal, quotes included. A backslash hides the next
    /// character from quote matching. Without a closing quote the literal
    /// runs to the end of the line.
    fn scan_string(&mut self) {
        let start = self.pos;
        self.advance(); // opening quote

        while !self.is_at_end() {
            let c = self.peek();
            self.advance();
            match c {
                '"' => break,
                '\\' => self.advance(),
                _ => {}
            }
        }

        self.emit(start, Category::StringLiteral);
    }

    /// Scan a maximal run of word characters and classify it.
    fn scan_word(&mut self) {
        let start = self.pos;
        while !self.is_at_end() && is_word_char(self.peek()) {
            self.advance();
        }
        let category = classify_word(&self.line[start..self.pos]);
        self.emit(start, category);
    }

    // --- Helpers ---

    fn emit(&mut self, start: usize, category: Category) {
        let span = Span::new(start, self.pos);
        self.tokens
            .push(Token::new(&self.line[start..self.pos], category, span));
    }

    fn peek(&self) -> char {
        self.line[self.pos..].chars().next().unwrap_or('\0')
    }

    fn advance(&mut self) {
        if let Some(c) = self.line[self.pos..].chars().next() {
            self.pos += c.len_utf8();
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.line.len()
    }
}

/// ASCII letters, ASCII digits and underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
