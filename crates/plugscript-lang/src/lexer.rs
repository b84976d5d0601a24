//! Minimal tokenizer for script sources
//!
//! Only distinguishes what the namespace scan needs: trivia (whitespace,
//! comments, shebang), identifiers, dots, and everything else. Tokens are
//! produced on demand, so a consumer that stops early never looks at the rest
//! of the file.

/// Kind of a lexical token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Whitespace,
    /// `// ...` up to (not including) the line break
    LineComment,
    /// `/* ... */`, possibly nested
    BlockComment,
    /// `#!...` on the first line
    Shebang,
    /// Plain or backtick-quoted identifier
    Identifier,
    Dot,
    /// Any other single character
    Other,
}

/// A token borrowing its text from the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte offset of the token in the source
    pub offset: usize,
}

impl Token<'_> {
    /// Whitespace and comments
    pub fn is_trivia(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Whitespace
                | TokenKind::LineComment
                | TokenKind::BlockComment
                | TokenKind::Shebang
        )
    }

    /// Whether this token is the identifier `keyword`
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Identifier && self.text == keyword
    }
}

pub fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

pub fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lazy token iterator over a source string
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Byte offset of the next token
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let start = self.pos;
        let rest = &self.source[start..];
        let first = rest.chars().next()?;

        let (kind, len) = if start == 0 && rest.starts_with("#!") {
            (TokenKind::Shebang, line_len(rest))
        } else if first.is_whitespace() {
            (TokenKind::Whitespace, prefix_len(rest, char::is_whitespace))
        } else if rest.starts_with("//") {
            (TokenKind::LineComment, line_len(rest))
        } else if rest.starts_with("/*") {
            (TokenKind::BlockComment, block_comment_len(rest))
        } else if first == '`' {
            match quoted_identifier_len(rest) {
                Some(len) => (TokenKind::Identifier, len),
                None => (TokenKind::Other, 1),
            }
        } else if is_identifier_start(first) {
            (TokenKind::Identifier, prefix_len(rest, is_identifier_part))
        } else if first == '.' {
            (TokenKind::Dot, 1)
        } else {
            (TokenKind::Other, first.len_utf8())
        };

        self.pos += len;
        Some(Token {
            kind,
            text: &self.source[start..start + len],
            offset: start,
        })
    }
}

fn prefix_len(text: &str, pred: impl Fn(char) -> bool) -> usize {
    text.char_indices()
        .find(|(_, c)| !pred(*c))
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

fn line_len(text: &str) -> usize {
    text.find('\n').unwrap_or(text.len())
}

// Unterminated comments run to the end of the input.
fn block_comment_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i..].starts_with(b"/*") {
            depth += 1;
            i += 2;
        } else if bytes[i..].starts_with(b"*/") {
            depth -= 1;
            i += 2;
            if depth == 0 {
                return i;
            }
        } else {
            i += 1;
        }
    }

    bytes.len()
}

fn quoted_identifier_len(text: &str) -> Option<usize> {
    let body = &text[1..];
    match body.find(['`', '\n']) {
        Some(end) if body[end..].starts_with('`') && end > 0 => Some(end + 2),
        _ => None,
    }
}
