//! Token definitions for `JSONPath` lexical analysis
//!
//! Tokens are positioned by the 0-based byte offset of their first character.
//! Two-character operators (`==`, `&&`, ...) are not tokens of their own: the
//! parser recognises them as adjacent punctuation tokens, which works because
//! blank space is tokenized explicitly.

/// Kinds of token produced by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// End of input, returned forever once reached
    Eof,
    /// Lexical error; the token text holds the message
    Invalid,
    /// Member name or function name
    Identifier,
    /// Integer literal without fraction or exponent
    Integer,
    /// Number literal with a fraction or exponent
    Number,
    /// Quoted string literal, text holds the decoded value
    String,
    /// Run of space, tab, line feed and carriage return
    BlankSpace,
    /// Unescaped `true`
    True,
    /// Unescaped `false`
    False,
    /// Unescaped `null`
    Null,
    /// Any other single character
    Punct(char),
}

/// A positioned token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: usize,
}

impl Token {
    #[inline]
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    /// Check if token is the given punctuation character
    #[inline]
    #[must_use]
    pub fn is_punct(&self, c: char) -> bool {
        self.kind == TokenKind::Punct(c)
    }

    /// Check if token can start a comparable literal
    #[inline]
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::String
                | TokenKind::Integer
                | TokenKind::Number
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
        )
    }

    /// Check if token can be used as a member name after `.` or `..`
    #[inline]
    #[must_use]
    pub fn is_member_name(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Identifier | TokenKind::True | TokenKind::False | TokenKind::Null
        )
    }

    /// Check if token starts an embedded query (`@` or `$`)
    #[inline]
    #[must_use]
    pub fn is_query_start(&self) -> bool {
        self.is_punct('@') || self.is_punct('$')
    }

    /// Human-readable description used in error messages
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_string(),
            TokenKind::Invalid => self.text.clone(),
            TokenKind::Identifier => "identifier".to_string(),
            TokenKind::Integer => "integer".to_string(),
            TokenKind::Number => "number".to_string(),
            TokenKind::String => "string literal".to_string(),
            TokenKind::BlankSpace => "blank space".to_string(),
            TokenKind::True => "true".to_string(),
            TokenKind::False => "false".to_string(),
            TokenKind::Null => "null".to_string(),
            TokenKind::Punct(c) => format!("'{c}'"),
        }
    }
}
