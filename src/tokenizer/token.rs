use std::fmt::Display;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenType {
    /// Placeholder for a lexeme that has not been classified yet. Never
    /// present in the finalized token sequence.
    Empty,
    Invalid,

    Integer,
    Floating,
    String,

    Commentary,

    Identifier,
    /// Reserved for downstream consumers; the tokenizer never assigns it.
    Keyword,

    Bracket,
    Operator,
}

impl Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenType::Empty => "empty",
            TokenType::Invalid => "invalid",
            TokenType::Integer => "integer",
            TokenType::Floating => "floating",
            TokenType::String => "string",
            TokenType::Commentary => "commentary",
            TokenType::Identifier => "identifier",
            TokenType::Keyword => "keyword",
            TokenType::Bracket => "bracket",
            TokenType::Operator => "operator",
        };
        write!(f, "{}", name)
    }
}

/// A single lexeme with its source position.
///
/// `line` and `column` are 1-based and refer to the first character of the
/// lexeme. `value` holds the exact substring consumed, including the quotes
/// of a string literal and the raw backslash of an escape sequence.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub line: usize,
    pub column: usize,
    pub ty: TokenType,
    pub value: String,
}

impl Token {
    pub fn new(line: usize, column: usize, ty: TokenType, value: impl Into<String>) -> Self {
        Token {
            line,
            column,
            ty,
            value: value.into(),
        }
    }

    pub fn debug(&self) {
        println!(
            "Token value: {} of {} type ({}:{})",
            self.value, self.ty, self.line, self.column
        );
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{ value: {}, type: {} }}", self.value, self.ty)
    }
}
