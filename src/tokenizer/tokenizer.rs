use crate::tokenizer::profile::LanguageProfile;
use crate::tokenizer::token::{Token, TokenType};

/// The lexical states of the scan. The machine starts in `NewToken` and
/// every token resolves back to it; end of input triggers a finalization
/// pass instead of a dedicated terminal state.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum State {
    NewToken,

    Identifier,
    Integer,
    Floating,

    Commentary,

    Operator,

    String,
    StringEscape,

    Invalid,
}

/// The in-progress lexeme: the position of its first character, the type
/// decided so far and the accumulated text. Pushed into the token list only
/// on finalize, so the public sequence never contains a half-built token.
#[derive(Debug, Clone)]
struct TokenBuilder {
    line: usize,
    column: usize,
    ty: TokenType,
    value: String,
}

impl TokenBuilder {
    fn new(line: usize, column: usize) -> Self {
        TokenBuilder {
            line,
            column,
            ty: TokenType::Empty,
            value: String::new(),
        }
    }

    // A builder that started on a quote belongs to a (possibly broken)
    // string literal; delimiters do not end it, only `"` or end of input.
    fn is_string(&self) -> bool {
        self.value.starts_with('"')
    }

    fn into_token(self) -> Token {
        Token::new(self.line, self.column, self.ty, self.value)
    }
}

#[derive(PartialEq)]
enum Step {
    /// The character was consumed by the current state.
    Done,
    /// The current token was finalized; redispatch the same character.
    Again,
}

pub struct Tokenizer {
    profile: LanguageProfile,
    tokens: Vec<Token>,
    pending: Option<TokenBuilder>,
    state: State,
    line: usize,
    column: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::new(LanguageProfile::default())
    }
}

impl Tokenizer {
    pub fn new(profile: LanguageProfile) -> Self {
        Tokenizer {
            profile,
            tokens: Vec::new(),
            pending: None,
            state: State::NewToken,
            line: 1,
            column: 0,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn last_token(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    /// Clears the token sequence and restores the initial scan position.
    pub fn reset(&mut self) {
        self.tokens.clear();
        self.pending = None;
        self.state = State::NewToken;
        self.line = 1;
        self.column = 0;
    }

    /// Scans `input` to completion, appending to the cumulative token
    /// sequence and returning it. Malformed lexemes come back as `Invalid`
    /// tokens; this never fails.
    pub fn tokenize(&mut self, input: &str) -> &[Token] {
        for c in input.chars() {
            if c.is_ascii_whitespace() {
                self.scan_whitespace(c);
                continue;
            }

            // The single point where the cursor advances. A state that
            // finalizes on `c` asks for the same character to be
            // redispatched instead of re-reading the input.
            self.column += 1;
            while self.step(c) == Step::Again {}
        }

        self.finish();
        &self.tokens
    }

    fn step(&mut self, c: char) -> Step {
        match self.state {
            State::NewToken => self.start_token(c),
            State::Identifier => self.scan_identifier(c),
            State::Integer => self.scan_integer(c),
            State::Floating => self.scan_floating(c),
            State::Commentary => {
                self.push_char(c);
                Step::Done
            }
            State::Operator => self.scan_operator(c),
            State::String => self.scan_string(c),
            State::StringEscape => self.scan_string_escape(c),
            State::Invalid => self.scan_invalid(c),
        }
    }

    /// Whitespace is a token boundary everywhere except inside string
    /// literals and comment bodies. Newlines advance the line counter and
    /// terminate comments.
    fn scan_whitespace(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
            if self.state == State::Commentary {
                self.finalize();
            }
        }

        match self.state {
            State::String | State::Commentary => self.push_char(c),
            State::Invalid if self.pending_is_string() => self.push_char(c),
            State::StringEscape => {
                // Whitespace is not a recognized escape character; the raw
                // backslash stays in the value so the malformed sequence is
                // visible downstream.
                self.push_char('\\');
                self.set_type(TokenType::Invalid);
                self.state = State::Invalid;
            }
            // A bare `-` before whitespace is the minus operator, not the
            // prefix of a negative number.
            State::Integer if self.pending_value_is("-") => {
                self.finalize_as(TokenType::Operator);
            }
            State::Operator => self.finalize_operator(),
            State::NewToken => {}
            _ => self.finalize(),
        }
    }

    fn start_token(&mut self, c: char) -> Step {
        let mut builder = TokenBuilder::new(self.line, self.column);

        if c == '-' || c.is_ascii_digit() {
            builder.ty = TokenType::Integer;
            self.state = State::Integer;
        } else if c == '_' || c.is_ascii_alphabetic() {
            builder.ty = TokenType::Identifier;
            self.state = State::Identifier;
        } else if c == '.' {
            builder.ty = TokenType::Floating;
            self.state = State::Floating;
        } else if c == '"' {
            builder.ty = TokenType::String;
            self.state = State::String;
        } else if c == '#' {
            builder.ty = TokenType::Commentary;
            self.state = State::Commentary;
        } else if self.profile.is_operator_start(c) {
            builder.ty = TokenType::Operator;
            self.state = State::Operator;
        } else if self.profile.is_bracket(c) {
            // Brackets are single characters, finalized on the spot.
            builder.ty = TokenType::Bracket;
            builder.value.push(c);
            self.tokens.push(builder.into_token());
            self.state = State::NewToken;
            return Step::Done;
        } else {
            builder.ty = TokenType::Invalid;
            self.state = State::Invalid;
        }

        builder.value.push(c);
        self.pending = Some(builder);
        Step::Done
    }

    fn scan_identifier(&mut self, c: char) -> Step {
        if self.profile.is_delimiter(c) {
            self.finalize();
            return Step::Again;
        }
        if !c.is_ascii_alphanumeric() && c != '_' {
            self.set_type(TokenType::Invalid);
            self.state = State::Invalid;
        }
        self.push_char(c);
        Step::Done
    }

    fn scan_integer(&mut self, c: char) -> Step {
        // A lone leading `-` can still extend into a compound operator, or
        // fail to form one.
        if self.pending_value_is("-") && self.profile.is_operator_start(c) {
            if c == '-' || c == '=' {
                self.set_type(TokenType::Operator);
                self.state = State::Operator;
            } else {
                self.set_type(TokenType::Invalid);
                self.state = State::Invalid;
            }
            self.push_char(c);
            return Step::Done;
        }

        if self.profile.is_delimiter(c) {
            self.finalize();
            return Step::Again;
        }

        if c == '.' {
            self.set_type(TokenType::Floating);
            self.state = State::Floating;
        } else if !c.is_ascii_digit() {
            self.set_type(TokenType::Invalid);
            self.state = State::Invalid;
        }
        self.push_char(c);
        Step::Done
    }

    fn scan_floating(&mut self, c: char) -> Step {
        if self.profile.is_delimiter(c) {
            self.finalize();
            return Step::Again;
        }
        if !c.is_ascii_digit() {
            self.set_type(TokenType::Invalid);
            self.state = State::Invalid;
        }
        self.push_char(c);
        Step::Done
    }

    fn scan_string(&mut self, c: char) -> Step {
        if c == '"' {
            self.push_char(c);
            self.finalize();
            return Step::Done;
        }
        if c == '\\' {
            // The backslash is deferred until the escape resolves.
            self.state = State::StringEscape;
            return Step::Done;
        }
        self.push_char(c);
        Step::Done
    }

    fn scan_string_escape(&mut self, c: char) -> Step {
        self.push_char('\\');
        if self.profile.is_escape(c) {
            self.state = State::String;
        } else {
            // Unknown escape: the token is permanently invalid, but the
            // rest of the broken string is still absorbed up to its
            // closing quote.
            self.set_type(TokenType::Invalid);
            self.state = State::Invalid;
        }
        self.push_char(c);
        Step::Done
    }

    fn scan_operator(&mut self, c: char) -> Step {
        if self.profile.is_operator_start(c) {
            // Longest match: extend while the candidate stays in the
            // operator set. A failed extension keeps absorbing operator
            // characters as one greedy invalid run instead of
            // resynchronizing character by character.
            let still_valid = match self.pending.as_ref() {
                Some(pending) if pending.ty != TokenType::Invalid => {
                    let mut candidate = pending.value.clone();
                    candidate.push(c);
                    self.profile.is_operator(&candidate)
                }
                _ => false,
            };
            if !still_valid {
                self.set_type(TokenType::Invalid);
            }
            self.push_char(c);
            return Step::Done;
        }

        self.finalize_operator();
        Step::Again
    }

    fn scan_invalid(&mut self, c: char) -> Step {
        if self.pending_is_string() {
            self.push_char(c);
            if c == '"' {
                self.finalize();
            }
            return Step::Done;
        }

        // Resynchronize at the next recognizable boundary.
        if self.profile.is_delimiter(c) {
            self.finalize();
            return Step::Again;
        }
        self.push_char(c);
        Step::Done
    }

    /// End-of-input pass: an unterminated string or escape is invalid, a
    /// pending operator is checked against the operator set, a bare `-` is
    /// the minus operator, and everything else keeps the type it earned.
    fn finish(&mut self) {
        match self.state {
            State::String | State::StringEscape => self.finalize_as(TokenType::Invalid),
            State::Operator => self.finalize_operator(),
            State::Integer if self.pending_value_is("-") => {
                self.finalize_as(TokenType::Operator)
            }
            _ => self.finalize(),
        }
    }

    fn finalize(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.tokens.push(pending.into_token());
        }
        self.state = State::NewToken;
    }

    fn finalize_as(&mut self, ty: TokenType) {
        self.set_type(ty);
        self.finalize();
    }

    fn finalize_operator(&mut self) {
        let valid = self
            .pending
            .as_ref()
            .is_some_and(|p| p.ty != TokenType::Invalid && self.profile.is_operator(&p.value));
        self.finalize_as(if valid {
            TokenType::Operator
        } else {
            TokenType::Invalid
        });
    }

    fn set_type(&mut self, ty: TokenType) {
        if let Some(pending) = self.pending.as_mut() {
            pending.ty = ty;
        }
    }

    fn push_char(&mut self, c: char) {
        if let Some(pending) = self.pending.as_mut() {
            pending.value.push(c);
        }
    }

    fn pending_is_string(&self) -> bool {
        self.pending.as_ref().is_some_and(TokenBuilder::is_string)
    }

    fn pending_value_is(&self, value: &str) -> bool {
        self.pending.as_ref().is_some_and(|p| p.value == value)
    }
}
