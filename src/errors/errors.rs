use std::fmt::Display;

use thiserror::Error;

use crate::tokenizer::profile::LanguageProfile;
use crate::tokenizer::token::{Token, TokenType};

/// A diagnostic for a malformed lexeme, carrying the 1-based position of
/// the token it was derived from.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    line: usize,
    column: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: usize, column: usize) -> Self {
        Error {
            internal_error: error_impl,
            line,
            column,
        }
    }

    /// Builds a diagnostic from an `Invalid` token, categorized by the
    /// shape of its lexeme. Returns `None` for tokens of any other type.
    pub fn from_token(token: &Token, profile: &LanguageProfile) -> Option<Error> {
        if token.ty != TokenType::Invalid {
            return None;
        }

        let lexeme = token.value.clone();
        let internal_error = if lexeme.starts_with('"') {
            // A string lexeme that reached its closing quote can only be
            // invalid because of a bad escape; one that did not is
            // unterminated.
            if lexeme.len() > 1 && lexeme.ends_with('"') {
                ErrorImpl::UnknownEscape { lexeme }
            } else {
                ErrorImpl::UnterminatedString { lexeme }
            }
        } else if !lexeme.is_empty() && lexeme.chars().all(|c| profile.is_operator_start(c)) {
            ErrorImpl::UnrecognisedOperator { lexeme }
        } else if lexeme.starts_with(|c: char| c.is_ascii_digit())
            || lexeme.starts_with('-')
            || lexeme.starts_with('.')
        {
            ErrorImpl::MalformedNumber { lexeme }
        } else {
            ErrorImpl::UnrecognisedSequence { lexeme }
        };

        Some(Error::new(internal_error, token.line, token.column))
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::UnknownEscape { .. } => "UnknownEscape",
            ErrorImpl::UnrecognisedOperator { .. } => "UnrecognisedOperator",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::UnrecognisedSequence { .. } => "UnrecognisedSequence",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString { .. } => {
                ErrorTip::Suggestion(String::from("is there a missing closing `\"`?"))
            }
            ErrorImpl::UnknownEscape { .. } => ErrorTip::Suggestion(String::from(
                "supported escape characters are n, t, v, a, b, f, r, \\ and \"",
            )),
            ErrorImpl::UnrecognisedOperator { lexeme } => {
                ErrorTip::Suggestion(format!("`{}` is not a known operator", lexeme))
            }
            ErrorImpl::MalformedNumber { lexeme } => {
                ErrorTip::Suggestion(format!("`{}` is not a valid numeric literal", lexeme))
            }
            ErrorImpl::UnrecognisedSequence { .. } => ErrorTip::None,
        }
    }

    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unterminated string literal: {lexeme:?}")]
    UnterminatedString { lexeme: String },
    #[error("unknown escape sequence in string literal: {lexeme:?}")]
    UnknownEscape { lexeme: String },
    #[error("unrecognised operator: {lexeme:?}")]
    UnrecognisedOperator { lexeme: String },
    #[error("malformed numeric literal: {lexeme:?}")]
    MalformedNumber { lexeme: String },
    #[error("unrecognised character sequence: {lexeme:?}")]
    UnrecognisedSequence { lexeme: String },
}
