//! Utility macros for the tokenizer.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! These macros reduce boilerplate when building token values, in
//! particular expected sequences in tests.

/// Creates a `Token` instance.
///
/// # Arguments
///
/// * `$line` - 1-based line of the token's first character
/// * `$column` - 1-based column of the token's first character
/// * `$ty` - The TokenType
/// * `$value` - The token's literal text
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(1, 1, TokenType::Integer, "42");
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($line:expr, $column:expr, $ty:expr, $value:expr) => {
        $crate::tokenizer::token::Token {
            line: $line,
            column: $column,
            ty: $ty,
            value: String::from($value),
        }
    };
}
