#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod macros;
pub mod tokenizer;

pub use crate::tokenizer::profile::LanguageProfile;
pub use crate::tokenizer::token::{Token, TokenType};
pub use crate::tokenizer::tokenizer::{State, Tokenizer};

/// Returns the `line_number`-th (1-based) line of `content`, without its
/// trailing newline.
pub fn get_line_at(content: &str, line_number: usize) -> Option<&str> {
    content.lines().nth(line_number.checked_sub(1)?)
}

pub fn display_error(error: &Error, source_name: &str, line_text: &str) {
    /*
        Error: UnterminatedString (is there a missing closing `"`?)
        -> input.txt
           |
        20 | let a = "oops
           | --------^
    */

    let line_string = error.line().to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", source_name);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    // The column counts non-whitespace characters, so the caret is exact
    // only up to interior spacing.
    let arrows = error.column().saturating_sub(removed_whitespace).max(1);

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (&string[start..], start)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at() {
        let content = "Hello, world!\nSecond line\n\nTesting { }\n";

        assert_eq!(super::get_line_at(content, 1), Some("Hello, world!"));
        assert_eq!(super::get_line_at(content, 2), Some("Second line"));
        assert_eq!(super::get_line_at(content, 3), Some(""));
        assert_eq!(super::get_line_at(content, 4), Some("Testing { }"));
        assert_eq!(super::get_line_at(content, 5), None);
        assert_eq!(super::get_line_at(content, 0), None);
    }

    #[test]
    fn test_remove_starting_whitespace() {
        assert_eq!(super::remove_starting_whitespace("  let x"), ("let x", 2));
        assert_eq!(super::remove_starting_whitespace("let x"), ("let x", 0));
        assert_eq!(super::remove_starting_whitespace(""), ("", 0));
    }
}
