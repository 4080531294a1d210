use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    /// The fixed set of valid operators. Longest-match resolution checks
    /// candidate strings against this table; there is no generic "any run
    /// of operator characters" rule.
    pub static ref OPERATORS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        for op in [
            "+", "-", "*", "**", "/", "//", "%", "++", "--",
            "==", "!", "!=",
            "<", "<=", ">", ">=",
            "&&", "||",
            "&", "|", "^", "~", "<<", ">>",
            "=",
            "+=", "-=", "*=", "**=", "/=", "//=", "%=",
            "&&=", "||=",
            "&=", "|=", "^=", "~=", "<<=", ">>=",
            ",",
        ] {
            set.insert(op);
        }
        set
    };
}

/// The configuration bundle that parameterizes the state machine: which
/// characters can start an operator, the full operator set, recognized
/// escape characters, forbidden characters, brackets and delimiters.
///
/// A `Tokenizer` is constructed over one profile and keeps it for its
/// lifetime.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    pub operator_start: HashSet<char>,
    pub operators: HashSet<&'static str>,
    pub escapes: HashSet<char>,
    pub forbidden: HashSet<char>,
    pub brackets: HashSet<char>,
    pub delimiters: HashSet<char>,
}

impl Default for LanguageProfile {
    fn default() -> Self {
        let operator_start: HashSet<char> = "+-*/%=!<>&|^~,".chars().collect();
        let brackets: HashSet<char> = "(){}[]".chars().collect();
        let forbidden: HashSet<char> = "#$':?@\\`".chars().collect();

        // Delimiters are the union of operator starters, brackets and
        // forbidden characters, plus the statement separators.
        let mut delimiters: HashSet<char> = ";,".chars().collect();
        delimiters.extend(&operator_start);
        delimiters.extend(&brackets);
        delimiters.extend(&forbidden);

        LanguageProfile {
            operator_start,
            operators: OPERATORS.clone(),
            escapes: "ntvabfr\\\"".chars().collect(),
            forbidden,
            brackets,
            delimiters,
        }
    }
}

impl LanguageProfile {
    pub fn is_operator_start(&self, c: char) -> bool {
        self.operator_start.contains(&c)
    }

    pub fn is_operator(&self, s: &str) -> bool {
        self.operators.contains(s)
    }

    pub fn is_escape(&self, c: char) -> bool {
        self.escapes.contains(&c)
    }

    pub fn is_bracket(&self, c: char) -> bool {
        self.brackets.contains(&c)
    }

    pub fn is_delimiter(&self, c: char) -> bool {
        self.delimiters.contains(&c)
    }
}
