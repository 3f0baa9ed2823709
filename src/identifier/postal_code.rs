use crate::validator::Validator;
use lazy_static::lazy_static;
use regex::Regex;

pub struct PostalCodeChecker;

const POSTAL_CODE_LENGTH: usize = 10;
const REPEATED_PREFIX_LENGTH: usize = 4;

lazy_static! {
    static ref POSTAL_CODE_PATTERN: Regex =
        Regex::new("^[13-9]{4}[1346-9][013-9]{5}$").expect("postal code pattern is valid");
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_postal_code_token(token: &str) -> bool {
    if token.len() != POSTAL_CODE_LENGTH || !POSTAL_CODE_PATTERN.is_match(token) {
        return false;
    }
    let prefix = &token.as_bytes()[..REPEATED_PREFIX_LENGTH];
    !prefix.iter().all(|b| *b == prefix[0])
}

impl Validator for PostalCodeChecker {
    // A postal code is searched for, not anchored: it must be a whole word of the
    // input (bounded by ASCII non-word characters or the ends of the input).
    fn is_valid_match(&self, input: &str) -> bool {
        input
            .split(|c: char| !is_word_char(c))
            .any(is_postal_code_token)
    }
}

pub fn is_postal_code_valid(code: &str) -> bool {
    PostalCodeChecker.is_valid_match(code)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_valid_postal_codes() {
        let valid_codes = vec![
            "1619735744",
            "3931115386",
            "9998111111",
            "1311700000",
            // surrounded by non-word characters
            "code: 1619735744.",
            "(1619735744)",
        ];
        for code in valid_codes {
            println!("testing for input {code}");
            assert!(is_postal_code_valid(code));
        }
    }

    #[test]
    fn test_invalid_postal_codes() {
        let invalid_codes = vec![
            // first digit out of class
            "2619735744",
            "0619735744",
            // fifth digit out of class
            "1619235744",
            "1619535744",
            // sixth digit out of class
            "1619725744",
            // four identical leading digits
            "1111735744",
            "9999735744",
            // wrong length
            "161973574",
            "16197357444",
            "",
            // glued to other word characters
            "a1619735744",
            "1619735744_",
            // Persian digits
            "۱۶۱۹۷۳۵۷۴۴",
        ];
        for code in invalid_codes {
            println!("testing for input {code}");
            assert!(!is_postal_code_valid(code));
        }
    }
}
