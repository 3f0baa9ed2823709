use crate::validator::Validator;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_PATTERN: Regex = Regex::new(concat!(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+",
        r"@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?",
        r"(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$"
    ))
    .expect("email pattern is valid");
}

pub struct EmailChecker;

impl Validator for EmailChecker {
    fn is_valid_match(&self, input: &str) -> bool {
        EMAIL_PATTERN.is_match(input)
    }
}

pub fn is_email_valid(text: &str) -> bool {
    EmailChecker.is_valid_match(text)
}
