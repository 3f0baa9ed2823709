use crate::validator::Validator;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MOBILE_NUMBER_PATTERN: Regex =
        Regex::new("^09[0-9]{9}$").expect("mobile number pattern is valid");
    static ref LANDLINE_NUMBER_PATTERN: Regex =
        Regex::new("^0[0-9]{10}$").expect("landline number pattern is valid");
}

const INTERNATIONAL_PREFIXES: &[&str] = &["+98", "0098"];

/// Strip all whitespace and replace the international prefix (`+98` or `0098`) with `0`.
pub fn normalize_phone_number(number: &str) -> String {
    let stripped: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    for prefix in INTERNATIONAL_PREFIXES {
        if let Some(rest) = stripped.strip_prefix(prefix) {
            return format!("0{rest}");
        }
    }
    stripped
}

pub struct MobileNumberChecker;

impl Validator for MobileNumberChecker {
    fn is_valid_match(&self, input: &str) -> bool {
        MOBILE_NUMBER_PATTERN.is_match(&normalize_phone_number(input))
    }
}

pub struct LandlineNumberChecker;

impl Validator for LandlineNumberChecker {
    fn is_valid_match(&self, input: &str) -> bool {
        LANDLINE_NUMBER_PATTERN.is_match(&normalize_phone_number(input))
    }
}

pub fn is_mobile_number_valid(number: &str) -> bool {
    MobileNumberChecker.is_valid_match(number)
}

pub fn is_landline_number_valid(number: &str) -> bool {
    LandlineNumberChecker.is_valid_match(number)
}
