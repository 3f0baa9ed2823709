use crate::validator::Validator;
use iso_iec_7064::{System, MOD_97_10};

pub struct IbanChecker;

const IBAN_LENGTH: usize = 26;
const ROTATED_PREFIX_LENGTH: usize = 4;

/// Move the country code and check digits to the end, then expand every letter
/// into its two-digit value (A = 10 ... Z = 35).
fn to_numeral(iban: &str) -> String {
    let (prefix, rest) = iban.split_at(ROTATED_PREFIX_LENGTH);
    let mut numeral = String::with_capacity(IBAN_LENGTH * 2);
    for c in rest.chars().chain(prefix.chars()) {
        if c.is_ascii_uppercase() {
            numeral.push_str(&(c as u32 - 55).to_string());
        } else {
            numeral.push(c);
        }
    }
    numeral
}

impl Validator for IbanChecker {
    fn is_valid_match(&self, input: &str) -> bool {
        let iban: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        if iban.len() != IBAN_LENGTH
            || !iban
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return false;
        }
        // ISO 7064 MOD 97-10: the numeral must be congruent to 1 modulo 97
        MOD_97_10.validate_string(&to_numeral(&iban))
    }
}

pub fn is_iban_valid(iban: &str) -> bool {
    IbanChecker.is_valid_match(iban)
}
