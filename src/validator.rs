use crate::financial::{CardNumberChecksum, IbanChecker};
use crate::identifier::{LegalEntityIdChecksum, NationalIdChecksum, PostalCodeChecker};
use crate::phone::{EmailChecker, LandlineNumberChecker, MobileNumberChecker};
use serde::{Deserialize, Serialize};

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, input: &str) -> bool;
}

/// Parse a string made only of ASCII digits. Any other character (including
/// Persian or Arabic-Indic digits) makes the whole input invalid.
pub(crate) fn ascii_digits(input: &str) -> Option<Vec<u32>> {
    input
        .chars()
        .map(|c| if c.is_ascii_digit() { c.to_digit(10) } else { None })
        .collect()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ValidatorKind {
    NationalIdChecksum,
    LegalEntityIdChecksum,
    PostalCode,
    CardNumberChecksum,
    IbanChecker,
    MobileNumber,
    LandlineNumber,
    Email,
}

impl Validator for ValidatorKind {
    fn is_valid_match(&self, input: &str) -> bool {
        match self {
            ValidatorKind::NationalIdChecksum => NationalIdChecksum.is_valid_match(input),
            ValidatorKind::LegalEntityIdChecksum => LegalEntityIdChecksum.is_valid_match(input),
            ValidatorKind::PostalCode => PostalCodeChecker.is_valid_match(input),
            ValidatorKind::CardNumberChecksum => CardNumberChecksum.is_valid_match(input),
            ValidatorKind::IbanChecker => IbanChecker.is_valid_match(input),
            ValidatorKind::MobileNumber => MobileNumberChecker.is_valid_match(input),
            ValidatorKind::LandlineNumber => LandlineNumberChecker.is_valid_match(input),
            ValidatorKind::Email => EmailChecker.is_valid_match(input),
        }
    }
}
