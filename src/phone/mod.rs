//! Mobile and landline numbers, their operator and province registries, and email addresses.

mod email;
mod number;
mod operators;
mod provinces;

pub use email::{is_email_valid, EmailChecker};
pub use number::{
    is_landline_number_valid, is_mobile_number_valid, normalize_phone_number,
    LandlineNumberChecker, MobileNumberChecker,
};
pub use operators::{find_mobile_operator, get_mobile_operator, OperatorRecord, OPERATORS};
pub use provinces::get_landline_province;
