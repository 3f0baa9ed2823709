// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod error;
mod financial;
mod identifier;
mod observability;
mod phone;
mod stats;
mod text;
mod validator;

// This is the public API of the library
pub use error::ArgumentError;
pub use financial::{
    find_bank, format_card_number, get_bank_name, is_card_number_valid, is_iban_valid,
    BankRecord, CardNumberChecksum, IbanChecker, BANKS,
};
pub use identifier::{
    generate_random_national_id, generate_random_national_id_with, get_issuance_place,
    is_legal_entity_id_valid, is_national_id_valid, is_postal_code_valid, LegalEntityIdChecksum,
    NationalIdChecksum, PostalCodeChecker,
};
pub use phone::{
    find_mobile_operator, get_landline_province, get_mobile_operator, is_email_valid,
    is_landline_number_valid, is_mobile_number_valid, normalize_phone_number, EmailChecker,
    LandlineNumberChecker, MobileNumberChecker, OperatorRecord, OPERATORS,
};
pub use text::{
    add_half_space, arabic_to_persian, english_digits_to_persian, half_space_to_space,
    is_otp_valid, is_password_valid, number_to_price, number_to_words, only_persian_letters,
    remove_half_space, separate, to_english_digits, to_persian, validate_word_count, word_count,
    GroupingOptions, PasswordPolicy, HALF_SPACE, MAX_NUMBER_TO_WORDS,
};
pub use validator::{Validator, ValidatorKind};
