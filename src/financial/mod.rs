//! Card number (Luhn) and IBAN (ISO 7064 MOD 97-10) checks, plus the BIN registry.

mod banks;
mod card_number;
mod iban;

pub use banks::{find_bank, get_bank_name, BankRecord, BANKS};
pub use card_number::{format_card_number, is_card_number_valid, CardNumberChecksum};
pub use iban::{is_iban_valid, IbanChecker};
