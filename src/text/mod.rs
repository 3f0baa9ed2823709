//! Digit-script conversion, number and price rendering, grouping, and text policies.

mod digits;
mod grouping;
mod half_space;
mod number_to_words;
mod policy;
mod price;
mod words;

pub use digits::{arabic_to_persian, english_digits_to_persian, to_english_digits, to_persian};
pub use grouping::{separate, GroupingOptions};
pub use half_space::{add_half_space, half_space_to_space, remove_half_space, HALF_SPACE};
pub use number_to_words::{number_to_words, MAX_NUMBER_TO_WORDS};
pub use policy::{is_otp_valid, is_password_valid, PasswordPolicy};
pub use price::number_to_price;
pub use words::{only_persian_letters, validate_word_count, word_count};
