use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PERSIAN_LETTERS_PATTERN: Regex =
        Regex::new(r"^[\x{0600}-\x{06FF}\s]+$").expect("persian letters pattern is valid");
}

/// Whether `text` is made only of characters of the Arabic block (U+0600..U+06FF) and whitespace.
pub fn only_persian_letters(text: &str) -> bool {
    PERSIAN_LETTERS_PATTERN.is_match(text)
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Whether the word count of `text` is within `min..=max`.
pub fn validate_word_count(text: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&word_count(text))
}
