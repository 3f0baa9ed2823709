use crate::error::ArgumentError;

pub const MAX_NUMBER_TO_WORDS: u64 = 999_999_999_999;

const ZERO: &str = "صفر";
const CONJUNCTION: &str = " و ";

const ONES: [&str; 10] = ["", "یک", "دو", "سه", "چهار", "پنج", "شش", "هفت", "هشت", "نه"];
const TEENS: [&str; 10] = [
    "ده", "یازده", "دوازده", "سیزده", "چهارده", "پانزده", "شانزده", "هفده", "هجده", "نوزده",
];
const TENS: [&str; 10] = [
    "", "", "بیست", "سی", "چهل", "پنجاه", "شصت", "هفتاد", "هشتاد", "نود",
];
const HUNDREDS: [&str; 10] = [
    "", "صد", "دویست", "سیصد", "چهارصد", "پانصد", "ششصد", "هفتصد", "هشتصد", "نهصد",
];
const SCALES: [&str; 4] = ["", "هزار", "میلیون", "میلیارد"];

/// Words for 1..=999. Zero renders as an empty string.
fn chunk_to_words(chunk: u64) -> String {
    let hundreds = (chunk / 100) as usize;
    let rest = (chunk % 100) as usize;

    let mut parts = Vec::with_capacity(3);
    if hundreds > 0 {
        parts.push(HUNDREDS[hundreds]);
    }
    if (10..20).contains(&rest) {
        parts.push(TEENS[rest - 10]);
    } else {
        if rest >= 20 {
            parts.push(TENS[rest / 10]);
        }
        if rest % 10 > 0 {
            parts.push(ONES[rest % 10]);
        }
    }
    parts.join(CONJUNCTION)
}

/// Persian words for `0..=999_999_999_999`, e.g. `1200` is `"یک هزار و دویست"`.
pub fn number_to_words(number: u64) -> Result<String, ArgumentError> {
    if number > MAX_NUMBER_TO_WORDS {
        return Err(ArgumentError::NumberOutOfRange {
            value: number,
            max: MAX_NUMBER_TO_WORDS,
        });
    }
    if number == 0 {
        return Ok(ZERO.to_string());
    }

    // least significant chunk first
    let mut groups = Vec::with_capacity(SCALES.len());
    let mut remaining = number;
    for scale in SCALES {
        let chunk = remaining % 1000;
        remaining /= 1000;
        if chunk == 0 {
            continue;
        }
        let words = chunk_to_words(chunk);
        if scale.is_empty() {
            groups.push(words);
        } else {
            groups.push(format!("{words} {scale}"));
        }
    }
    groups.reverse();
    Ok(groups.join(CONJUNCTION))
}
