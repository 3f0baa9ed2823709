const PERSIAN_ZERO: u32 = 0x06F0;
const ARABIC_INDIC_ZERO: u32 = 0x0660;

const ARABIC_YEH: char = '\u{064A}';
const ALEF_MAKSURA: char = '\u{0649}';
const ARABIC_KAF: char = '\u{0643}';
const PERSIAN_YEH: char = '\u{06CC}';
const PERSIAN_KAF: char = '\u{06A9}';

fn digit_in_script(zero: u32, c: char) -> Option<u32> {
    let code = c as u32;
    (zero..zero + 10).contains(&code).then(|| code - zero)
}

fn shift_digit(zero: u32, digit: u32) -> char {
    // zero + digit stays inside the ten code points of a digit block
    char::from_u32(zero + digit).unwrap_or_default()
}

/// ASCII digits to Persian digits (U+06F0..U+06F9).
pub fn english_digits_to_persian(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(digit) if c.is_ascii_digit() => shift_digit(PERSIAN_ZERO, digit),
            _ => c,
        })
        .collect()
}

/// Arabic letter forms (yeh, alef maksura, kaf) and Arabic-Indic digits to their Persian forms.
pub fn arabic_to_persian(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            ARABIC_YEH | ALEF_MAKSURA => PERSIAN_YEH,
            ARABIC_KAF => PERSIAN_KAF,
            _ => match digit_in_script(ARABIC_INDIC_ZERO, c) {
                Some(digit) => shift_digit(PERSIAN_ZERO, digit),
                None => c,
            },
        })
        .collect()
}

/// Digits first, then letters: the whole text in Persian forms.
pub fn to_persian(text: &str) -> String {
    arabic_to_persian(&english_digits_to_persian(text))
}

/// Persian and Arabic-Indic digits to ASCII digits.
pub fn to_english_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            match digit_in_script(PERSIAN_ZERO, c).or_else(|| digit_in_script(ARABIC_INDIC_ZERO, c))
            {
                Some(digit) => shift_digit('0' as u32, digit),
                None => c,
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_english_digits_to_persian() {
        assert_eq!(english_digits_to_persian("0123456789"), "۰۱۲۳۴۵۶۷۸۹");
        assert_eq!(english_digits_to_persian("سال 1402"), "سال ۱۴۰۲");
        // Arabic-Indic digits are left alone
        assert_eq!(english_digits_to_persian("١٢"), "١٢");
        assert_eq!(english_digits_to_persian(""), "");
    }

    #[test]
    fn test_arabic_to_persian() {
        assert_eq!(arabic_to_persian("علي"), "علی");
        assert_eq!(arabic_to_persian("كتاب"), "کتاب");
        assert_eq!(arabic_to_persian("موسى"), "موسی");
        assert_eq!(arabic_to_persian("٠١٢٣٤٥٦٧٨٩"), "۰۱۲۳۴۵۶۷۸۹");
        // ASCII passes through
        assert_eq!(arabic_to_persian("abc 123"), "abc 123");
    }

    #[test]
    fn test_to_persian() {
        assert_eq!(to_persian("كد 123 و ٤٥"), "کد ۱۲۳ و ۴۵");
    }

    #[test]
    fn test_to_english_digits() {
        assert_eq!(to_english_digits("۰۱۲۳۴۵۶۷۸۹"), "0123456789");
        assert_eq!(to_english_digits("٠١٢٣٤٥٦٧٨٩"), "0123456789");
        assert_eq!(to_english_digits("تلفن: ۰۹۱۲-٣٤٥"), "تلفن: 0912-345");
    }

    #[test]
    fn digits_survive_a_round_trip() {
        let inputs = vec!["0123456789", "order 42, room 7", "كد 2024"];
        for input in inputs {
            let round_trip = to_english_digits(&to_persian(input));
            let digits: String = round_trip.chars().filter(|c| c.is_ascii_digit()).collect();
            let expected: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
            assert_eq!(digits, expected);
        }
        assert_eq!(to_english_digits(&to_persian("order 42")), "order 42");
    }
}
