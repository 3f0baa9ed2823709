use crate::validator::{ascii_digits, Validator};

pub struct LegalEntityIdChecksum;

const LEGAL_ENTITY_ID_MIN_LENGTH: usize = 11;
const WEIGHTS: &[u32] = &[29, 27, 23, 19, 17];
const MODULO: u32 = 11;

impl Validator for LegalEntityIdChecksum {
    fn is_valid_match(&self, input: &str) -> bool {
        let digits = match ascii_digits(input) {
            Some(digits) if digits.len() >= LEGAL_ENTITY_ID_MIN_LENGTH => digits,
            _ => return false,
        };
        if digits.iter().all(|digit| *digit == 0) {
            return false;
        }
        if digits[4..10].iter().all(|digit| *digit == 0) {
            return false;
        }

        let check = digits[10];
        let decimal = digits[9] + 2;
        let mut sum: u32 = digits[..10]
            .iter()
            .enumerate()
            .map(|(idx, digit)| (decimal + digit) * WEIGHTS[idx % WEIGHTS.len()])
            .sum();
        sum %= MODULO;
        if sum == 10 {
            sum = 0;
        }
        check == sum
    }
}

pub fn is_legal_entity_id_valid(id: &str) -> bool {
    LegalEntityIdChecksum.is_valid_match(id)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_valid_legal_entity_ids() {
        let valid_ids = vec!["10380284790", "14007650912"];
        for id in valid_ids {
            println!("testing for input {id}");
            assert!(is_legal_entity_id_valid(id));
        }
    }

    #[test]
    fn test_invalid_legal_entity_ids() {
        let invalid_ids = vec![
            // wrong checksum
            "10380284792",
            "10101655670",
            // all zero
            "00000000000",
            // zero serial span
            "10100000000",
            // wrong length
            "1038028479",
            "",
            // non digit characters
            "1038028479a",
            "۱۰۳۸۰۲۸۴۷۹۰",
        ];
        for id in invalid_ids {
            println!("testing for input {id}");
            assert!(!is_legal_entity_id_valid(id));
        }
    }

    #[test]
    fn extra_trailing_digits_are_ignored() {
        assert!(is_legal_entity_id_valid("103802847901"));
    }
}
