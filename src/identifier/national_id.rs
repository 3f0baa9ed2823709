use crate::stats::record_national_id_generation_attempt;
use crate::validator::{ascii_digits, Validator};
use rand::Rng;

pub struct NationalIdChecksum;

const NATIONAL_ID_LENGTH: usize = 10;
const MODULO: u32 = 11;

/// Check digit for the first nine digits of a national ID.
fn check_digit(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .take(NATIONAL_ID_LENGTH - 1)
        .enumerate()
        .map(|(idx, digit)| digit * (NATIONAL_ID_LENGTH as u32 - idx as u32))
        .sum();
    let remainder = sum % MODULO;
    if remainder < 2 {
        remainder
    } else {
        MODULO - remainder
    }
}

impl Validator for NationalIdChecksum {
    fn is_valid_match(&self, input: &str) -> bool {
        let digits = match ascii_digits(input) {
            Some(digits) if digits.len() == NATIONAL_ID_LENGTH => digits,
            _ => return false,
        };
        // "0000000000" through "9999999999" pass the checksum but are never issued
        if digits.iter().all(|digit| *digit == digits[0]) {
            return false;
        }
        check_digit(&digits) == digits[NATIONAL_ID_LENGTH - 1]
    }
}

pub fn is_national_id_valid(code: &str) -> bool {
    NationalIdChecksum.is_valid_match(code)
}

/// Generate a random national ID that passes [`is_national_id_valid`].
pub fn generate_random_national_id() -> String {
    generate_random_national_id_with(&mut rand::thread_rng())
}

/// Same as [`generate_random_national_id`], drawing digits from `rng`.
pub fn generate_random_national_id_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    loop {
        record_national_id_generation_attempt();

        let mut digits: Vec<u32> = (0..NATIONAL_ID_LENGTH - 1)
            .map(|_| rng.gen_range(0..10))
            .collect();
        digits.push(check_digit(&digits));

        let candidate: String = digits
            .iter()
            .filter_map(|digit| char::from_digit(*digit, 10))
            .collect();
        if is_national_id_valid(&candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_valid_national_ids() {
        let valid_ids = vec![
            "0499370899",
            "0790419904",
            "0684159414",
            "0067749828",
            "0013542419",
            "0010532129",
        ];
        for id in valid_ids {
            println!("testing for input {id}");
            assert!(is_national_id_valid(id));
        }
    }

    #[test]
    fn test_invalid_national_ids() {
        let invalid_ids = vec![
            // wrong checksum
            "0684159415",
            "4140381366",
            // repeated digits
            "0000000000",
            "1111111111",
            "9999999999",
            // wrong length
            "068415941",
            "06841594144",
            "",
            // non digit characters
            "068415941a",
            " 0684159414",
            "۰۶۸۴۱۵۹۴۱۴",
        ];
        for id in invalid_ids {
            println!("testing for input {id}");
            assert!(!is_national_id_valid(id));
        }
    }

    #[test]
    fn check_digit_uses_remainder_below_two() {
        // sum = 1*10 = 10, remainder 10 -> 11 - 10 = 1
        assert_eq!(check_digit(&[1, 0, 0, 0, 0, 0, 0, 0, 0]), 1);
        // sum = 1*2 = 2 -> 9
        assert_eq!(check_digit(&[0, 0, 0, 0, 0, 0, 0, 0, 1]), 9);
        // sum = 11 -> remainder 0
        assert_eq!(check_digit(&[0, 0, 0, 0, 0, 0, 0, 3, 1]), 0);
    }

    #[test]
    fn generated_ids_are_valid() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let id = generate_random_national_id_with(&mut rng);
            assert_eq!(id.len(), NATIONAL_ID_LENGTH);
            assert!(is_national_id_valid(&id), "{id} should be valid");
        }
        let id = generate_random_national_id();
        assert!(is_national_id_valid(&id));
    }
}
