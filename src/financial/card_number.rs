use crate::error::ArgumentError;
use crate::text::{separate, GroupingOptions};
use crate::validator::{ascii_digits, Validator};

pub struct CardNumberChecksum;

const CARD_NUMBER_LENGTH: usize = 16;

/// Card numbers may be written with whitespace between the groups.
pub(crate) fn normalize_card_number(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

impl Validator for CardNumberChecksum {
    fn is_valid_match(&self, input: &str) -> bool {
        let digits = match ascii_digits(&normalize_card_number(input)) {
            Some(digits) if digits.len() == CARD_NUMBER_LENGTH => digits,
            _ => return false,
        };

        let sum: u32 = digits
            .iter()
            .enumerate()
            .map(|(idx, digit)| {
                // positions are counted from 1, so even indices are odd positions
                if idx % 2 == 1 {
                    *digit
                } else if *digit > 4 {
                    digit * 2 - 9
                } else {
                    digit * 2
                }
            })
            .sum();
        sum % 10 == 0
    }
}

pub fn is_card_number_valid(number: &str) -> bool {
    CardNumberChecksum.is_valid_match(number)
}

/// Split a valid card number into groups, `"6037 9912 3456 7893"` with [`GroupingOptions::card`].
pub fn format_card_number(number: &str, options: GroupingOptions) -> Result<String, ArgumentError> {
    if options.group_size == 0 {
        return Err(ArgumentError::GroupSizeZero);
    }
    if !is_card_number_valid(number) {
        return Err(ArgumentError::InvalidCardNumber);
    }
    separate(&normalize_card_number(number), options)
}
