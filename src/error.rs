use thiserror::Error;

/// Programmer errors: the arguments of a call are outside of what the operation supports.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("Group size must be non-zero")]
    GroupSizeZero,

    #[error("Password minimum length must be at least 1")]
    MinimumLengthZero,

    #[error("OTP length must be at least 1")]
    OtpLengthZero,

    #[error("The card number is not valid")]
    InvalidCardNumber,

    #[error("{value} is out of range (max {max})")]
    NumberOutOfRange { value: u64, max: u64 },
}

#[cfg(test)]
mod test {
    use super::ArgumentError;

    #[test]
    fn display_messages_are_human_readable() {
        assert_eq!(
            ArgumentError::GroupSizeZero.to_string(),
            "Group size must be non-zero"
        );
        assert_eq!(
            ArgumentError::NumberOutOfRange {
                value: 1_000_000_000_000,
                max: 999_999_999_999
            }
            .to_string(),
            "1000000000000 is out of range (max 999999999999)"
        );
    }
}
