use crate::error::ArgumentError;
use serde::{Deserialize, Serialize};

const SPECIAL_CHARACTERS: &str = "@$_!%*?&";

/// Whether `text` is a one-time password of exactly `length` ASCII digits.
pub fn is_otp_valid(text: &str, length: usize) -> Result<bool, ArgumentError> {
    if length < 1 {
        return Err(ArgumentError::OtpLengthZero);
    }
    if text.is_empty() || text.chars().count() != length {
        return Ok(false);
    }
    Ok(text.chars().all(|c| c.is_ascii_digit()))
}

/// Requirements checked by [`is_password_valid`]. A disabled requirement is not
/// checked, it never forbids anything.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct PasswordPolicy {
    pub uppercase_required: bool,
    pub lowercase_required: bool,
    pub digits_required: bool,
    /// Requires one of `@$_!%*?&`, and restricts the password to letters, digits and those characters.
    pub special_char_required: bool,
    pub minimum_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            uppercase_required: true,
            lowercase_required: true,
            digits_required: true,
            special_char_required: true,
            minimum_length: 8,
        }
    }
}

impl PasswordPolicy {
    /// A policy with every character class disabled.
    pub fn length_only(minimum_length: usize) -> Self {
        Self {
            uppercase_required: false,
            lowercase_required: false,
            digits_required: false,
            special_char_required: false,
            minimum_length,
        }
    }

    pub fn uppercase_required(&self, required: bool) -> Self {
        self.mutate_clone(|x| x.uppercase_required = required)
    }

    pub fn lowercase_required(&self, required: bool) -> Self {
        self.mutate_clone(|x| x.lowercase_required = required)
    }

    pub fn digits_required(&self, required: bool) -> Self {
        self.mutate_clone(|x| x.digits_required = required)
    }

    pub fn special_char_required(&self, required: bool) -> Self {
        self.mutate_clone(|x| x.special_char_required = required)
    }

    pub fn minimum_length(&self, minimum_length: usize) -> Self {
        self.mutate_clone(|x| x.minimum_length = minimum_length)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

fn is_special_character(c: &char) -> bool {
    SPECIAL_CHARACTERS.contains(*c)
}

fn is_allowed_character(c: char) -> bool {
    c.is_ascii_alphanumeric() || is_special_character(&c)
}

pub fn is_password_valid(password: &str, policy: PasswordPolicy) -> Result<bool, ArgumentError> {
    if policy.minimum_length < 1 {
        return Err(ArgumentError::MinimumLengthZero);
    }

    let checks: [(bool, fn(&char) -> bool); 4] = [
        (policy.uppercase_required, char::is_ascii_uppercase),
        (policy.lowercase_required, char::is_ascii_lowercase),
        (policy.digits_required, char::is_ascii_digit),
        (policy.special_char_required, is_special_character),
    ];
    for (required, predicate) in checks {
        if required && !password.chars().any(|c| predicate(&c)) {
            return Ok(false);
        }
    }
    if policy.special_char_required && !password.chars().all(is_allowed_character) {
        return Ok(false);
    }
    Ok(password.chars().count() >= policy.minimum_length)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_otp() {
        assert_eq!(is_otp_valid("123456", 6), Ok(true));
        assert_eq!(is_otp_valid("0000", 4), Ok(true));
        assert_eq!(is_otp_valid("12345", 6), Ok(false));
        assert_eq!(is_otp_valid("1234567", 6), Ok(false));
        assert_eq!(is_otp_valid("12a456", 6), Ok(false));
        assert_eq!(is_otp_valid("۱۲۳۴۵۶", 6), Ok(false));
        assert_eq!(is_otp_valid("", 1), Ok(false));
        assert_eq!(is_otp_valid("123456", 0), Err(ArgumentError::OtpLengthZero));
    }

    #[test]
    fn test_default_policy() {
        let valid_passwords = vec!["Abcdef1!", "P@ssw0rd", "xY9_xxxxxx"];
        for password in valid_passwords {
            println!("testing for input {password}");
            assert_eq!(is_password_valid(password, PasswordPolicy::default()), Ok(true));
        }

        let invalid_passwords = vec![
            // missing special character
            "Abcdefg1",
            // missing uppercase
            "abcdef1!",
            // missing lowercase
            "ABCDEF1!",
            // missing digit
            "Abcdefg!",
            // too short
            "Ab1!",
            // character outside the allowed set
            "Abcdef1!#",
            "Abcdef1! ",
            "",
        ];
        for password in invalid_passwords {
            println!("testing for input {password}");
            assert_eq!(is_password_valid(password, PasswordPolicy::default()), Ok(false));
        }
    }

    #[test]
    fn disabled_requirements_are_not_checked() {
        let policy = PasswordPolicy::length_only(1);
        for password in ["a", "Z", "7", "#", " ", "ش"] {
            assert_eq!(is_password_valid(password, policy.clone()), Ok(true));
        }
        assert_eq!(is_password_valid("", policy), Ok(false));

        let policy = PasswordPolicy::default().special_char_required(false);
        assert_eq!(is_password_valid("Abcdefg1", policy.clone()), Ok(true));
        assert_eq!(is_password_valid("Abcdefg1!", policy), Ok(true));

        let policy = PasswordPolicy::default().minimum_length(4);
        assert_eq!(is_password_valid("Ab1!", policy), Ok(true));
    }

    #[test]
    fn zero_minimum_length_is_rejected() {
        assert_eq!(
            is_password_valid("Abcdef1!", PasswordPolicy::default().minimum_length(0)),
            Err(ArgumentError::MinimumLengthZero)
        );
    }

    #[test]
    fn policy_should_have_default() {
        let policy: PasswordPolicy = serde_json::from_str("{}").unwrap();
        assert_eq!(policy, PasswordPolicy::default());

        let policy: PasswordPolicy =
            serde_json::from_str(r#"{"special_char_required": false, "minimum_length": 12}"#)
                .unwrap();
        assert_eq!(
            policy,
            PasswordPolicy::default()
                .special_char_required(false)
                .minimum_length(12)
        );
    }
}
