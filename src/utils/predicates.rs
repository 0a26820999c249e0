//! Pure rules classifying a single field value.
//!
//! Apart from the blank check, none of these functions trim their input: the
//! field validators hand them values that are already trimmed.

use once_cell::sync::Lazy;
use regex::Regex;

use super::constants::{MIN_PASSWORD_LENGTH, PASSWORD_SYMBOLS, PHONE_DIGITS};

// Dot separated unquoted tokens or a quoted string, then either a bracketed
// dotted quad or a hostname ending in an alphabetic label of two or more letters
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("Failed to compile email regex")
});

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^[0-9]{{{PHONE_DIGITS}}}$")).expect("Failed to compile phone regex")
});

/// Strips surrounding whitespace, byte order marks included.
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Returns true when the value is blank, i.e. empty once trimmed.
pub fn is_required(value: &str) -> bool {
    trim_input(value).is_empty()
}

/// Inclusive range check on a length
pub fn is_between(length: usize, min: usize, max: usize) -> bool {
    length >= min && length <= max
}

pub fn is_email_valid(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Checks that the password mixes every character class we require.
///
/// All of lowercase, uppercase, digit and one of `!@#$%^&*` must be present,
/// and the password must be at least [`MIN_PASSWORD_LENGTH`] characters long.
pub fn is_password_secure(password: &str) -> bool {
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_number = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| PASSWORD_SYMBOLS.contains(&c));
    let long_enough = password.chars().count() >= MIN_PASSWORD_LENGTH;

    has_lowercase && has_uppercase && has_number && has_special && long_enough
}

/// Exactly ten ASCII digits, no country code and no separators.
pub fn is_phone_valid(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod required_tests {
        use super::*;

        #[test]
        fn test_blank_values() {
            let blank_cases = vec!["", " ", "   ", "\t", "\n  \r\n", "\u{a0}", "\u{feff}", " \u{feff}\t"];

            for value in blank_cases {
                assert!(is_required(value), "Blank value {:?} was not flagged !", value);
            }
        }

        #[test]
        fn test_filled_values() {
            let filled_cases = vec!["a", " a ", "0", "\tvalue\n"];

            for value in filled_cases {
                assert!(!is_required(value), "Filled value {:?} was flagged blank !", value);
            }
        }

        #[test]
        fn test_matches_trimmed_emptiness() {
            for value in ["", " x", "  ", "abc", "\n", "\u{feff}x"] {
                assert_eq!(is_required(value), trim_input(value).is_empty());
            }
        }
    }

    mod between_tests {
        use super::*;

        #[test]
        fn test_bounds_are_inclusive() {
            assert!(is_between(3, 3, 25));
            assert!(is_between(25, 3, 25));
            assert!(is_between(10, 3, 25));
            assert!(!is_between(2, 3, 25));
            assert!(!is_between(26, 3, 25));
        }

        #[test]
        fn test_matches_range_definition() {
            for len in 0..8 {
                for min in 0..5 {
                    for max in 0..5 {
                        assert_eq!(is_between(len, min, max), min <= len && len <= max);
                    }
                }
            }
        }

        #[test]
        fn test_empty_range() {
            assert!(!is_between(4, 5, 3));
        }
    }

    mod email_tests {
        use super::*;

        #[test]
        fn test_valid_emails() {
            let valid_cases = vec![
                "a@b.co",
                "user@example.com",
                "first.last@sub.example.org",
                "user+tag@example-domain.io",
                "\"john doe\"@example.com",
                "admin@[192.168.0.1]",
            ];

            for email in valid_cases {
                assert!(is_email_valid(email), "Valid email {} was rejected !", email);
            }
        }

        #[test]
        fn test_invalid_emails() {
            let invalid_cases = vec![
                "a@b",
                "not-an-email",
                "@example.com",
                "user@",
                "user@example.c",
                "user@example.123",
                "first..last@example.com",
                ".user@example.com",
                "user name@example.com",
                "user@exa_mple.com",
                "user@[1234.0.0.1]",
                "user@@example.com",
            ];

            for email in invalid_cases {
                assert!(!is_email_valid(email), "Invalid email {} was accepted !", email);
            }
        }
    }

    mod password_tests {
        use super::*;

        #[test]
        fn test_secure_passwords() {
            let valid_cases = vec!["Abcdef1!", "Secret1!", "StrongP@ssw0rd", "x*Y9zzzzzz"];

            for password in valid_cases {
                assert!(is_password_secure(password), "Secure password {} was rejected !", password);
            }
        }

        #[test]
        fn test_weak_passwords() {
            let test_cases = vec![
                ("abcdef12", "no uppercase, no symbol"),
                ("Abc1!", "too short"),
                ("Abcdefg!", "no digit"),
                ("ABCDEF1!", "no lowercase"),
                ("abcdef1!", "no uppercase"),
                ("Abcdef12", "no symbol"),
                ("Abcdef1?", "symbol outside the accepted set"),
                ("", "empty"),
            ];

            for (password, reason) in test_cases {
                assert!(!is_password_secure(password), "Weak password {} was accepted ({})", password, reason);
            }
        }

        #[test]
        fn test_line_breaks_count_toward_length() {
            assert!(is_password_secure("Ab1!\nxyzw"), "Classes and length are checked over the whole value");
        }

        #[test]
        fn test_length_boundary() {
            assert!(!is_password_secure("Abcde1!"), "7 characters were accepted");
            assert!(is_password_secure("Abcdef1!"), "8 characters were rejected");
        }
    }

    mod phone_tests {
        use super::*;

        #[test]
        fn test_valid_phone() {
            assert!(is_phone_valid("1234567890"));
            assert!(is_phone_valid("0000000000"));
        }

        #[test]
        fn test_invalid_phone() {
            let invalid_cases = vec![
                "12345",
                "123-456-7890",
                "123 456 7890",
                "+11234567890",
                "12345678901",
                "123456789a",
                "",
                "١٢٣٤٥٦٧٨٩٠", // non-ASCII digits
            ];

            for phone in invalid_cases {
                assert!(!is_phone_valid(phone), "Invalid phone number {} was accepted !", phone);
            }
        }
    }
}
