//! Constants used throughout the validation system

/// Minimum length for a username
pub const MIN_USERNAME_LENGTH: usize = 3;
/// Maximum length for a username
pub const MAX_USERNAME_LENGTH: usize = 25;
/// Minimum length for a secure password
pub const MIN_PASSWORD_LENGTH: usize = 8;
/// Exact number of digits in a phone number
pub const PHONE_DIGITS: usize = 10;
/// Symbols accepted as the special character of a secure password
pub const PASSWORD_SYMBOLS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];

/// Default log file for the terminal front-end
pub const DEFAULT_LOG_FILE: &str = "./signup.log";
/// Default configuration file for the terminal front-end
pub const DEFAULT_CONFIG_FILE: &str = "signup.json";
