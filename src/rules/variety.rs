//! Character variety rules - letters, case mix, digits, special symbols.
//!
//! Letters and digits are classified as ASCII only. Anything else,
//! whitespace and non-ASCII characters included, counts as a special symbol.

/// At least one ASCII letter.
pub fn has_letter(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_alphabetic())
}

/// At least one uppercase and one lowercase ASCII letter.
pub fn has_upper_and_lower(password: &str) -> bool {
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    has_upper && has_lower
}

/// At least one ASCII digit.
pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// At least one character that is neither an ASCII letter nor an ASCII digit.
pub fn has_special(password: &str) -> bool {
    password.chars().any(|c| !c.is_ascii_alphanumeric())
}
