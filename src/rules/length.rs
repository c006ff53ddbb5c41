//! Length rules - nested "longer than" thresholds.

pub const SHORT_THRESHOLD: usize = 4;
pub const MEDIUM_THRESHOLD: usize = 8;
pub const LONG_THRESHOLD: usize = 12;

/// Returns `true` if the password has strictly more than `threshold` characters.
///
/// Length is counted in chars, so a multi-byte character counts once.
pub fn longer_than(password: &str, threshold: usize) -> bool {
    password.chars().count() > threshold
}

pub fn longer_than_4(password: &str) -> bool {
    longer_than(password, SHORT_THRESHOLD)
}

pub fn longer_than_8(password: &str) -> bool {
    longer_than(password, MEDIUM_THRESHOLD)
}

pub fn longer_than_12(password: &str) -> bool {
    longer_than(password, LONG_THRESHOLD)
}
