//! Password composition rule checker
//!
//! This library checks a password against a fixed catalog of composition
//! rules (letters, case mix, digits, special symbols, length) and derives a
//! coarse weak/strong label from how many rules are satisfied.
//!
//! # Features
//!
//! - `async` (default): Enables debounced re-evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Enables serialization of rule ids, rule sets and check results
//!
//! # Environment Variables
//!
//! - `PWD_STRONG_THRESHOLD`: Satisfied rules needed for "strong" (default: 5)
//! - `PWD_DEBOUNCE_MS`: Delay before an async re-evaluation runs (default: 300)
//!
//! # Example
//!
//! ```rust
//! use pwd_rules::{check_password, classify, evaluate, label_of, RuleId, StrengthOption};
//! use secrecy::SecretString;
//!
//! let satisfied = evaluate("Ab");
//! assert!(satisfied.contains(RuleId::UpperAndLower));
//! assert_eq!(classify(satisfied.len()), StrengthOption::Weak);
//! assert_eq!(label_of(StrengthOption::Weak), "Password is weak");
//!
//! let password = SecretString::new("#UpperLowerNumb3rLongEnough!".to_string().into());
//! let check = check_password(&password);
//! assert_eq!(check.summary(), "Password is strong enough");
//! ```

mod check;
mod evaluator;
mod policy;
mod rules;
mod strength;

// Public API
pub use check::PasswordCheck;
pub use evaluator::check_password;
pub use policy::{DEBOUNCE_ENV, DEFAULT_DEBOUNCE, Policy, PolicyError, THRESHOLD_ENV};
pub use rules::{
    Iter, LONG_THRESHOLD, MEDIUM_THRESHOLD, RULE_COUNT, RuleId, RuleSet, SHORT_THRESHOLD,
    evaluate, has_digit, has_letter, has_special, has_upper_and_lower, longer_than,
};
pub use strength::{
    ParseStrengthError, STRONG_THRESHOLD, StrengthOption, classify, classify_with_threshold,
    label_of,
};

#[cfg(feature = "async")]
pub use evaluator::check_password_tx;
