//! Policy configuration
//!
//! Holds the strong threshold and the re-evaluation debounce, loaded from
//! the environment or built directly.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::check::PasswordCheck;
use crate::rules::{RULE_COUNT, evaluate};
use crate::strength::{STRONG_THRESHOLD, StrengthOption, classify_with_threshold};

/// Environment variable overriding the strong threshold.
pub const THRESHOLD_ENV: &str = "PWD_STRONG_THRESHOLD";

/// Environment variable overriding the debounce, in milliseconds.
pub const DEBOUNCE_ENV: &str = "PWD_DEBOUNCE_MS";

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
    #[error("Strong threshold must be between 1 and {max}, got {0}", max = RULE_COUNT)]
    ThresholdOutOfRange(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    strong_threshold: usize,
    debounce: Duration,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            strong_threshold: STRONG_THRESHOLD,
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

impl Policy {
    /// Creates a policy with a custom strong threshold.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::ThresholdOutOfRange`] if the threshold is zero
    /// (every password would be strong) or larger than the catalog (none would).
    pub fn new(strong_threshold: usize) -> Result<Self, PolicyError> {
        if !(1..=RULE_COUNT).contains(&strong_threshold) {
            return Err(PolicyError::ThresholdOutOfRange(strong_threshold));
        }
        Ok(Self {
            strong_threshold,
            ..Self::default()
        })
    }

    /// Loads the policy from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_STRONG_THRESHOLD`: minimum satisfied rules for "strong" (default 5)
    /// - `PWD_DEBOUNCE_MS`: delay before an async re-evaluation runs (default 300)
    ///
    /// Unset variables keep their default.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// unsafe { std::env::set_var("PWD_STRONG_THRESHOLD", "6"); }
    /// let policy = pwd_rules::Policy::from_env()?;
    /// assert_eq!(policy.strong_threshold(), 6);
    /// ```
    pub fn from_env() -> Result<Self, PolicyError> {
        let mut policy = match read_env(THRESHOLD_ENV)? {
            Some(threshold) => Self::new(threshold)?,
            None => Self::default(),
        };

        if let Some(millis) = read_env(DEBOUNCE_ENV)? {
            policy.debounce = Duration::from_millis(millis);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            strong_threshold = policy.strong_threshold,
            debounce_ms = policy.debounce.as_millis() as u64,
            "Password policy loaded"
        );

        Ok(policy)
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn strong_threshold(&self) -> usize {
        self.strong_threshold
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn classify(&self, satisfied_count: usize) -> StrengthOption {
        classify_with_threshold(satisfied_count, self.strong_threshold)
    }

    /// Evaluates the password and classifies the result under this policy.
    pub fn check(&self, password: &SecretString) -> PasswordCheck {
        let satisfied = evaluate(password.expose_secret());
        let strength = self.classify(satisfied.len());

        #[cfg(feature = "tracing")]
        tracing::debug!(satisfied = satisfied.len(), %strength, "Password checked");

        PasswordCheck {
            satisfied,
            strength,
        }
    }
}

fn read_env<T: std::str::FromStr>(var: &'static str) -> Result<Option<T>, PolicyError> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| PolicyError::InvalidValue { var, value }),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(raw)) => Err(PolicyError::InvalidValue {
            var,
            value: raw.to_string_lossy().into_owned(),
        }),
    }
}
