//! Strength classification from the number of satisfied rules.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Minimum number of satisfied rules for [`StrengthOption::Strong`].
pub const STRONG_THRESHOLD: usize = 5;

/// Coarse strength category. Ordered `Weak < Strong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StrengthOption {
    Weak,
    Strong,
}

impl StrengthOption {
    /// Text shown in the validation summary.
    pub const fn label(self) -> &'static str {
        match self {
            StrengthOption::Weak => "Password is weak",
            StrengthOption::Strong => "Password is strong enough",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            StrengthOption::Weak => "weak",
            StrengthOption::Strong => "strong",
        }
    }
}

impl fmt::Display for StrengthOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown strength option: {0:?}")]
pub struct ParseStrengthError(String);

impl FromStr for StrengthOption {
    type Err = ParseStrengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weak" => Ok(StrengthOption::Weak),
            "strong" => Ok(StrengthOption::Strong),
            other => Err(ParseStrengthError(other.to_string())),
        }
    }
}

/// Classifies a satisfied-rule count against [`STRONG_THRESHOLD`].
pub fn classify(satisfied_count: usize) -> StrengthOption {
    classify_with_threshold(satisfied_count, STRONG_THRESHOLD)
}

pub fn classify_with_threshold(satisfied_count: usize, threshold: usize) -> StrengthOption {
    if satisfied_count >= threshold {
        StrengthOption::Strong
    } else {
        StrengthOption::Weak
    }
}

/// Display label of a strength option.
pub fn label_of(option: StrengthOption) -> &'static str {
    option.label()
}
