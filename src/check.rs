//! Result of a password check: satisfied rules plus the derived strength.

use crate::rules::{RuleId, RuleSet};
use crate::strength::StrengthOption;

/// What a caller renders after each change of the password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PasswordCheck {
    pub satisfied: RuleSet,
    pub strength: StrengthOption,
}

impl PasswordCheck {
    pub fn passed(&self, rule: RuleId) -> bool {
        self.satisfied.contains(rule)
    }

    /// Rules the password does not satisfy yet.
    pub fn failed(&self) -> RuleSet {
        self.satisfied.missing()
    }

    /// Pass/fail indicator for every rule, in catalog order.
    pub fn indicators(&self) -> impl Iterator<Item = (RuleId, bool)> + '_ {
        RuleId::ALL
            .into_iter()
            .map(move |rule| (rule, self.passed(rule)))
    }

    /// Validation summary text.
    pub fn summary(&self) -> &'static str {
        self.strength.label()
    }
}
