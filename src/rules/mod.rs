//! Password composition rules
//!
//! The catalog is a closed enumeration. Each rule maps to an independent
//! predicate; a password may satisfy any subset of them.

mod length;
mod variety;

use std::fmt;

pub use length::{LONG_THRESHOLD, MEDIUM_THRESHOLD, SHORT_THRESHOLD, longer_than};
pub use variety::{has_digit, has_letter, has_special, has_upper_and_lower};

/// Number of rules in the catalog.
pub const RULE_COUNT: usize = RuleId::ALL.len();

/// Identifier of a single composition rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleId {
    OneLetter,
    UpperAndLower,
    OneNumber,
    SpecialSymbol,
    LongerThan4,
    LongerThan8,
    LongerThan12,
}

impl RuleId {
    /// Every rule, in display order.
    pub const ALL: [RuleId; 7] = [
        RuleId::OneLetter,
        RuleId::UpperAndLower,
        RuleId::OneNumber,
        RuleId::SpecialSymbol,
        RuleId::LongerThan4,
        RuleId::LongerThan8,
        RuleId::LongerThan12,
    ];

    /// The predicate backing this rule.
    pub fn predicate(self) -> fn(&str) -> bool {
        match self {
            RuleId::OneLetter => variety::has_letter,
            RuleId::UpperAndLower => variety::has_upper_and_lower,
            RuleId::OneNumber => variety::has_digit,
            RuleId::SpecialSymbol => variety::has_special,
            RuleId::LongerThan4 => length::longer_than_4,
            RuleId::LongerThan8 => length::longer_than_8,
            RuleId::LongerThan12 => length::longer_than_12,
        }
    }

    pub fn is_satisfied_by(self, password: &str) -> bool {
        (self.predicate())(password)
    }

    /// Hint shown next to the rule's pass/fail indicator.
    pub fn description(self) -> &'static str {
        match self {
            RuleId::OneLetter => "At least one letter",
            RuleId::UpperAndLower => "Uppercase and lowercase letters",
            RuleId::OneNumber => "At least one number",
            RuleId::SpecialSymbol => "At least one special symbol",
            RuleId::LongerThan4 => "Longer than 4 characters",
            RuleId::LongerThan8 => "Longer than 8 characters",
            RuleId::LongerThan12 => "Longer than 12 characters",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Set of rule identifiers.
///
/// Iteration always follows catalog order, whatever the insertion order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RuleSet(u8);

impl RuleSet {
    pub const fn empty() -> Self {
        RuleSet(0)
    }

    pub fn all() -> Self {
        RuleId::ALL.into_iter().collect()
    }

    /// Adds a rule. Returns `true` if it was not already present.
    pub fn insert(&mut self, rule: RuleId) -> bool {
        let absent = !self.contains(rule);
        self.0 |= rule.bit();
        absent
    }

    pub fn contains(&self, rule: RuleId) -> bool {
        self.0 & rule.bit() != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Catalog rules not in this set.
    pub fn missing(&self) -> RuleSet {
        RuleSet(Self::all().0 & !self.0)
    }

    pub fn iter(&self) -> Iter {
        Iter {
            set: *self,
            next: 0,
        }
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<RuleId> for RuleSet {
    fn from_iter<I: IntoIterator<Item = RuleId>>(iter: I) -> Self {
        let mut set = RuleSet::empty();
        set.extend(iter);
        set
    }
}

impl Extend<RuleId> for RuleSet {
    fn extend<I: IntoIterator<Item = RuleId>>(&mut self, iter: I) {
        for rule in iter {
            self.insert(rule);
        }
    }
}

impl IntoIterator for RuleSet {
    type Item = RuleId;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl IntoIterator for &RuleSet {
    type Item = RuleId;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the rules of a [`RuleSet`].
#[derive(Debug, Clone)]
pub struct Iter {
    set: RuleSet,
    next: usize,
}

impl Iterator for Iter {
    type Item = RuleId;

    fn next(&mut self) -> Option<RuleId> {
        while let Some(&rule) = RuleId::ALL.get(self.next) {
            self.next += 1;
            if self.set.contains(rule) {
                return Some(rule);
            }
        }
        None
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RuleSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RuleSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rules = Vec::<RuleId>::deserialize(deserializer)?;
        Ok(rules.into_iter().collect())
    }
}

/// Returns the rules satisfied by `password`.
///
/// Every predicate is evaluated; no input makes this fail. The empty
/// string satisfies nothing.
pub fn evaluate(password: &str) -> RuleSet {
    RuleId::ALL
        .into_iter()
        .filter(|rule| rule.is_satisfied_by(password))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::RuleId::*;

    fn set(rules: &[RuleId]) -> RuleSet {
        rules.iter().copied().collect()
    }

    #[test]
    fn test_evaluate_empty_password() {
        assert!(evaluate("").is_empty());
    }

    #[test]
    fn test_evaluate_reference_passwords() {
        let examples: Vec<(&str, Vec<RuleId>)> = vec![
            ("A", vec![OneLetter]),
            ("Ab", vec![OneLetter, UpperAndLower]),
            ("3a33", vec![OneLetter, OneNumber]),
            ("aaaa", vec![OneLetter]),
            ("aaaae", vec![OneLetter, LongerThan4]),
            ("ab123", vec![OneLetter, OneNumber, LongerThan4]),
            ("###!!~~)", vec![SpecialSymbol, LongerThan4]),
            (
                "Gsasfgasa",
                vec![OneLetter, LongerThan4, LongerThan8, UpperAndLower],
            ),
            (
                "1234567890asd",
                vec![OneLetter, LongerThan4, OneNumber, LongerThan8, LongerThan12],
            ),
        ];

        for (password, expected) in examples {
            assert_eq!(evaluate(password), set(&expected), "password {password:?}");
        }
    }

    #[test]
    fn test_evaluate_special_symbols() {
        for symbol in "$%^& _-+*()@!".chars() {
            let password = format!("a{symbol}p");
            assert_eq!(
                evaluate(&password),
                set(&[SpecialSymbol, OneLetter]),
                "password {password:?}"
            );
        }
    }

    #[test]
    fn test_evaluate_all_rules_satisfied() {
        assert_eq!(evaluate("#UpperLowerNumb3rLongEnough!"), RuleSet::all());
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        for password in ["", "a p", "Gsasfgasa", "EMn1fyStr0ngPa$$word", "日本語"] {
            assert_eq!(evaluate(password), evaluate(password));
        }
    }

    #[test]
    fn test_length_rules_are_nested() {
        let mut password = String::new();
        for _ in 0..20 {
            let rules = evaluate(&password);
            if rules.contains(LongerThan12) {
                assert!(rules.contains(LongerThan8));
            }
            if rules.contains(LongerThan8) {
                assert!(rules.contains(LongerThan4));
            }
            password.push('x');
        }
    }

    #[test]
    fn test_evaluate_non_ascii_only() {
        // Non-ASCII letters are special symbols, not letters.
        assert_eq!(evaluate("ñ"), set(&[SpecialSymbol]));
    }

    #[test]
    fn test_rule_set_insert_and_contains() {
        let mut rules = RuleSet::empty();
        assert!(rules.insert(OneNumber));
        assert!(!rules.insert(OneNumber));
        assert!(rules.contains(OneNumber));
        assert!(!rules.contains(OneLetter));
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn test_rule_set_iterates_in_catalog_order() {
        let rules = set(&[LongerThan12, OneLetter, SpecialSymbol]);
        let ordered: Vec<_> = rules.iter().collect();
        assert_eq!(ordered, vec![OneLetter, SpecialSymbol, LongerThan12]);
    }

    #[test]
    fn test_rule_set_missing() {
        let rules = set(&[OneLetter, UpperAndLower]);
        let missing = rules.missing();
        assert_eq!(missing.len(), RULE_COUNT - 2);
        assert!(!missing.contains(OneLetter));
        assert!(missing.contains(LongerThan12));
        assert!(RuleSet::all().missing().is_empty());
    }

    #[test]
    fn test_rule_set_debug() {
        let rules = set(&[OneNumber, OneLetter]);
        assert_eq!(format!("{rules:?}"), "{OneLetter, OneNumber}");
    }
}
