//! Locale-bound plural classifier.
//!
//! A [`Pluralizer`] resolves its locale's rule once, at construction, and
//! applies it on every [`classify`](Pluralizer::classify) call.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Empty locale | `""` | Invariant rule (always `Other`) |
//! | Unknown locale | Code not in table | Invariant rule (always `Other`) |
//! | Unknown category name | Not one of the six names | `Other` |

use crate::category::PluralCategory;
use crate::rule::PluralRule;
use crate::table;

/// Anything that maps a quantity to a plural category.
pub trait PluralClassifier {
    /// Classify `value`. Never fails.
    fn classify(&self, value: f64) -> PluralCategory;
}

impl PluralClassifier for PluralRule {
    fn classify(&self, value: f64) -> PluralCategory {
        self.categorize(value)
    }
}

/// Plural classifier bound to one rule.
///
/// # Example
///
/// ```
/// use ftui_plural::{PluralCategory, Pluralizer};
///
/// let ru = Pluralizer::new("ru");
/// assert_eq!(ru.classify(21.0), PluralCategory::One);
/// assert_eq!(ru.classify(3.0), PluralCategory::Few);
/// assert_eq!(ru.classify(11.0), PluralCategory::Many);
///
/// let unknown = Pluralizer::new("xx-nonexistent");
/// assert_eq!(unknown.classify(1.0), PluralCategory::Other);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pluralizer {
    rule: PluralRule,
    fallback: bool,
}

impl Pluralizer {
    /// Locale used by [`Default`].
    pub const DEFAULT_LOCALE: &'static str = "en";

    /// Bind the rule for `locale`.
    ///
    /// Empty or unknown codes bind [`PluralRule::Invariant`], so every
    /// quantity classifies as `Other`.
    #[must_use]
    pub fn new(locale: &str) -> Self {
        let found = if locale.is_empty() {
            None
        } else {
            table::lookup(locale)
        };
        match found {
            Some(rule) => Self {
                rule,
                fallback: false,
            },
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(locale, "no plural rule for locale, using invariant rule");
                Self {
                    rule: PluralRule::Invariant,
                    fallback: true,
                }
            }
        }
    }

    /// Bind an explicit rule, bypassing the locale table.
    #[must_use]
    pub const fn with_rule(rule: PluralRule) -> Self {
        Self {
            rule,
            fallback: false,
        }
    }

    /// The bound rule.
    #[must_use]
    pub const fn rule(&self) -> PluralRule {
        self.rule
    }

    /// Whether construction fell back to the invariant rule.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Classify `value` with the bound rule.
    #[must_use]
    pub fn classify(&self, value: f64) -> PluralCategory {
        self.rule.categorize(value)
    }

    /// Category for a CLDR name, ignoring ASCII case. Unknown names yield `Other`.
    #[must_use]
    pub fn to_category(&self, name: &str) -> PluralCategory {
        PluralCategory::from_name(name)
    }

    /// Canonical lowercase name of `category`.
    #[must_use]
    pub fn to_name(&self, category: PluralCategory) -> &'static str {
        category.name()
    }
}

impl Default for Pluralizer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LOCALE)
    }
}

impl PluralClassifier for Pluralizer {
    fn classify(&self, value: f64) -> PluralCategory {
        Pluralizer::classify(self, value)
    }
}
