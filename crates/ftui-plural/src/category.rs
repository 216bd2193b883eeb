//! Plural categories and their canonical CLDR names.
//!
//! # Invariants
//!
//! 1. Exactly six categories exist; `Other` has discriminant `0` and is the
//!    `Default`.
//! 2. Name lookup is ASCII case-insensitive and total: unknown or empty
//!    names resolve to `Other`.
//! 3. `from_name(c.name()) == c` for every category.

use core::fmt;
use core::str::FromStr;

/// CLDR plural categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum PluralCategory {
    /// Catch-all form; valid for every rule.
    #[default]
    Other = 0,
    Zero = 1,
    One = 2,
    Two = 3,
    Few = 4,
    Many = 5,
}

impl PluralCategory {
    /// All categories in discriminant order.
    pub const ALL: [Self; 6] = [
        Self::Other,
        Self::Zero,
        Self::One,
        Self::Two,
        Self::Few,
        Self::Many,
    ];

    /// Canonical lowercase CLDR name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Other => "other",
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
        }
    }

    /// Resolve a category name, ignoring ASCII case.
    ///
    /// Unknown or empty names are not an error: they read as `Other`.
    /// Use [`str::parse`] when an unknown name should be rejected.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::lookup(name).unwrap_or_default()
    }

    fn lookup(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned by the strict conversions into [`PluralCategory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCategoryError {
    /// The string is not one of the six CLDR category names.
    UnknownName(String),
    /// The discriminant is outside `0..=5`.
    InvalidDiscriminant(u8),
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownName(name) => write!(f, "unknown plural category: '{name}'"),
            Self::InvalidDiscriminant(raw) => {
                write!(f, "invalid plural category discriminant: {raw}")
            }
        }
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for PluralCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| ParseCategoryError::UnknownName(s.to_owned()))
    }
}

impl TryFrom<u8> for PluralCategory {
    type Error = ParseCategoryError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(raw))
            .copied()
            .ok_or(ParseCategoryError::InvalidDiscriminant(raw))
    }
}

impl From<PluralCategory> for u8 {
    fn from(category: PluralCategory) -> Self {
        category as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_is_default_and_zero_discriminant() {
        assert_eq!(PluralCategory::default(), PluralCategory::Other);
        assert_eq!(u8::from(PluralCategory::Other), 0);
    }

    #[test]
    fn names_are_canonical_lowercase() {
        let names: Vec<_> = PluralCategory::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["other", "zero", "one", "two", "few", "many"]);
    }

    #[test]
    fn from_name_ignores_case() {
        assert_eq!(PluralCategory::from_name("ONE"), PluralCategory::One);
        assert_eq!(PluralCategory::from_name("one"), PluralCategory::One);
        assert_eq!(PluralCategory::from_name("fEw"), PluralCategory::Few);
    }

    #[test]
    fn from_name_falls_back_to_other() {
        assert_eq!(PluralCategory::from_name(""), PluralCategory::Other);
        assert_eq!(PluralCategory::from_name("several"), PluralCategory::Other);
        assert_eq!(PluralCategory::from_name(" one"), PluralCategory::Other);
    }

    #[test]
    fn parse_is_strict() {
        assert_eq!("Many".parse::<PluralCategory>(), Ok(PluralCategory::Many));
        let err = "lots".parse::<PluralCategory>().unwrap_err();
        assert_eq!(err, ParseCategoryError::UnknownName("lots".into()));
        assert_eq!(err.to_string(), "unknown plural category: 'lots'");
    }

    #[test]
    fn discriminant_conversion() {
        for category in PluralCategory::ALL {
            assert_eq!(PluralCategory::try_from(u8::from(category)), Ok(category));
        }
        assert_eq!(
            PluralCategory::try_from(6),
            Err(ParseCategoryError::InvalidDiscriminant(6))
        );
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(PluralCategory::Two.to_string(), "two");
        assert_eq!(format!("{}", PluralCategory::Other), "other");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_canonical_names() {
        let json = serde_json::to_string(&PluralCategory::Few).unwrap();
        assert_eq!(json, "\"few\"");
        let back: PluralCategory = serde_json::from_str("\"zero\"").unwrap();
        assert_eq!(back, PluralCategory::Zero);
        assert!(serde_json::from_str::<PluralCategory>("\"lots\"").is_err());
    }
}
