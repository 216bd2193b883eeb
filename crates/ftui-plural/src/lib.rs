#![forbid(unsafe_code)]

//! CLDR cardinal plural categories for FrankenTUI.
//!
//! Resolves, for a locale code and a quantity, which plural category
//! (`zero`, `one`, `two`, `few`, `many`, `other`) a message should use, and
//! converts categories to and from their canonical CLDR names.
//!
//! # Role in FrankenTUI
//! `ftui-plural` is the rule-evaluation core behind pluralized strings.
//! It only classifies numbers that are already computed: formatting,
//! interpolation and locale negotiation live with the caller.
//!
//! # How it fits in the system
//! A caller binds a [`Pluralizer`] once per locale and classifies counts
//! with it. The locale table is immutable after first use, and
//! [`Pluralizer`] is `Copy + Send + Sync`, so it can be shared freely
//! across threads.
//!
//! ```
//! use ftui_plural::{PluralCategory, Pluralizer};
//!
//! let cs = Pluralizer::new("cs");
//! assert_eq!(cs.classify(1.0), PluralCategory::One);
//! assert_eq!(cs.classify(3.0), PluralCategory::Few);
//! assert_eq!(cs.classify(5.0), PluralCategory::Other);
//! assert_eq!(cs.to_name(PluralCategory::Few), "few");
//! ```

pub mod category;
pub mod operands;
pub mod pluralizer;
pub mod rule;
pub mod table;

pub use category::{ParseCategoryError, PluralCategory};
pub use operands::PluralOperands;
pub use pluralizer::{PluralClassifier, Pluralizer};
pub use rule::PluralRule;
pub use table::{lookup, supported_locales};
