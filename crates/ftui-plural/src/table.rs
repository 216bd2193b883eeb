//! Locale code → plural rule table.
//!
//! # Invariants
//!
//! 1. **Exact match**: lookups compare codes byte-for-byte. There is no case
//!    folding and no subtag fallback, so `"pt"` and `"pt_PT"` are separate
//!    entries and `"en-US"` is not found.
//! 2. **Built once**: the map is constructed on first use and never
//!    mutated afterwards; readers never observe a partial table.
//! 3. **One rule per code**: every code appears exactly once.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unknown locale | Code not in table | `lookup` returns `None` |
//! | Empty locale | `""` | `lookup` returns `None` |

use std::sync::OnceLock;

use ahash::AHashMap;

use crate::rule::PluralRule;
use crate::rule::PluralRule::*;

/// Supported locales, sorted by code.
const LOCALE_RULES: &[(&str, PluralRule)] = &[
    ("af", ExactOne),
    ("am", Hindi),
    ("ar", Arabic),
    ("as", Hindi),
    ("ast", IntegerOne),
    ("az", ExactOne),
    ("be", Belarusian),
    ("bg", ExactOne),
    ("bn", Hindi),
    ("bo", Invariant),
    ("br", Breton),
    ("bs", Croatian),
    ("ca", Catalan),
    ("cs", Czech),
    ("cy", Welsh),
    ("da", Danish),
    ("de", IntegerOne),
    ("dsb", Sorbian),
    ("dz", Invariant),
    ("el", ExactOne),
    ("en", IntegerOne),
    ("eo", ExactOne),
    ("es", Spanish),
    ("et", IntegerOne),
    ("eu", ExactOne),
    ("fa", Hindi),
    ("fi", IntegerOne),
    ("fil", Filipino),
    ("fo", ExactOne),
    ("fr", French),
    ("fur", ExactOne),
    ("fy", IntegerOne),
    ("ga", Irish),
    ("gd", ScottishGaelic),
    ("gl", IntegerOne),
    ("gu", Hindi),
    ("gv", Manx),
    ("ha", ExactOne),
    ("he", Hebrew),
    ("hi", Hindi),
    ("hr", Croatian),
    ("hsb", Sorbian),
    ("hu", ExactOne),
    ("hy", IntegerZeroOrOne),
    ("id", Invariant),
    ("ig", Invariant),
    ("is", Icelandic),
    ("it", Catalan),
    ("iu", Dual),
    ("ja", Invariant),
    ("jgo", ExactOne),
    ("jmc", ExactOne),
    ("jv", Invariant),
    ("ka", ExactOne),
    ("kab", IntegerZeroOrOne),
    ("kaj", ExactOne),
    ("kcg", ExactOne),
    ("kde", Invariant),
    ("kea", Invariant),
    ("kk", ExactOne),
    ("kkj", ExactOne),
    ("kl", ExactOne),
    ("km", Invariant),
    ("kn", Hindi),
    ("ko", Invariant),
    ("ks", ExactOne),
    ("ksb", ExactOne),
    ("ksh", Colognian),
    ("ku", ExactOne),
    ("kw", Cornish),
    ("ky", ExactOne),
    ("lag", Langi),
    ("lb", ExactOne),
    ("lg", ExactOne),
    ("ln", ZeroOrOne),
    ("lo", Invariant),
    ("lt", Lithuanian),
    ("lv", Latvian),
    ("mas", ExactOne),
    ("mg", ZeroOrOne),
    ("mgo", ExactOne),
    ("mk", Macedonian),
    ("ml", ExactOne),
    ("mn", ExactOne),
    ("mo", Romanian),
    ("mr", ExactOne),
    ("ms", Invariant),
    ("mt", Maltese),
    ("my", Invariant),
    ("nah", ExactOne),
    ("naq", Dual),
    ("nb", ExactOne),
    ("nd", ExactOne),
    ("ne", ExactOne),
    ("nl", IntegerOne),
    ("nn", ExactOne),
    ("nnh", ExactOne),
    ("no", ExactOne),
    ("nqo", Invariant),
    ("nr", ExactOne),
    ("nso", ZeroOrOne),
    ("ny", ExactOne),
    ("nyn", ExactOne),
    ("om", ExactOne),
    ("or", ExactOne),
    ("os", ExactOne),
    ("pa", ZeroOrOne),
    ("pap", ExactOne),
    ("pl", Polish),
    ("prg", Latvian),
    ("ps", ExactOne),
    ("pt", Portuguese),
    ("pt_PT", Catalan),
    ("rm", ExactOne),
    ("ro", Romanian),
    ("rof", ExactOne),
    ("root", Invariant),
    ("ru", Russian),
    ("rwk", ExactOne),
    ("sah", Invariant),
    ("saq", ExactOne),
    ("sat", Dual),
    ("sbp", ExactOne),
    ("sd", ExactOne),
    ("se", Dual),
    ("seh", ExactOne),
    ("ses", Invariant),
    ("sg", Invariant),
    ("sh", Croatian),
    ("shi", Tachelhit),
    ("si", Sinhala),
    ("sk", Czech),
    ("sl", Slovenian),
    ("sma", Dual),
    ("smi", Dual),
    ("smj", Dual),
    ("smn", Dual),
    ("sms", Dual),
    ("sn", ExactOne),
    ("so", ExactOne),
    ("sq", ExactOne),
    ("sr", Croatian),
    ("ss", ExactOne),
    ("ssy", ExactOne),
    ("st", ExactOne),
    ("sv", IntegerOne),
    ("sw", IntegerOne),
    ("syr", ExactOne),
    ("ta", ExactOne),
    ("te", ExactOne),
    ("teo", ExactOne),
    ("th", Invariant),
    ("ti", ZeroOrOne),
    ("tig", ExactOne),
    ("tk", ExactOne),
    ("tl", Filipino),
    ("tn", ExactOne),
    ("to", Invariant),
    ("tr", ExactOne),
    ("ts", ExactOne),
    ("tzm", Tamazight),
    ("ug", ExactOne),
    ("uk", Russian),
    ("ur", IntegerOne),
    ("uz", ExactOne),
    ("ve", ExactOne),
    ("vi", Invariant),
    ("vo", ExactOne),
    ("vun", ExactOne),
    ("wa", ZeroOrOne),
    ("wae", ExactOne),
    ("wo", Invariant),
    ("xh", ExactOne),
    ("xog", ExactOne),
    ("yi", IntegerOne),
    ("yo", Invariant),
    ("yue", Invariant),
    ("zh", Invariant),
    ("zu", Hindi),
];

static RULE_TABLE: OnceLock<AHashMap<&'static str, PluralRule>> = OnceLock::new();

fn rule_table() -> &'static AHashMap<&'static str, PluralRule> {
    RULE_TABLE.get_or_init(build_rule_table)
}

fn build_rule_table() -> AHashMap<&'static str, PluralRule> {
    let table: AHashMap<_, _> = LOCALE_RULES.iter().copied().collect();
    #[cfg(feature = "tracing")]
    tracing::trace!(entries = table.len(), "plural rule table built");
    table
}

/// Look up the plural rule for an exact locale code.
///
/// ```
/// use ftui_plural::{PluralRule, lookup};
///
/// assert_eq!(lookup("ru"), Some(PluralRule::Russian));
/// assert_eq!(lookup("pt_PT"), Some(PluralRule::Catalan));
/// assert_eq!(lookup("en-US"), None);
/// ```
#[must_use]
pub fn lookup(locale: &str) -> Option<PluralRule> {
    rule_table().get(locale).copied()
}

/// Every supported locale code, in sorted order.
pub fn supported_locales() -> impl Iterator<Item = &'static str> {
    LOCALE_RULES.iter().map(|&(code, _)| code)
}
