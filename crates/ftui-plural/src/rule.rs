//! CLDR cardinal plural rules.
//!
//! Each [`PluralRule`] variant names one rule family shared by a group of
//! locales; the locale table in [`crate::table`] maps codes onto them.
//!
//! # Invariants
//!
//! 1. Every built-in rule maps any `f64` to exactly one `PluralCategory`.
//! 2. Conditions are tested in CLDR order; the first match wins and
//!    `Other` is the final fallback.
//! 3. Negative quantities classify like their absolute value; NaN and
//!    infinities classify as `Other`.
//! 4. Rules are pure: same quantity, same category.
//!
//! Modulo conditions use `f64` remainder. A CLDR range such as
//! `n % 100 = 3..10` only matches when the remainder is an integer inside the
//! range, so `3.5` is never in `3..10`.

use crate::category::PluralCategory;
use crate::operands::PluralOperands;

use PluralCategory::{Few, Many, One, Other, Two, Zero};

/// A plural rule: a CLDR rule family, or a custom function.
#[derive(Debug, Clone, Copy)]
pub enum PluralRule {
    /// No plural distinction: always `other` (ja, ko, th, vi, zh, ...).
    Invariant,
    /// `one` for `n = 1` (af, bg, el, hu, tr, ...).
    ExactOne,
    /// `one` for `i = 1 and v = 0` (en, de, nl, sv, ...).
    IntegerOne,
    /// `one` for `n = 0..1` (ln, mg, pa, ti, wa, ...).
    ZeroOrOne,
    /// `one` for `i = 0,1` (hy, kab).
    IntegerZeroOrOne,
    /// `one` for `i = 0 or n = 1` (am, bn, fa, hi, zu, ...).
    Hindi,
    /// French: `one` for `i = 0,1`, `many` for exact millions.
    French,
    /// Portuguese: `one` for `i = 0..1`, `many` for exact millions.
    Portuguese,
    /// `one` for `i = 1 and v = 0`, `many` for exact millions (ca, it, pt_PT).
    Catalan,
    /// Spanish: `one` for `n = 1`, `many` for exact millions.
    Spanish,
    /// Danish: `one` for `n = 1` or a fraction with `i = 0,1`.
    Danish,
    /// Icelandic: `one` for 1, 21, 31, ... and fractions ending in 1.
    Icelandic,
    /// Macedonian: `one` for integers or fractions ending in 1 (not 11).
    Macedonian,
    /// Filipino/Tagalog: `one` unless the last digit is 4, 6 or 9.
    Filipino,
    /// Sinhala: `one` for 0, 1 and `0.1`-style fractions.
    Sinhala,
    /// Latvian/Prussian: `zero` for tens and teens, `one` for x1.
    Latvian,
    /// Lithuanian: `one` for x1, `few` for x2..x9 outside the teens.
    Lithuanian,
    /// Russian/Ukrainian: `one`, `few`, `many` on the last two digits.
    Russian,
    /// Belarusian: like Russian, but over `n` rather than `i`.
    Belarusian,
    /// Polish: `one` only for exactly 1.
    Polish,
    /// Czech/Slovak: `one` for 1, `few` for 2..4, `many` for fractions.
    Czech,
    /// Bosnian/Croatian/Serbian: Slavic modulo over integer and fraction digits.
    Croatian,
    /// Slovenian: `one`, `two`, `few` on the last two digits.
    Slovenian,
    /// Upper/Lower Sorbian.
    Sorbian,
    /// Romanian/Moldavian: `few` for 0, fractions and x01..x19.
    Romanian,
    /// Arabic: all six categories.
    Arabic,
    /// Hebrew: `one`, `two`, `other`.
    Hebrew,
    /// Maltese.
    Maltese,
    /// Irish.
    Irish,
    /// Welsh.
    Welsh,
    /// Breton.
    Breton,
    /// Cornish.
    Cornish,
    /// Manx.
    Manx,
    /// Scottish Gaelic.
    ScottishGaelic,
    /// Colognian: `zero` for 0, `one` for 1.
    Colognian,
    /// Langi: `zero` for 0, `one` for `0 < n < 2`.
    Langi,
    /// Tachelhit.
    Tachelhit,
    /// Central Atlas Tamazight: `one` for 0, 1 and 11..99.
    Tamazight,
    /// `one` for 1, `two` for 2 (iu, naq, se, and the Sami languages).
    Dual,
    /// Custom rule function.
    ///
    /// Through [`categorize`](Self::categorize) it receives the raw quantity,
    /// sign and NaN included. Through [`evaluate`](Self::evaluate) it
    /// receives `ops.n`, the absolute value, because operands carry no sign.
    Custom(fn(f64) -> PluralCategory),
}

impl PartialEq for PluralRule {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Custom(a), Self::Custom(b)) => core::ptr::fn_addr_eq(*a, *b),
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

impl Eq for PluralRule {}

impl PluralRule {
    /// Determine the plural category for `value`.
    #[must_use]
    pub fn categorize(&self, value: f64) -> PluralCategory {
        if let Self::Custom(rule) = self {
            return rule(value);
        }
        PluralOperands::from_f64(value).map_or(Other, |ops| self.evaluate(&ops))
    }

    /// Evaluate the rule against precomputed operands.
    ///
    /// `Custom` rules see `ops.n`, the absolute value.
    #[must_use]
    pub fn evaluate(&self, ops: &PluralOperands) -> PluralCategory {
        let &PluralOperands { n, i, v, f, t } = ops;
        let int = v == 0;

        match self {
            Self::Invariant => Other,
            Self::ExactOne => pick(n == 1.0, One),
            Self::IntegerOne => pick(i == 1.0 && int, One),
            Self::ZeroOrOne => pick(within(n, 0.0, 1.0), One),
            Self::IntegerZeroOrOne => pick(i == 0.0 || i == 1.0, One),
            Self::Hindi => pick(i == 0.0 || n == 1.0, One),
            Self::French => {
                if i == 0.0 || i == 1.0 {
                    One
                } else {
                    million(ops)
                }
            }
            Self::Portuguese => {
                if within(i, 0.0, 1.0) {
                    One
                } else {
                    million(ops)
                }
            }
            Self::Catalan => {
                if i == 1.0 && int {
                    One
                } else {
                    million(ops)
                }
            }
            Self::Spanish => {
                if n == 1.0 {
                    One
                } else {
                    million(ops)
                }
            }
            Self::Danish => pick(n == 1.0 || (t != 0 && (i == 0.0 || i == 1.0)), One),
            Self::Icelandic => pick(
                (t == 0 && i % 10.0 == 1.0 && i % 100.0 != 11.0)
                    || (t % 10 == 1 && t % 100 != 11),
                One,
            ),
            Self::Macedonian => pick(
                (int && i % 10.0 == 1.0 && i % 100.0 != 11.0) || (f % 10 == 1 && f % 100 != 11),
                One,
            ),
            Self::Filipino => {
                let excluded = |d: u64| matches!(d, 4 | 6 | 9);
                pick(
                    (int && (1.0..=3.0).contains(&i))
                        || (int && !excluded((i % 10.0) as u64))
                        || (!int && !excluded(f % 10)),
                    One,
                )
            }
            Self::Sinhala => pick(n == 0.0 || n == 1.0 || (i == 0.0 && f == 1), One),
            Self::Latvian => {
                if n % 10.0 == 0.0
                    || within(n % 100.0, 11.0, 19.0)
                    || (v == 2 && (11..=19).contains(&(f % 100)))
                {
                    Zero
                } else if (n % 10.0 == 1.0 && n % 100.0 != 11.0)
                    || (v == 2 && f % 10 == 1 && f % 100 != 11)
                    || (v != 2 && f % 10 == 1)
                {
                    One
                } else {
                    Other
                }
            }
            Self::Lithuanian => {
                let teen = within(n % 100.0, 11.0, 19.0);
                if n % 10.0 == 1.0 && !teen {
                    One
                } else if within(n % 10.0, 2.0, 9.0) && !teen {
                    Few
                } else if f != 0 {
                    Many
                } else {
                    Other
                }
            }
            Self::Russian => {
                if !int {
                    return Other;
                }
                let (i10, i100) = (i % 10.0, i % 100.0);
                if i10 == 1.0 && i100 != 11.0 {
                    One
                } else if within(i10, 2.0, 4.0) && !within(i100, 12.0, 14.0) {
                    Few
                } else {
                    // Every remaining integer ends in 0, 5..9 or 11..14.
                    Many
                }
            }
            Self::Belarusian => {
                let (n10, n100) = (n % 10.0, n % 100.0);
                if n10 == 1.0 && n100 != 11.0 {
                    One
                } else if within(n10, 2.0, 4.0) && !within(n100, 12.0, 14.0) {
                    Few
                } else if n10 == 0.0 || within(n10, 5.0, 9.0) || within(n100, 11.0, 14.0) {
                    Many
                } else {
                    Other
                }
            }
            Self::Polish => {
                if !int {
                    return Other;
                }
                let (i10, i100) = (i % 10.0, i % 100.0);
                if i == 1.0 {
                    One
                } else if within(i10, 2.0, 4.0) && !within(i100, 12.0, 14.0) {
                    Few
                } else {
                    Many
                }
            }
            Self::Czech => {
                if !int {
                    Many
                } else if i == 1.0 {
                    One
                } else if within(i, 2.0, 4.0) {
                    Few
                } else {
                    Other
                }
            }
            Self::Croatian => {
                let (i10, i100) = (i % 10.0, i % 100.0);
                let (f10, f100) = (f % 10, f % 100);
                if (int && i10 == 1.0 && i100 != 11.0) || (f10 == 1 && f100 != 11) {
                    One
                } else if (int && within(i10, 2.0, 4.0) && !within(i100, 12.0, 14.0))
                    || ((2..=4).contains(&f10) && !(12..=14).contains(&f100))
                {
                    Few
                } else {
                    Other
                }
            }
            Self::Slovenian => {
                let i100 = i % 100.0;
                if !int {
                    Few
                } else if i100 == 1.0 {
                    One
                } else if i100 == 2.0 {
                    Two
                } else if within(i100, 3.0, 4.0) {
                    Few
                } else {
                    Other
                }
            }
            Self::Sorbian => {
                let i100 = i % 100.0;
                let f100 = f % 100;
                if (int && i100 == 1.0) || f100 == 1 {
                    One
                } else if (int && i100 == 2.0) || f100 == 2 {
                    Two
                } else if (int && within(i100, 3.0, 4.0)) || (3..=4).contains(&f100) {
                    Few
                } else {
                    Other
                }
            }
            Self::Romanian => {
                if i == 1.0 && int {
                    One
                } else if !int || n == 0.0 || (n != 1.0 && within(n % 100.0, 1.0, 19.0)) {
                    Few
                } else {
                    Other
                }
            }
            Self::Arabic => {
                let n100 = n % 100.0;
                if n == 0.0 {
                    Zero
                } else if n == 1.0 {
                    One
                } else if n == 2.0 {
                    Two
                } else if within(n100, 3.0, 10.0) {
                    Few
                } else if within(n100, 11.0, 99.0) {
                    Many
                } else {
                    Other
                }
            }
            Self::Hebrew => {
                if (i == 1.0 && int) || (i == 0.0 && !int) {
                    One
                } else if i == 2.0 && int {
                    Two
                } else {
                    Other
                }
            }
            Self::Maltese => {
                let n100 = n % 100.0;
                if n == 1.0 {
                    One
                } else if n == 2.0 {
                    Two
                } else if n == 0.0 || within(n100, 3.0, 10.0) {
                    Few
                } else if within(n100, 11.0, 19.0) {
                    Many
                } else {
                    Other
                }
            }
            Self::Irish => {
                if n == 1.0 {
                    One
                } else if n == 2.0 {
                    Two
                } else if within(n, 3.0, 6.0) {
                    Few
                } else if within(n, 7.0, 10.0) {
                    Many
                } else {
                    Other
                }
            }
            Self::Welsh => {
                if n == 0.0 {
                    Zero
                } else if n == 1.0 {
                    One
                } else if n == 2.0 {
                    Two
                } else if n == 3.0 {
                    Few
                } else if n == 6.0 {
                    Many
                } else {
                    Other
                }
            }
            Self::Breton => {
                let (n10, n100) = (n % 10.0, n % 100.0);
                let in_any = |ranges: &[(f64, f64)]| {
                    ranges.iter().any(|&(lo, hi)| within(n100, lo, hi))
                };
                if n10 == 1.0 && !in_any(&[(11.0, 11.0), (71.0, 71.0), (91.0, 91.0)]) {
                    One
                } else if n10 == 2.0 && !in_any(&[(12.0, 12.0), (72.0, 72.0), (92.0, 92.0)]) {
                    Two
                } else if (within(n10, 3.0, 4.0) || n10 == 9.0)
                    && !in_any(&[(10.0, 19.0), (70.0, 79.0), (90.0, 99.0)])
                {
                    Few
                } else if n != 0.0 && n % 1_000_000.0 == 0.0 {
                    Many
                } else {
                    Other
                }
            }
            Self::Cornish => {
                let n100 = n % 100.0;
                let n100k = n % 100_000.0;
                if n == 0.0 {
                    Zero
                } else if n == 1.0 {
                    One
                } else if [2.0, 22.0, 42.0, 62.0, 82.0].contains(&n100)
                    || (n % 1000.0 == 0.0
                        && (within(n100k, 1000.0, 20_000.0)
                            || [40_000.0, 60_000.0, 80_000.0].contains(&n100k)))
                    || (n != 0.0 && n % 1_000_000.0 == 100_000.0)
                {
                    Two
                } else if [3.0, 23.0, 43.0, 63.0, 83.0].contains(&n100) {
                    Few
                } else if n != 1.0 && [1.0, 21.0, 41.0, 61.0, 81.0].contains(&n100) {
                    Many
                } else {
                    Other
                }
            }
            Self::Manx => {
                if !int {
                    return Many;
                }
                let (i10, i100) = (i % 10.0, i % 100.0);
                if i10 == 1.0 {
                    One
                } else if i10 == 2.0 {
                    Two
                } else if [0.0, 20.0, 40.0, 60.0, 80.0].contains(&i100) {
                    Few
                } else {
                    Other
                }
            }
            Self::ScottishGaelic => {
                if n == 1.0 || n == 11.0 {
                    One
                } else if n == 2.0 || n == 12.0 {
                    Two
                } else if within(n, 3.0, 10.0) || within(n, 13.0, 19.0) {
                    Few
                } else {
                    Other
                }
            }
            Self::Colognian => {
                if n == 0.0 {
                    Zero
                } else {
                    pick(n == 1.0, One)
                }
            }
            Self::Langi => {
                if n == 0.0 {
                    Zero
                } else if i == 0.0 || i == 1.0 {
                    One
                } else {
                    Other
                }
            }
            Self::Tachelhit => {
                if i == 0.0 || n == 1.0 {
                    One
                } else if within(n, 2.0, 10.0) {
                    Few
                } else {
                    Other
                }
            }
            Self::Tamazight => pick(within(n, 0.0, 1.0) || within(n, 11.0, 99.0), One),
            Self::Dual => {
                if n == 1.0 {
                    One
                } else {
                    pick(n == 2.0, Two)
                }
            }
            Self::Custom(rule) => rule(n),
        }
    }

    /// Every category this rule can produce, in discriminant order.
    ///
    /// `Other` is always present. Custom rules report all six categories.
    #[must_use]
    pub const fn categories(&self) -> &'static [PluralCategory] {
        match self {
            Self::Invariant => &[Other],
            Self::ExactOne
            | Self::IntegerOne
            | Self::ZeroOrOne
            | Self::IntegerZeroOrOne
            | Self::Hindi
            | Self::Danish
            | Self::Icelandic
            | Self::Macedonian
            | Self::Filipino
            | Self::Sinhala
            | Self::Tamazight => &[Other, One],
            Self::French | Self::Portuguese | Self::Catalan | Self::Spanish => {
                &[Other, One, Many]
            }
            Self::Latvian | Self::Colognian | Self::Langi => &[Other, Zero, One],
            Self::Croatian | Self::Tachelhit => &[Other, One, Few],
            Self::Lithuanian
            | Self::Russian
            | Self::Belarusian
            | Self::Polish
            | Self::Czech => &[Other, One, Few, Many],
            Self::Romanian => &[Other, One, Few],
            Self::Slovenian | Self::Sorbian | Self::ScottishGaelic => &[Other, One, Two, Few],
            Self::Hebrew | Self::Dual => &[Other, One, Two],
            Self::Maltese | Self::Irish | Self::Breton | Self::Manx => {
                &[Other, One, Two, Few, Many]
            }
            Self::Arabic | Self::Welsh | Self::Cornish | Self::Custom(_) => &PluralCategory::ALL,
        }
    }
}

/// `category` if `cond` holds, else `Other`.
fn pick(cond: bool, category: PluralCategory) -> PluralCategory {
    if cond { category } else { Other }
}

/// CLDR integer range test: `x` is a whole number in `lo..=hi`.
fn within(x: f64, lo: f64, hi: f64) -> bool {
    x.fract() == 0.0 && (lo..=hi).contains(&x)
}

/// Shared `many` clause of the Romance rules: a non-zero exact million.
fn million(ops: &PluralOperands) -> PluralCategory {
    pick(
        ops.is_integer() && ops.i != 0.0 && ops.i % 1_000_000.0 == 0.0,
        Many,
    )
}
