//! CLDR plural operands derived from an `f64`.
//!
//! CLDR rules are written against a decimal view of the number:
//!
//! | Operand | Meaning |
//! |---------|---------|
//! | `n` | absolute value |
//! | `i` | integer digits of `n` |
//! | `v` | number of visible fraction digits |
//! | `f` | visible fraction digits, as an integer |
//! | `t` | `f` without trailing zeros |
//!
//! An `f64` carries no trailing zeros of its own, so the visible fraction is
//! taken from the shortest decimal string that round-trips the value:
//! `2.5` has `v = 1, f = 5` and `1.0` is indistinguishable from `1`.

/// Decimal operands of a finite quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PluralOperands {
    /// Absolute value.
    pub n: f64,
    /// Integer part of `n`.
    pub i: f64,
    /// Count of visible fraction digits.
    pub v: usize,
    /// Visible fraction digits.
    pub f: u64,
    /// Visible fraction digits without trailing zeros.
    pub t: u64,
}

impl PluralOperands {
    /// Decompose `value`. Returns `None` for NaN and infinities.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let n = value.abs();
        let i = n.trunc();
        if n == i {
            return Some(Self {
                n,
                i,
                v: 0,
                f: 0,
                t: 0,
            });
        }

        // `Display` for f64 is the shortest round-trip form and never uses
        // exponent notation, so everything after '.' is the visible fraction.
        let repr = n.to_string();
        let digits = repr.split_once('.').map_or("", |(_, frac)| frac);
        let f = digits
            .bytes()
            .filter(u8::is_ascii_digit)
            .fold(0u64, |acc, b| {
                acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
            });
        let mut t = f;
        while t != 0 && t % 10 == 0 {
            t /= 10;
        }
        Some(Self {
            n,
            i,
            v: digits.len(),
            f,
            t,
        })
    }

    /// Whether the quantity has no visible fraction (`v = 0`).
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        self.v == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_have_no_fraction() {
        let ops = PluralOperands::from_f64(21.0).unwrap();
        assert_eq!(ops.n, 21.0);
        assert_eq!(ops.i, 21.0);
        assert_eq!((ops.v, ops.f, ops.t), (0, 0, 0));
        assert!(ops.is_integer());
    }

    #[test]
    fn fraction_digits_from_shortest_repr() {
        let ops = PluralOperands::from_f64(2.5).unwrap();
        assert_eq!(ops.i, 2.0);
        assert_eq!((ops.v, ops.f, ops.t), (1, 5, 5));

        let ops = PluralOperands::from_f64(1.25).unwrap();
        assert_eq!((ops.v, ops.f, ops.t), (2, 25, 25));

        let ops = PluralOperands::from_f64(0.01).unwrap();
        assert_eq!(ops.i, 0.0);
        assert_eq!((ops.v, ops.f, ops.t), (2, 1, 1));
    }

    #[test]
    fn negative_values_use_absolute_value() {
        let ops = PluralOperands::from_f64(-3.5).unwrap();
        assert_eq!(ops.n, 3.5);
        assert_eq!(ops.i, 3.0);
        assert_eq!(ops.f, 5);
    }

    #[test]
    fn negative_zero_is_zero() {
        let ops = PluralOperands::from_f64(-0.0).unwrap();
        assert_eq!(ops.n, 0.0);
        assert!(ops.is_integer());
    }

    #[test]
    fn non_finite_has_no_operands() {
        assert!(PluralOperands::from_f64(f64::NAN).is_none());
        assert!(PluralOperands::from_f64(f64::INFINITY).is_none());
        assert!(PluralOperands::from_f64(f64::NEG_INFINITY).is_none());
    }

    #[test]
    fn extreme_magnitudes_do_not_overflow() {
        let big = PluralOperands::from_f64(1e300).unwrap();
        assert!(big.is_integer());

        let tiny = PluralOperands::from_f64(5e-324).unwrap();
        assert_eq!(tiny.i, 0.0);
        assert!(tiny.v > 300);
        assert_eq!(tiny.f % 10, 5);
    }
}
