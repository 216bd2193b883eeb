//! Literal per-locale expectations taken from the CLDR cardinal charts.

use ftui_plural::PluralCategory::{self, Few, Many, One, Other, Two, Zero};
use ftui_plural::Pluralizer;

#[track_caller]
fn assert_locale(locale: &str, cases: &[(f64, PluralCategory)]) {
    let p = Pluralizer::new(locale);
    assert!(!p.is_fallback(), "locale {locale} missing from table");
    for &(value, expected) in cases {
        assert_eq!(
            p.classify(value),
            expected,
            "locale {locale}: wrong category for {value}"
        );
    }
}

#[test]
fn english() {
    assert_locale("en", &[(1.0, One), (0.0, Other), (2.5, Other), (2.0, Other)]);
}

#[test]
fn czech() {
    assert_locale("cs", &[(1.0, One), (3.0, Few), (5.0, Other)]);
}

#[test]
fn arabic() {
    assert_locale(
        "ar",
        &[
            (0.0, Zero),
            (1.0, One),
            (2.0, Two),
            (5.0, Few),
            (11.0, Many),
            (100.0, Other),
        ],
    );
}

#[test]
fn russian() {
    assert_locale("ru", &[(21.0, One), (3.0, Few), (11.0, Many)]);
}

#[test]
fn latvian() {
    assert_locale("lv", &[(0.0, Zero), (1.0, One), (11.0, Zero), (2.0, Other)]);
}

#[test]
fn nonexistent_locale() {
    let p = Pluralizer::new("xx-nonexistent");
    assert!(p.is_fallback());
    for value in [0.0, 1.0, 2.0, 3.0, 11.0, 21.0, 100.0, 2.5, -1.0, 1e18] {
        assert_eq!(p.classify(value), Other);
    }
}

#[test]
fn ukrainian_matches_russian() {
    for value in 0..=250 {
        let value = f64::from(value);
        assert_eq!(
            Pluralizer::new("uk").classify(value),
            Pluralizer::new("ru").classify(value)
        );
    }
}

#[test]
fn serbo_croatian_group() {
    for locale in ["bs", "hr", "sh", "sr"] {
        assert_locale(
            locale,
            &[(1.0, One), (21.0, One), (11.0, Other), (2.0, Few), (12.0, Other), (5.0, Other)],
        );
    }
}

#[test]
fn polish() {
    assert_locale("pl", &[(1.0, One), (22.0, Few), (12.0, Many), (5.0, Many), (1.5, Other)]);
}

#[test]
fn romance_millions() {
    assert_locale("fr", &[(0.0, One), (1.0, One), (2.0, Other), (1_000_000.0, Many)]);
    assert_locale("es", &[(1.0, One), (0.0, Other), (3_000_000.0, Many)]);
    assert_locale("pt", &[(0.0, One), (1.0, One), (2.0, Other)]);
    assert_locale("pt_PT", &[(0.0, Other), (1.0, One), (2.0, Other)]);
    assert_locale("it", &[(1.0, One), (1.5, Other), (1_000_000.0, Many)]);
}

#[test]
fn celtic() {
    assert_locale("ga", &[(1.0, One), (2.0, Two), (4.0, Few), (8.0, Many), (11.0, Other)]);
    assert_locale(
        "cy",
        &[(0.0, Zero), (1.0, One), (2.0, Two), (3.0, Few), (6.0, Many), (5.0, Other)],
    );
    assert_locale("gd", &[(1.0, One), (11.0, One), (2.0, Two), (15.0, Few), (20.0, Other)]);
    assert_locale("gv", &[(1.0, One), (2.0, Two), (40.0, Few), (3.0, Other)]);
}

#[test]
fn semitic() {
    assert_locale("he", &[(1.0, One), (2.0, Two), (3.0, Other), (20.0, Other)]);
    assert_locale("mt", &[(0.0, Few), (1.0, One), (2.0, Two), (13.0, Many), (100.0, Other)]);
}

#[test]
fn lithuanian() {
    assert_locale("lt", &[(1.0, One), (2.0, Few), (12.0, Other), (0.5, Many)]);
}

#[test]
fn hindi_family() {
    for locale in ["hi", "bn", "fa", "am", "zu"] {
        assert_locale(locale, &[(0.0, One), (1.0, One), (2.0, Other)]);
    }
}

#[test]
fn fractional_english_is_other() {
    let p = Pluralizer::new("en");
    for value in [0.5, 1.5, 1.000_001, 2.25] {
        assert_eq!(p.classify(value), Other);
    }
}

#[test]
fn large_magnitudes_never_panic() {
    let p = Pluralizer::new("ru");
    assert_eq!(p.classify(1e15 + 1.0), One);
    assert_eq!(p.classify(1e15 + 3.0), Few);
    // 1e300 ends in ...0 and f64::MAX in ...8 as exact integers.
    assert_eq!(p.classify(1e300), Many);
    assert_eq!(p.classify(f64::MAX), Many);
    assert_eq!(p.classify(-f64::MAX), Many);
    assert_eq!(p.classify(f64::MIN_POSITIVE), Other);
}
