#![no_main]

use arbitrary::Arbitrary;
use ftui_plural::{PluralCategory, Pluralizer, lookup, supported_locales};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    locale: String,
    table_index: u8,
    bits: u64,
    name: String,
}

fuzz_target!(|input: Input| {
    let value = f64::from_bits(input.bits);

    // Arbitrary locale strings must never panic and must agree with lookup.
    let p = Pluralizer::new(&input.locale);
    assert_eq!(p.is_fallback(), lookup(&input.locale).is_none());
    let cat = p.classify(value);
    if p.is_fallback() {
        assert_eq!(cat, PluralCategory::Other);
    }

    // Every supported rule is total and stays within its categories.
    let codes: Vec<_> = supported_locales().collect();
    let code = codes[usize::from(input.table_index) % codes.len()];
    let p = Pluralizer::new(code);
    let cat = p.classify(value);
    assert!(
        p.rule().categories().contains(&cat),
        "{code} produced {cat:?} for {value}"
    );
    assert_eq!(cat, p.classify(-value), "{code} sign asymmetry at {value}");

    // Name lookup is total; known names round-trip.
    let resolved = PluralCategory::from_name(&input.name);
    if input.name.parse::<PluralCategory>().is_ok() {
        assert!(resolved.name().eq_ignore_ascii_case(&input.name));
    } else {
        assert_eq!(resolved, PluralCategory::Other);
    }
});
