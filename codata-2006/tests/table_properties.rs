//! Table-wide invariants over every CODATA 2006 entry.
//!
//! These sweeps hold for all 326 records regardless of which constant they
//! describe; per-entry literal checks live in `spot_checks.rs`.

use std::collections::HashSet;

use codata_2006::{constants, REGISTRY};

#[test]
fn table_has_the_published_entry_count() {
    assert_eq!(constants::ALL.len(), 326);
    assert_eq!(REGISTRY.len(), 326);
    assert!(!REGISTRY.is_empty());
}

#[test]
fn uncertainties_are_non_negative() {
    for c in codata_2006::all() {
        assert!(c.uncertainty() >= 0.0, "negative uncertainty: {}", c);
    }
}

#[test]
fn values_are_finite_and_nonzero() {
    for c in codata_2006::all() {
        assert!(c.value().is_finite(), "non-finite value: {}", c);
        assert_ne!(c.value(), 0.0, "zero nominal value: {}", c);
    }
}

#[test]
fn precision_is_the_f64_quotient() {
    for c in codata_2006::all() {
        let expected = (c.uncertainty() / c.value()).abs();
        assert_eq!(c.precision(), expected, "precision mismatch: {}", c.name());
        assert!(
            !c.precision().is_sign_negative(),
            "negative precision: {}",
            c.name()
        );
    }
}

#[test]
fn exact_constants_have_exactly_zero_precision() {
    let mut exact = 0;
    for c in codata_2006::all() {
        if c.is_exact() {
            assert_eq!(c.precision(), 0.0, "exact but nonzero precision: {}", c.name());
            exact += 1;
        } else {
            assert!(c.precision() > 0.0, "measured but zero precision: {}", c.name());
        }
    }
    // The 2006 revision defines sixteen constants exactly.
    assert_eq!(exact, 16);
}

#[test]
fn narrowing_matches_the_target_types_rounding() {
    for c in codata_2006::all() {
        assert_eq!(c.value_as::<f32>(), c.value() as f32, "{}", c.name());
        assert_eq!(
            c.uncertainty_as::<f32>(),
            c.uncertainty() as f32,
            "{}",
            c.name()
        );
        assert_eq!(c.value_as::<f64>(), c.value(), "{}", c.name());
        assert_eq!(c.uncertainty_as::<f64>(), c.uncertainty(), "{}", c.name());
    }
}

#[test]
fn f32_precision_runs_in_f32_arithmetic() {
    for c in codata_2006::all() {
        let expected = (c.uncertainty() as f32 / c.value() as f32).abs();
        let got = c.precision_as::<f32>();
        // Entries below the f32 subnormal range divide as 0/0; both sides
        // must then agree on NaN.
        assert!(
            got == expected || (got.is_nan() && expected.is_nan()),
            "f32 precision mismatch for {}: {} vs {}",
            c.name(),
            got,
            expected
        );
    }
}

#[test]
fn f64_precision_as_agrees_with_precision() {
    for c in codata_2006::all() {
        assert_eq!(c.precision_as::<f64>(), c.precision(), "{}", c.name());
    }
}

#[test]
fn accessors_are_deterministic() {
    for c in codata_2006::all() {
        assert_eq!(c.value(), c.value());
        assert_eq!(c.uncertainty(), c.uncertainty());
        assert_eq!(c.precision(), c.precision());
    }
}

#[test]
fn names_are_unique() {
    let names: HashSet<_> = REGISTRY.names().collect();
    assert_eq!(names.len(), constants::ALL.len());
}

#[test]
fn registry_resolves_every_entry_to_itself() {
    for c in constants::ALL.iter() {
        let found = codata_2006::get(c.name())
            .unwrap_or_else(|| panic!("name does not resolve: {}", c.name()));
        assert_eq!(found, c);
    }
}

#[test]
fn unknown_names_do_not_resolve() {
    // Lookup is exact-match on the published string.
    assert!(codata_2006::get("electron Mass").is_none());
    assert!(codata_2006::get("ELECTRON_MASS").is_none());
    assert!(codata_2006::get("").is_none());

    let err = codata_2006::lookup("speed of dark").unwrap_err();
    assert!(err.to_string().contains("speed of dark"));
}
