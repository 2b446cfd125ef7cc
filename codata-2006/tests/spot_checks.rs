//! Literal checks against individual published entries.

use approx::assert_relative_eq;

use codata_2006::{
    ATOMIC_UNIT_OF_1ST_HYPERPOLARIZABILITY, ATOMIC_UNIT_OF_PERMITTIVITY, ELECTRON_MAG_MOM,
    ELECTRON_MASS, NEWTONIAN_CONSTANT_OF_GRAVITATION, PLANCK_MASS_ENERGY_EQUIVALENT_IN_GEV,
    SPEED_OF_LIGHT_IN_VACUUM,
};

#[test]
fn speed_of_light_is_exact_by_definition() {
    assert_eq!(SPEED_OF_LIGHT_IN_VACUUM.name(), "speed of light in vacuum");
    assert_eq!(SPEED_OF_LIGHT_IN_VACUUM.value(), 299792458.0);
    assert_eq!(SPEED_OF_LIGHT_IN_VACUUM.uncertainty(), 0.0);
    assert_eq!(SPEED_OF_LIGHT_IN_VACUUM.precision(), 0.0);
    assert!(SPEED_OF_LIGHT_IN_VACUUM.is_exact());
    assert_eq!(SPEED_OF_LIGHT_IN_VACUUM.unit(), "m s^-1");
}

#[test]
fn electron_mass_relative_precision() {
    assert_eq!(ELECTRON_MASS.value(), 9.10938215e-31);
    assert_eq!(ELECTRON_MASS.uncertainty(), 4.5e-38);
    assert_relative_eq!(
        ELECTRON_MASS.precision(),
        4.9399618172786836e-08,
        max_relative = 1e-15
    );
}

#[test]
fn negative_valued_constant_keeps_positive_precision() {
    assert!(ELECTRON_MAG_MOM.value() < 0.0);
    assert_eq!(ELECTRON_MAG_MOM.value(), -9.28476377e-24);
    assert_eq!(ELECTRON_MAG_MOM.uncertainty(), 2.3e-31);
    assert_relative_eq!(
        ELECTRON_MAG_MOM.precision(),
        2.4771766487280267e-08,
        max_relative = 1e-15
    );
    assert!(ELECTRON_MAG_MOM.precision() > 0.0);
}

#[test]
fn atomic_unit_of_permittivity_is_exact() {
    assert_eq!(ATOMIC_UNIT_OF_PERMITTIVITY.value(), 1.112650056e-10);
    assert_eq!(ATOMIC_UNIT_OF_PERMITTIVITY.uncertainty(), 0.0);
    assert_eq!(ATOMIC_UNIT_OF_PERMITTIVITY.precision(), 0.0);
    assert_eq!(ATOMIC_UNIT_OF_PERMITTIVITY.unit(), "F m^-1");
}

#[test]
fn gravitational_constant_has_high_relative_uncertainty() {
    assert_eq!(NEWTONIAN_CONSTANT_OF_GRAVITATION.value(), 6.67428e-11);
    assert_eq!(NEWTONIAN_CONSTANT_OF_GRAVITATION.uncertainty(), 6.7e-15);
    assert_relative_eq!(
        NEWTONIAN_CONSTANT_OF_GRAVITATION.precision(),
        1.0038535991897254e-04,
        max_relative = 1e-15
    );
}

#[test]
fn extreme_magnitudes_stay_finite_at_f32() {
    // ~1.2e19 GeV, the largest magnitude in the table; representable in
    // both supported types.
    assert!(PLANCK_MASS_ENERGY_EQUIVALENT_IN_GEV.value_as::<f32>().is_finite());
    assert!(PLANCK_MASS_ENERGY_EQUIVALENT_IN_GEV
        .precision_as::<f32>()
        .is_finite());
    assert!(PLANCK_MASS_ENERGY_EQUIVALENT_IN_GEV
        .precision_as::<f64>()
        .is_finite());
}

#[test]
fn sub_subnormal_entries_degenerate_at_f32() {
    // Value and uncertainty both sit below the f32 subnormal floor: they
    // narrow to zero and the f32 precision is 0/0. That is the narrowed
    // type's own answer, and it is returned as-is.
    assert_eq!(ATOMIC_UNIT_OF_1ST_HYPERPOLARIZABILITY.value_as::<f32>(), 0.0);
    assert!(ATOMIC_UNIT_OF_1ST_HYPERPOLARIZABILITY
        .precision_as::<f32>()
        .is_nan());
    assert_relative_eq!(
        ATOMIC_UNIT_OF_1ST_HYPERPOLARIZABILITY.precision_as::<f64>(),
        8.1e-61 / 3.206361533e-53,
        max_relative = 1e-15
    );
}

#[test]
fn display_renders_the_published_line() {
    assert_eq!(
        ELECTRON_MASS.to_string(),
        "electron mass = (9.10938215e-31 ± 4.5e-38) kg"
    );
}

#[cfg(feature = "serde")]
#[test]
fn serde_export_carries_the_published_fields() {
    let v = serde_json::to_value(ELECTRON_MASS).unwrap();
    assert_eq!(v["name"], "electron mass");
    assert_eq!(v["value"], 9.10938215e-31);
    assert_eq!(v["uncertainty"], 4.5e-38);
    assert_eq!(v["unit"], "kg");
}
