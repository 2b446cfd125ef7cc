//! The physical-constant record type.
//!
//! [`PhysicalConstant`] is the one data shape in the library: an immutable
//! `(name, value, uncertainty, unit)` record transcribed from a published
//! table. The relative precision is a derived quantity, recomputed from the
//! two stored numbers on every call.
//!
//! # Design Rationale
//!
//! **Why is `precision()` never stored?** Keeping only the published value
//! and uncertainty leaves the table with a single source of truth: a record
//! is constructible from exactly the two literals the table prints, and a
//! transcription error cannot hide behind a stale cached quotient.
//!
//! **Why `f64` storage with narrowing accessors?** The published values are
//! decimal literals that fit `f64`; narrower representations are views, not
//! copies. Narrowing happens with the target type's own rounding, and
//! derived quantities are computed entirely in the target type; see
//! [`precision_as`](PhysicalConstant::precision_as).
//!
//! # Quick Start
//!
//! ```
//! use codata_core::PhysicalConstant;
//!
//! const SPEED_OF_LIGHT_IN_VACUUM: PhysicalConstant =
//!     PhysicalConstant::new("speed of light in vacuum", 299792458.0, 0.0, "m s^-1");
//!
//! assert_eq!(SPEED_OF_LIGHT_IN_VACUUM.value(), 299792458.0);
//! assert_eq!(SPEED_OF_LIGHT_IN_VACUUM.precision(), 0.0);
//! assert!(SPEED_OF_LIGHT_IN_VACUUM.is_exact());
//! ```

use std::fmt;

use crate::real::Real;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A recommended physical-constant value with its standard uncertainty.
///
/// Records are created in `const` context and never mutated. The `name` is
/// the exact published string (`"electron mag. mom."`, dots included) and
/// doubles as the lookup key; `unit` is documentation only, and no dimensional
/// analysis is performed on it.
///
/// # Derives
///
/// - `Copy`, `Clone`: a handful of words, cheap to copy
/// - `Debug`: shows the stored fields
/// - `PartialEq`: field-wise comparison; `Eq`/`Ord` are absent because the
///   numeric fields are floats
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PhysicalConstant {
    name: &'static str,
    value: f64,
    uncertainty: f64,
    unit: &'static str,
}

impl PhysicalConstant {
    /// Creates a record from published literals.
    ///
    /// `const` so that whole tables can be built as `static` data.
    pub const fn new(
        name: &'static str,
        value: f64,
        uncertainty: f64,
        unit: &'static str,
    ) -> Self {
        Self {
            name,
            value,
            uncertainty,
            unit,
        }
    }

    /// The published name, e.g. `"electron mass"`.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The published unit string; empty for dimensionless quantities.
    pub const fn unit(&self) -> &'static str {
        self.unit
    }

    /// The recommended nominal value.
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The standard uncertainty, in the same unit as [`value`](Self::value).
    ///
    /// Exactly zero for constants that are exact by definition.
    pub const fn uncertainty(&self) -> f64 {
        self.uncertainty
    }

    /// Relative precision: `|uncertainty / value|`.
    ///
    /// Recomputed from the stored fields on every call, with plain IEEE-754
    /// semantics: a zero uncertainty gives exactly `0.0`, a zero nominal
    /// value gives `Inf` (or `NaN` when both are zero), and the absolute
    /// value of the whole quotient keeps the result non-negative for
    /// negative-valued constants. Degenerate results are returned as
    /// ordinary floats, never turned into errors.
    ///
    /// ```
    /// use codata_core::PhysicalConstant;
    ///
    /// let e_mag = PhysicalConstant::new("electron mag. mom.", -9.28476377e-24, 2.3e-31, "J T^-1");
    /// assert!(e_mag.precision() > 0.0);
    /// ```
    pub fn precision(&self) -> f64 {
        (self.uncertainty / self.value).abs()
    }

    /// True iff the constant is exact by definition (zero uncertainty).
    pub fn is_exact(&self) -> bool {
        self.uncertainty == 0.0
    }

    /// The nominal value narrowed into representation `T`.
    pub fn value_as<T: Real>(&self) -> T {
        T::from_f64(self.value)
    }

    /// The standard uncertainty narrowed into representation `T`.
    pub fn uncertainty_as<T: Real>(&self) -> T {
        T::from_f64(self.uncertainty)
    }

    /// Relative precision computed in `T`'s own arithmetic.
    ///
    /// Both fields are narrowed first and the quotient is formed in `T`,
    /// not in a wider intermediate, so the result is bit-identical to what
    /// a caller holding the narrowed fields would compute. A consequence at
    /// `f32`: entries whose magnitudes sit below the `f32` subnormal range
    /// narrow to zero and divide as `0.0 / 0.0`, yielding `NaN`. That is faithful
    /// to the representation, so deliberately not special-cased.
    pub fn precision_as<T: Real>(&self) -> T {
        self.uncertainty_as::<T>().div(self.value_as::<T>()).abs()
    }
}

/// Renders the published form: `name = (value ± uncertainty) unit`.
impl fmt::Display for PhysicalConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = (", self.name)?;
        write_literal(f, self.value)?;
        write!(f, " ± ")?;
        write_literal(f, self.uncertainty)?;
        write!(f, ")")?;
        if !self.unit.is_empty() {
            write!(f, " {}", self.unit)?;
        }
        Ok(())
    }
}

// Scientific notation for magnitudes a decimal expansion would bury,
// plain notation otherwise.
fn write_literal(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x != 0.0 && (x.abs() < 1e-3 || x.abs() >= 1e9) {
        write!(f, "{:e}", x)
    } else {
        write!(f, "{}", x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ELECTRON_MASS: PhysicalConstant =
        PhysicalConstant::new("electron mass", 9.10938215e-31, 4.5e-38, "kg");

    const ELECTRON_MAG_MOM: PhysicalConstant =
        PhysicalConstant::new("electron mag. mom.", -9.28476377e-24, 2.3e-31, "J T^-1");

    const SPEED_OF_LIGHT: PhysicalConstant =
        PhysicalConstant::new("speed of light in vacuum", 299792458.0, 0.0, "m s^-1");

    #[test]
    fn test_accessors_return_stored_literals() {
        assert_eq!(ELECTRON_MASS.name(), "electron mass");
        assert_eq!(ELECTRON_MASS.value(), 9.10938215e-31);
        assert_eq!(ELECTRON_MASS.uncertainty(), 4.5e-38);
        assert_eq!(ELECTRON_MASS.unit(), "kg");
    }

    #[test]
    fn test_precision_is_the_f64_quotient() {
        let expected = (4.5e-38_f64 / 9.10938215e-31).abs();
        assert_eq!(ELECTRON_MASS.precision(), expected);
        // Repeated calls recompute the same quotient.
        assert_eq!(ELECTRON_MASS.precision(), ELECTRON_MASS.precision());
    }

    #[test]
    fn test_exact_constant_has_zero_precision() {
        assert!(SPEED_OF_LIGHT.is_exact());
        assert_eq!(SPEED_OF_LIGHT.precision(), 0.0);
        assert!(!SPEED_OF_LIGHT.precision().is_sign_negative());
    }

    #[test]
    fn test_negative_value_gives_positive_precision() {
        assert!(ELECTRON_MAG_MOM.value() < 0.0);
        assert!(ELECTRON_MAG_MOM.precision() > 0.0);
        assert!(!ELECTRON_MAG_MOM.is_exact());
    }

    #[test]
    fn test_zero_value_degenerates_without_error() {
        // No table entry has a zero nominal value today, but the contract
        // must hold if one ever does.
        let both_zero = PhysicalConstant::new("null quantity", 0.0, 0.0, "");
        assert!(both_zero.precision().is_nan());

        let zero_value = PhysicalConstant::new("null value", 0.0, 1.0e-9, "");
        assert!(zero_value.precision().is_infinite());
    }

    #[test]
    fn test_narrowed_accessors_round_to_f32() {
        assert_eq!(ELECTRON_MASS.value_as::<f32>(), 9.10938215e-31_f64 as f32);
        assert_eq!(ELECTRON_MASS.uncertainty_as::<f32>(), 4.5e-38_f64 as f32);
        assert_eq!(ELECTRON_MASS.value_as::<f64>(), ELECTRON_MASS.value());
    }

    #[test]
    fn test_precision_as_runs_in_the_narrow_type() {
        let expected = (4.5e-38_f64 as f32 / 9.10938215e-31_f64 as f32).abs();
        assert_eq!(ELECTRON_MASS.precision_as::<f32>(), expected);
        assert_eq!(ELECTRON_MASS.precision_as::<f64>(), ELECTRON_MASS.precision());
    }

    #[test]
    fn test_precision_as_f32_underflow_yields_nan() {
        // Both fields sit below the f32 subnormal floor, so the quotient is
        // 0.0 / 0.0 in f32 even though the f64 precision is well-defined.
        let tiny = PhysicalConstant::new(
            "atomic unit of 1st hyperpolarizability",
            3.206361533e-53,
            8.1e-61,
            "C^3 m^3 J^-2",
        );
        assert!(tiny.precision_as::<f32>().is_nan());
        assert!(tiny.precision_as::<f64>().is_finite());
    }

    #[test]
    fn test_display_matches_published_form() {
        assert_eq!(
            ELECTRON_MASS.to_string(),
            "electron mass = (9.10938215e-31 ± 4.5e-38) kg"
        );
        // Plain notation for moderate magnitudes, and no trailing unit for
        // dimensionless entries.
        let ratio = PhysicalConstant::new("electron g factor", -2.0023193043622, 1.5e-12, "");
        assert_eq!(ratio.to_string(), "electron g factor = (-2.0023193043622 ± 1.5e-12)");

        assert_eq!(
            SPEED_OF_LIGHT.to_string(),
            "speed of light in vacuum = (299792458 ± 0) m s^-1"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serializes_published_fields() {
        let v = serde_json::to_value(ELECTRON_MASS).unwrap();
        assert_eq!(v["name"], "electron mass");
        assert_eq!(v["value"], 9.10938215e-31);
        assert_eq!(v["uncertainty"], 4.5e-38);
        assert_eq!(v["unit"], "kg");
    }
}
