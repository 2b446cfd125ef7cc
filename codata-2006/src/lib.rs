//! CODATA 2006 recommended values of the fundamental physical constants.
//!
//! A strongly-typed rendition of the 2006 table published by the Committee
//! on Data (CODATA) of the International Science Council: 326 entries, each
//! a [`PhysicalConstant`] carrying the published nominal value, standard
//! uncertainty, and unit, with the relative precision derived on demand.
//! There is no I/O and no state: every query is a pure read of `'static`
//! literals, safe from any number of threads.
//!
//! # Quick Start
//!
//! ```
//! use codata_2006::{ELECTRON_MASS, SPEED_OF_LIGHT_IN_VACUUM};
//!
//! // Typed access through the generated constants.
//! assert_eq!(SPEED_OF_LIGHT_IN_VACUUM.value(), 299792458.0);
//! assert!(SPEED_OF_LIGHT_IN_VACUUM.is_exact());
//!
//! // Relative precision is derived from value and uncertainty, never stored.
//! assert!(ELECTRON_MASS.precision() < 1e-7);
//!
//! // By-name lookup against the published name strings.
//! let g = codata_2006::get("Newtonian constant of gravitation").unwrap();
//! assert_eq!(g.unit(), "m^3 kg^-1 s^-2");
//! ```
//!
//! # Representations
//!
//! Accessors parameterized over [`Real`] read a constant in the caller's
//! own floating-point type. Narrowing uses that type's rounding, and the
//! derived precision is computed entirely in that type, not computed wide
//! and narrowed after:
//!
//! ```
//! use codata_2006::ELECTRON_MASS;
//!
//! let coarse: f32 = ELECTRON_MASS.value_as::<f32>();
//! assert_eq!(coarse, ELECTRON_MASS.value() as f32);
//! ```
//!
//! # Data provenance
//!
//! Values are transcribed from the NIST machine-readable table
//! (<https://physics.nist.gov/cuu/Constants/Table/allascii.txt>, 2006
//! revision) and carried verbatim: entries are independent records, exactly
//! as published, including the handful that are exact by definition.

pub mod constants;

pub use codata_core::{ConstantError, ConstantResult, PhysicalConstant, Real, Registry};
pub use constants::*;

/// Name-indexed registry over [`constants::ALL`].
pub static REGISTRY: Registry = Registry::new(&constants::ALL);

/// Resolves a constant by its published CODATA name.
///
/// ```
/// let c = codata_2006::get("electron mass").unwrap();
/// assert_eq!(c.value(), 9.10938215e-31);
/// ```
pub fn get(name: &str) -> Option<&'static PhysicalConstant> {
    REGISTRY.get(name)
}

/// Error-typed lookup, for callers threading `?`.
///
/// ```
/// use codata_2006::ConstantResult;
///
/// fn precision_of(name: &str) -> ConstantResult<f64> {
///     Ok(codata_2006::lookup(name)?.precision())
/// }
///
/// assert!(precision_of("electron mass").is_ok());
/// assert!(precision_of("electron Mass").is_err());
/// ```
pub fn lookup(name: &str) -> ConstantResult<&'static PhysicalConstant> {
    REGISTRY.lookup(name)
}

/// Iterates all 326 entries in publication order.
pub fn all() -> impl Iterator<Item = &'static PhysicalConstant> {
    REGISTRY.iter()
}
