//! Error type for constant-table lookups.
//!
//! Reading a constant cannot fail: every accessor is total, and degenerate
//! floating-point results (`NaN`, `Inf`) are ordinary values, not errors.
//! The one fallible operation is resolving a constant by name, so the error
//! type has exactly one variant.
//!
//! ```
//! use codata_core::{ConstantResult, Registry};
//!
//! fn relative_precision(registry: &Registry, name: &str) -> ConstantResult<f64> {
//!     let constant = registry.lookup(name)?;
//!     Ok(constant.precision())
//! }
//! ```

use thiserror::Error;

/// Error raised when a by-name lookup does not match any table entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstantError {
    /// The requested name is not in the table.
    ///
    /// Lookup is exact-match on the published name string (`"electron
    /// mass"`, not an identifier). Not recoverable by retry; fix the name.
    #[error("unknown physical constant {name:?}")]
    UnknownConstant {
        /// The name that failed to resolve.
        name: String,
    },
}

/// Result type alias for fallible table operations.
pub type ConstantResult<T> = Result<T, ConstantError>;

impl ConstantError {
    /// Create an unknown-constant error for `name`.
    pub fn unknown_constant(name: &str) -> Self {
        Self::UnknownConstant {
            name: name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_constant_display() {
        let err = ConstantError::unknown_constant("speed of dark");
        assert_eq!(err.to_string(), "unknown physical constant \"speed of dark\"");
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<ConstantError>();
        _assert_sync::<ConstantError>();
    }
}
