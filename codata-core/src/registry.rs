//! Name-indexed access to a constant table.
//!
//! A table crate exposes its entries twice: as `pub const` items for
//! compile-time use, and through a [`Registry`] for callers that select a
//! constant at run time (configuration files, notebooks, generic tooling).
//! The registry borrows the `'static` table (it never copies records) and
//! builds its name index lazily, on the first by-name access.

use std::collections::HashMap;

use once_cell::sync::OnceCell;

use crate::constant::PhysicalConstant;
use crate::errors::{ConstantError, ConstantResult};

/// A lookup view over a `'static` table of constants.
///
/// Construction is `const`, so a table crate can expose its registry as a
/// `static`. The name index is built once and shared by all threads; the
/// `OnceCell` synchronizes initialization, and everything else is immutable
/// data. Enumeration follows the table's publication order.
#[derive(Debug)]
pub struct Registry {
    entries: &'static [PhysicalConstant],
    index: OnceCell<HashMap<&'static str, usize>>,
}

impl Registry {
    /// Creates a registry over `entries`.
    ///
    /// Names must be unique within the table; a duplicate would shadow the
    /// earlier entry in by-name lookup.
    pub const fn new(entries: &'static [PhysicalConstant]) -> Self {
        Self {
            entries,
            index: OnceCell::new(),
        }
    }

    fn index(&self) -> &HashMap<&'static str, usize> {
        self.index.get_or_init(|| {
            self.entries
                .iter()
                .enumerate()
                .map(|(i, constant)| (constant.name(), i))
                .collect()
        })
    }

    /// Resolves a constant by its published name.
    ///
    /// Exact string match, case-sensitive, no normalization.
    pub fn get(&self, name: &str) -> Option<&'static PhysicalConstant> {
        self.index().get(name).map(|&i| &self.entries[i])
    }

    /// Like [`get`](Self::get), but error-typed for callers threading `?`.
    pub fn lookup(&self, name: &str) -> ConstantResult<&'static PhysicalConstant> {
        self.get(name)
            .ok_or_else(|| ConstantError::unknown_constant(name))
    }

    /// Iterates the entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'static PhysicalConstant> {
        self.entries.iter()
    }

    /// Iterates the published names in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|constant| constant.name())
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TABLE: [PhysicalConstant; 3] = [
        PhysicalConstant::new("speed of light in vacuum", 299792458.0, 0.0, "m s^-1"),
        PhysicalConstant::new("electron mass", 9.10938215e-31, 4.5e-38, "kg"),
        PhysicalConstant::new("electron g factor", -2.0023193043622, 1.5e-12, ""),
    ];

    static REGISTRY: Registry = Registry::new(&TABLE);

    #[test]
    fn test_get_resolves_published_names() {
        let c = REGISTRY.get("electron mass").expect("entry should resolve");
        assert_eq!(c.value(), 9.10938215e-31);
        assert_eq!(c, &TABLE[1]);
    }

    #[test]
    fn test_get_is_exact_match() {
        assert!(REGISTRY.get("Electron Mass").is_none());
        assert!(REGISTRY.get("electron mass ").is_none());
        assert!(REGISTRY.get("ELECTRON_MASS").is_none());
    }

    #[test]
    fn test_lookup_reports_the_failing_name() {
        let err = REGISTRY.lookup("positron mass").unwrap_err();
        assert_eq!(
            err,
            ConstantError::UnknownConstant {
                name: "positron mass".to_string()
            }
        );
    }

    #[test]
    fn test_iteration_follows_table_order() {
        let names: Vec<_> = REGISTRY.names().collect();
        assert_eq!(
            names,
            vec![
                "speed of light in vacuum",
                "electron mass",
                "electron g factor"
            ]
        );
        assert_eq!(REGISTRY.iter().count(), REGISTRY.len());
    }

    #[test]
    fn test_len_and_is_empty() {
        assert_eq!(REGISTRY.len(), 3);
        assert!(!REGISTRY.is_empty());

        static EMPTY: Registry = Registry::new(&[]);
        assert!(EMPTY.is_empty());
        assert!(EMPTY.get("anything").is_none());
    }
}
