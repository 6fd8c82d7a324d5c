//! Built-in units, grouped by dimension.
//!
//! Every module declares its units with [`units!`](crate::units!), which also yields its
//! `literals` functions and its parser `TABLE`. This module gathers them:
//!
//! - [`literals`] re-exports every literal function, which is what `qty!` expands to.
//! - [`TABLES`] and [`ALIASES`] seed [`UnitRegistry::builtin`](crate::registry::UnitRegistry::builtin).

use crate::registry::UnitRow;

pub mod angular;
pub mod length;
pub mod mass;
pub mod mechanics;
pub mod prefix;
pub mod temperature;
pub mod time;

/// Every literal function of the built-in units.
///
/// ```rust
/// use dimsafe_core::units::literals::{km, m};
///
/// assert_eq!(km(1.0), m(1000.0));
/// ```
pub mod literals {
    pub use super::angular::literals::*;
    pub use super::length::literals::*;
    pub use super::mass::literals::*;
    pub use super::mechanics::literals::*;
    pub use super::temperature::literals::*;
    pub use super::time::literals::*;
}

/// Parser rows of every built-in unit module.
pub const TABLES: &[&[UnitRow]] = &[
    length::TABLE,
    mass::TABLE,
    time::TABLE,
    temperature::TABLE,
    angular::TABLE,
    mechanics::TABLE,
];

/// Extra parser spellings, `(alias, symbol)`.
///
/// Aliases cover symbols that are not Rust identifiers (`in`, `°C`, `µm`).
pub const ALIASES: &[(&str, &str)] = &[
    ("in", "inch"),
    ("µm", "um"),
    ("μm", "um"),
    ("µs", "us"),
    ("μs", "us"),
    ("l", "L"),
    ("ml", "mL"),
    ("°C", "degC"),
    ("°F", "degF"),
    ("°R", "degR"),
    ("°", "deg"),
    ("kph", "km_per_h"),
    ("kt", "kn"),
];
