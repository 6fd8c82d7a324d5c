//! Core engine for dimension-checked physical quantities.
//!
//! `dimsafe-core` encodes the physical dimension of every value in its type:
//!
//! - A *dimension* is a type-level vector of five integer exponents over length, mass, time,
//!   temperature and angle ([`Dim`](dimension::Dim)).
//! - A value of dimension `D` is a [`Quantity<D, V>`], stored in SI base units, with a scalar
//!   (`f32`, `f64`) or vector ([`Vector2`], [`Vector3`]) payload.
//! - A [`Unit`] converts raw numbers to quantities ([`Unit::of`]) and back ([`Unit::value_of`]).
//!
//! Most users should depend on `dimsafe` (the facade crate), which adds the `qty!` literal macro.
//!
//! # What this crate solves
//!
//! - Compile-time rejection of dimension errors: `length + time` does not type-check.
//! - Dimension composition through arithmetic: `length / time` *is* a velocity.
//! - Unit conversion as plain arithmetic, with no run-time unit tag.
//!
//! # What this crate does not try to solve
//!
//! - Exact or arbitrary-precision arithmetic (payloads are IEEE-754 floats).
//! - Non-SI unit systems as first-class storage; imperial units convert to SI on entry.
//! - Locale-aware formatting.
//!
//! # Quick start
//!
//! ```rust
//! use dimsafe_core::units::length::{KILOMETER, METER};
//! use dimsafe_core::units::mechanics::KILOMETERS_PER_HOUR;
//! use dimsafe_core::units::time::SECOND;
//!
//! let d = KILOMETER.of(1.0_f64) + METER.of(500.0);
//! let v = d / SECOND.of(60.0);
//! assert!((v.value_in(KILOMETERS_PER_HOUR) - 90.0).abs() < 1e-9);
//!
//! // Dimensionless results are plain numbers.
//! let ratio: f64 = d / METER.of(1.0);
//! assert_eq!(ratio, 1500.0);
//! ```
//!
//! Text input goes through the unit table:
//!
//! ```rust
//! use dimsafe_core::Quantity;
//! use dimsafe_core::dimension::Acceleration;
//!
//! let g: Quantity<Acceleration> = "9.81 m/s^2".parse().unwrap();
//! assert_eq!(g.value(), 9.81);
//! ```
//!
//! # Feature flags
//!
//! - `catalog` (default): load extra units from TOML ([`UnitRegistry::from_file`]).
//! - `serde`: `Serialize`/`Deserialize` for quantities (the base payload) and vectors, plus
//!   [`serde_with_dimension`].
//! - `nalgebra`: conversions between [`Vector2`]/[`Vector3`] and `nalgebra` vectors.
//!
//! # Panics and errors
//!
//! Arithmetic never panics and has no error path; NaN and infinities propagate as IEEE-754
//! prescribes. Parsing returns [`ParseQuantityError`]; catalog loading returns [`RegistryError`].
//! The crate logs through the `log` facade and never installs a logger.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

pub mod dimension;
pub mod error;
mod macros;
mod parse;
pub mod payload;
mod quantity;
pub mod registry;
pub mod unit;
mod vector;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{Dimension, Dimensionless, Exponents};
pub use error::{ParseQuantityError, RegistryError};
pub use payload::{Payload, Real, Vector2, Vector3, VectorPayload};
pub use quantity::{Quantity, Zero, ZERO};
pub use registry::UnitRegistry;
pub use unit::{Affine, Ratio, RatioKind, Scale, Unit, ONE};

#[cfg(feature = "serde")]
pub use quantity::serde_with_dimension;

/// Type-level integers used as dimension exponents.
pub use typenum;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined units (grouped by dimension).
pub mod units;

pub use units::literals;
pub use units::{angular, length, mass, mechanics, prefix, temperature, time};
