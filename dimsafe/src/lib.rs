//! Compile-time dimension-checked physical quantities.
//!
//! `dimsafe` is the user-facing crate in this workspace. It re-exports the full API from `dimsafe-core` plus the
//! [`qty!`] literal macro from `dimsafe-macros`.
//!
//! The core idea is: a value is always a `Quantity<D, V>`, where `D` is a type-level list of exponents over length,
//! mass, time, temperature and angle, and `V` is the payload (`f64` by default, or `f32`, [`Vector2`], [`Vector3`]).
//! Values are stored in SI base units, so a quantity costs exactly as much as its payload.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to seconds).
//! - Derives dimensions through arithmetic (`length / time` is a velocity, `length / length` is a plain `f64`).
//! - Lets unit literals read like physics: `qty!(9.81_m_per_s2)`.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic: payloads are IEEE-754 floats.
//! - Remembering the unit a value was entered in; every quantity is in SI base units.
//! - Dimensions beyond length, mass, time, temperature and angle.
//!
//! # Quick start
//!
//! ```rust
//! use dimsafe::qty;
//! use dimsafe::units::mechanics::KILOMETERS_PER_HOUR;
//!
//! let d = qty!(1_km + 500_m);
//! let t = qty!(1_min);
//! let v = d / t;
//! assert!((v.value_in(KILOMETERS_PER_HOUR) - 90.0).abs() < 1e-9);
//! ```
//!
//! Composition stays in the type system:
//!
//! ```rust
//! use dimsafe::dimension::{Area, Energy};
//! use dimsafe::units::length::METER;
//! use dimsafe::{qty, Quantity};
//!
//! let a: Quantity<Area> = METER.of(2.0) * METER.of(3.0);
//! assert_eq!(a.value(), 6.0);
//!
//! let e: Quantity<Energy> = qty!(2_kg) * qty!(3_m_per_s) * qty!(3_m_per_s) / 2.0;
//! assert_eq!(e.value(), 9.0);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use dimsafe::units::length::METER;
//! use dimsafe::units::time::SECOND;
//!
//! let _ = METER.of(1.0) + SECOND.of(1.0); // cannot add a length to a time
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension (and re-exported at the crate root):
//!
//! - `dimsafe::length` (metres, imperial lengths, AU, light-year, areas, volumes)
//! - `dimsafe::mass` (grams, tonnes, pounds)
//! - `dimsafe::time` (seconds to Julian years)
//! - `dimsafe::temperature` (kelvin, Rankine, and the offset scales °C and °F)
//! - `dimsafe::angular` (radians, degrees, arc minutes and seconds, revolutions)
//! - `dimsafe::mechanics` (velocity, acceleration, force, energy, power, pressure, frequency)
//! - `dimsafe::literals` (every literal function; what `qty!` expands to)
//!
//! # Feature flags
//!
//! - `catalog` (default): load extra parser units from TOML files.
//! - `serde`: `Serialize`/`Deserialize` for `Quantity` (the base payload) and the vector payloads.
//! - `nalgebra`: conversions between the vector payloads and `nalgebra` vectors.
//!
//! # Panics and errors
//!
//! Arithmetic and conversions never panic and do not return `Result`; NaN and infinities propagate according to
//! IEEE-754. Text parsing returns [`ParseQuantityError`] and catalog loading returns [`RegistryError`].
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// `qty!` expands to `::dimsafe::literals::…`, which must also resolve inside this crate.
extern crate self as dimsafe;

pub use dimsafe_core::*;

/// Rewrites unit-suffixed numeric literals into quantities.
///
/// `qty!(3_km)` is a `Quantity<Length>` of 3000 m. See [`literals`] for the available suffixes.
pub use dimsafe_macros::qty;

#[cfg(test)]
mod tests {
    use crate::dimension::Length;
    use crate::{qty, Quantity};

    #[test]
    fn qty_resolves_inside_the_crate() {
        let d: Quantity<Length> = qty!(2_km);
        assert_eq!(d.value(), 2000.0);
    }
}
