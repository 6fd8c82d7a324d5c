//! Temperature units. The base unit is the kelvin.
//!
//! Celsius and Fahrenheit carry an offset, so they are [`Affine`] units: they convert single
//! readings but cannot be multiplied into compound units. A temperature *difference* in
//! degrees Celsius is a difference in kelvin.
//!
//! ```rust
//! use dimsafe_core::units::temperature::{CELSIUS, FAHRENHEIT, KELVIN};
//!
//! let boiling = CELSIUS.of(100.0_f64);
//! assert!((boiling.value_in(KELVIN) - 373.15).abs() < 1e-9);
//! assert!((boiling.value_in(FAHRENHEIT) - 212.0).abs() < 1e-9);
//! ```

use crate::dimension::Temperature;
use crate::unit::{Affine, Unit};

crate::units! {
    /// Kelvin (SI base unit).
    K => KELVIN: Unit<Temperature> = Unit::scaled(1.0);
    /// Degree Celsius, `K = °C + 273.15`.
    degC => CELSIUS: Unit<Temperature, Affine> = Unit::affine(273.15, 1.0);
    /// Degree Fahrenheit, `K = (°F + 459.67) × 5/9`.
    degF => FAHRENHEIT: Unit<Temperature, Affine> = Unit::affine(459.67, 5.0 / 9.0);
    /// Degree Rankine, `K = °R × 5/9`.
    degR => RANKINE: Unit<Temperature> = Unit::scaled(5.0 / 9.0);
}
