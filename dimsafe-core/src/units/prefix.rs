//! SI prefixes as dimensionless scale units.
//!
//! A prefix only means something next to a unit, so prefixes have no literal symbol and no
//! parser row. Combine them with [`Unit::times`](crate::unit::Unit::times):
//!
//! ```rust
//! use dimsafe_core::units::length::METER;
//! use dimsafe_core::units::prefix::MICRO;
//!
//! assert_eq!(MICRO.times(METER).factor(), 1e-6);
//! ```

use crate::dimension::Dimensionless;
use crate::unit::Unit;

/// 10⁻¹²
pub const PICO: Unit<Dimensionless> = Unit::scaled(1e-12);
/// 10⁻⁹
pub const NANO: Unit<Dimensionless> = Unit::scaled(1e-9);
/// 10⁻⁶
pub const MICRO: Unit<Dimensionless> = Unit::scaled(1e-6);
/// 10⁻³
pub const MILLI: Unit<Dimensionless> = Unit::scaled(1e-3);
/// 10⁻²
pub const CENTI: Unit<Dimensionless> = Unit::scaled(1e-2);
/// 10⁻¹
pub const DECI: Unit<Dimensionless> = Unit::scaled(1e-1);
/// 10²
pub const HECTO: Unit<Dimensionless> = Unit::scaled(1e2);
/// 10³
pub const KILO: Unit<Dimensionless> = Unit::scaled(1e3);
/// 10⁶
pub const MEGA: Unit<Dimensionless> = Unit::scaled(1e6);
/// 10⁹
pub const GIGA: Unit<Dimensionless> = Unit::scaled(1e9);
