//! Plane-angle units. The base unit is the radian.
//!
//! Angle is kept as its own dimension, so an angular velocity (`rad/s`) is not a frequency
//! (`Hz`) and a torque is not an energy per radian by accident.

use core::f64::consts::{PI, TAU};

use crate::dimension::Angle;
use crate::unit::Unit;
use crate::units::prefix::MILLI;

crate::units! {
    /// Radian (base unit).
    rad => RADIAN: Unit<Angle> = Unit::scaled(1.0);
    /// Milliradian.
    mrad => MILLIRADIAN: Unit<Angle> = MILLI.times(RADIAN);
    /// Degree (`π/180 rad`).
    deg => DEGREE: Unit<Angle> = Unit::scaled(PI / 180.0);
    /// Arcminute (`1/60 °`).
    arcmin => ARCMINUTE: Unit<Angle> = DEGREE.scaled_by(1.0 / 60.0);
    /// Arcsecond (`1/60 ′`).
    arcsec => ARCSECOND: Unit<Angle> = ARCMINUTE.scaled_by(1.0 / 60.0);
    /// Full turn (`2π rad`).
    rev => REVOLUTION: Unit<Angle> = Unit::scaled(TAU);
}
