//! Derived mechanical units: kinematics, force, energy, power, pressure, frequency.
//!
//! Most entries are built from the base units with const composition, so a factor such as
//! `km/h = 1000/3600` is computed rather than copied.
//!
//! ```rust
//! use dimsafe_core::units::mechanics::{JOULE, KILOWATT_HOUR};
//!
//! assert_eq!(KILOWATT_HOUR.of(1.0).value_in(JOULE), 3.6e6);
//! ```

use core::f64::consts::TAU;

use crate::dimension::{
    Acceleration, AngularVelocity, Density, Energy, Force, Frequency, Power, Pressure, Velocity,
};
use crate::units::angular::RADIAN;
use crate::units::length::{KILOMETER, METER, MILE, NAUTICAL_MILE};
use crate::units::mass::KILOGRAM;
use crate::units::prefix::KILO;
use crate::units::time::{HOUR, MINUTE, SECOND};

crate::units! {
    /// Metre per second.
    m_per_s => METERS_PER_SECOND: Unit<Velocity> = METER.per(SECOND);
    /// Kilometre per hour.
    km_per_h => KILOMETERS_PER_HOUR: Unit<Velocity> = KILOMETER.per(HOUR);
    /// Mile per hour.
    mph => MILES_PER_HOUR: Unit<Velocity> = MILE.per(HOUR);
    /// Knot (one nautical mile per hour).
    kn => KNOT: Unit<Velocity> = NAUTICAL_MILE.per(HOUR);
    /// Mach number taken as a fixed speed of sound, `330 m/s`.
    Mach => MACH: Unit<Velocity> = METERS_PER_SECOND.scaled_by(330.0);

    /// Metre per second squared.
    m_per_s2 => METERS_PER_SECOND_SQUARED: Unit<Acceleration> = METERS_PER_SECOND.per(SECOND);
    /// Standard gravity, `9.80665 m/s²`.
    gn => STANDARD_GRAVITY: Unit<Acceleration> = METERS_PER_SECOND_SQUARED.scaled_by(9.806_65);

    /// Newton.
    N => NEWTON: Unit<Force> = KILOGRAM.times(METERS_PER_SECOND_SQUARED);
    /// Kilonewton.
    kN => KILONEWTON: Unit<Force> = KILO.times(NEWTON);

    /// Joule.
    J => JOULE: Unit<Energy> = NEWTON.times(METER);
    /// Kilojoule.
    kJ => KILOJOULE: Unit<Energy> = KILO.times(JOULE);
    /// Thermochemical calorie (`4.184 J`).
    cal => CALORIE: Unit<Energy> = JOULE.scaled_by(4.184);
    /// Kilocalorie.
    kcal => KILOCALORIE: Unit<Energy> = KILO.times(CALORIE);

    /// Watt.
    W => WATT: Unit<Power> = JOULE.per(SECOND);
    /// Kilowatt.
    kW => KILOWATT: Unit<Power> = KILO.times(WATT);
    /// Kilowatt-hour.
    kWh => KILOWATT_HOUR: Unit<Energy> = KILOWATT.times(HOUR);

    /// Pascal.
    Pa => PASCAL: Unit<Pressure> = NEWTON.per(METER.squared());
    /// Kilopascal.
    kPa => KILOPASCAL: Unit<Pressure> = KILO.times(PASCAL);
    /// Bar (`10⁵ Pa`).
    bar => BAR: Unit<Pressure> = PASCAL.scaled_by(1e5);
    /// Standard atmosphere (`101 325 Pa`).
    atm => ATMOSPHERE: Unit<Pressure> = PASCAL.scaled_by(101_325.0);

    /// Hertz.
    Hz => HERTZ: Unit<Frequency> = SECOND.inverse();
    /// Kilohertz.
    kHz => KILOHERTZ: Unit<Frequency> = KILO.times(HERTZ);

    /// Radian per second.
    rad_per_s => RADIANS_PER_SECOND: Unit<AngularVelocity> = RADIAN.per(SECOND);
    /// Revolution per minute.
    rpm => REVOLUTIONS_PER_MINUTE: Unit<AngularVelocity> = RADIAN.scaled_by(TAU).per(MINUTE);

    /// Kilogram per cubic metre.
    kg_per_m3 => KILOGRAMS_PER_CUBIC_METER: Unit<Density> = KILOGRAM.per(METER.cubed());
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn speeds() {
        assert_relative_eq!(KILOMETERS_PER_HOUR.of(36.0).value(), 10.0, max_relative = 1e-15);
        assert_relative_eq!(KNOT.factor(), 1852.0 / 3600.0, max_relative = 1e-15);
        assert_relative_eq!(MILES_PER_HOUR.of(1.0).value_in(KILOMETERS_PER_HOUR), 1.609_344, max_relative = 1e-12);
        assert_eq!(MACH.of(1.0), METERS_PER_SECOND.of(330.0));
    }

    #[test]
    fn derived_units_are_coherent() {
        assert_eq!(NEWTON.factor(), 1.0);
        assert_eq!(JOULE.factor(), 1.0);
        assert_eq!(WATT.factor(), 1.0);
        assert_eq!(PASCAL.factor(), 1.0);
        assert_eq!(HERTZ.factor(), 1.0);
        assert_relative_eq!(BAR.of(1.0).value_in(KILOPASCAL), 100.0, max_relative = 1e-15);
    }

    #[test]
    fn work_is_force_times_distance() {
        let w = NEWTON.of(10.0) * METER.of(3.0);
        assert_eq!(w, JOULE.of(30.0));
        let p = w / SECOND.of(2.0);
        assert_eq!(p, WATT.of(15.0));
    }

    #[test]
    fn rotation() {
        assert_relative_eq!(REVOLUTIONS_PER_MINUTE.of(60.0).value(), TAU, max_relative = 1e-15);
        assert_eq!(literals::rad_per_s(2.0), RADIANS_PER_SECOND.of(2.0));
    }
}
