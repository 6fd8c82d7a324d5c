//! Length units, plus the area and volume units built from them.
//!
//! The base unit is the metre. Definitions used here:
//!
//! - The international inch is exactly `0.0254 m`; foot, yard and mile follow from it.
//! - The nautical mile is exactly `1852 m`.
//! - The **astronomical unit** is exactly `149_597_870_700 m` (IAU 2012).
//! - The **light-year** is one Julian year (`365.25 d`) at `c = 299_792_458 m/s`.
//! - The **parsec** is `648000 / π` astronomical units.
//!
//! ```rust
//! use dimsafe_core::units::length::{AU, KILOMETER};
//!
//! assert_eq!(AU.of(1.0).value_in(KILOMETER), 149_597_870.7);
//! ```

use core::f64::consts::PI;

use crate::dimension::{Area, Length, Volume};
use crate::unit::Unit;
use crate::units::prefix::{CENTI, KILO, MICRO, MILLI, NANO};

const C: f64 = 299_792_458.0;
const JULIAN_YEAR: f64 = 365.25 * 86_400.0;

crate::units! {
    /// Metre (SI base unit).
    m => METER: Unit<Length> = Unit::scaled(1.0);
    /// Kilometre.
    km => KILOMETER: Unit<Length> = KILO.times(METER);
    /// Centimetre.
    cm => CENTIMETER: Unit<Length> = CENTI.times(METER);
    /// Millimetre.
    mm => MILLIMETER: Unit<Length> = MILLI.times(METER);
    /// Micrometre.
    um => MICROMETER: Unit<Length> = MICRO.times(METER);
    /// Nanometre.
    nm => NANOMETER: Unit<Length> = NANO.times(METER);

    /// International inch (`0.0254 m`).
    inch => INCH: Unit<Length> = Unit::scaled(0.0254);
    /// International foot (`12 in`).
    ft => FOOT: Unit<Length> = INCH.scaled_by(12.0);
    /// International yard (`3 ft`).
    yd => YARD: Unit<Length> = FOOT.scaled_by(3.0);
    /// Statute mile (`1760 yd`).
    mi => MILE: Unit<Length> = YARD.scaled_by(1760.0);
    /// Nautical mile (`1852 m`).
    nmi => NAUTICAL_MILE: Unit<Length> = Unit::scaled(1852.0);

    /// Astronomical unit.
    au => AU: Unit<Length> = Unit::scaled(149_597_870_700.0);
    /// Light-year.
    ly => LIGHT_YEAR: Unit<Length> = Unit::scaled(C * JULIAN_YEAR);
    /// Parsec.
    pc => PARSEC: Unit<Length> = AU.scaled_by(648_000.0 / PI);

    /// Square metre.
    m2 => SQUARE_METER: Unit<Area> = METER.squared();
    /// Square kilometre.
    km2 => SQUARE_KILOMETER: Unit<Area> = KILOMETER.squared();
    /// Hectare (`10⁴ m²`).
    ha => HECTARE: Unit<Area> = Unit::scaled(1e4);
    /// Cubic metre.
    m3 => CUBIC_METER: Unit<Volume> = METER.cubed();
    /// Litre (`1 dm³`).
    L => LITER: Unit<Volume> = Unit::scaled(1e-3);
    /// Millilitre.
    mL => MILLILITER: Unit<Volume> = MILLI.times(LITER);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn imperial_chain_is_exact() {
        assert_relative_eq!(FOOT.factor(), 0.3048, max_relative = 1e-15);
        assert_relative_eq!(YARD.factor(), 0.9144, max_relative = 1e-15);
        assert_relative_eq!(MILE.factor(), 1609.344, max_relative = 1e-15);
    }

    #[test]
    fn astronomical_lengths() {
        assert_eq!(LIGHT_YEAR.factor(), 9_460_730_472_580_800.0);
        assert_relative_eq!(PARSEC.factor(), 3.085_677_581_491_367e16, max_relative = 1e-12);
        assert_relative_eq!(PARSEC.of(1.0).value_in(LIGHT_YEAR), 3.261_563_777, max_relative = 1e-9);
    }

    #[test]
    fn areas_and_volumes() {
        assert_eq!(SQUARE_KILOMETER.of(1.0).value_in(HECTARE), 100.0);
        assert_relative_eq!(CUBIC_METER.of(1.0).value_in(LITER), 1000.0, max_relative = 1e-15);
        assert_relative_eq!(MILLILITER.factor(), 1e-6, max_relative = 1e-15);
    }

    #[test]
    fn literals_match_constants() {
        assert_eq!(literals::km(2.0), KILOMETER.of(2.0));
        assert_eq!(literals::inch(1.0).value(), 0.0254);
        assert_eq!(TABLE.len(), 20);
        assert_eq!(TABLE[0].symbol, "m");
    }
}
