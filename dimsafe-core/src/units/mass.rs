//! Mass units. The base unit is the kilogram.

use crate::dimension::Mass;
use crate::unit::Unit;
use crate::units::prefix::{KILO, MILLI};

crate::units! {
    /// Kilogram (SI base unit).
    kg => KILOGRAM: Unit<Mass> = Unit::scaled(1.0);
    /// Gram.
    g => GRAM: Unit<Mass> = Unit::scaled(1e-3);
    /// Milligram.
    mg => MILLIGRAM: Unit<Mass> = MILLI.times(GRAM);
    /// Tonne (`1000 kg`).
    t => TONNE: Unit<Mass> = KILO.times(KILOGRAM);
    /// International avoirdupois pound (`0.45359237 kg`).
    lb => POUND: Unit<Mass> = Unit::scaled(0.453_592_37);
    /// Avoirdupois ounce (`1/16 lb`).
    oz => OUNCE: Unit<Mass> = POUND.scaled_by(1.0 / 16.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn conversions() {
        assert_eq!(TONNE.of(1.5).value_in(KILOGRAM), 1500.0);
        assert_relative_eq!(POUND.of(1.0).value_in(OUNCE), 16.0, max_relative = 1e-15);
        assert_relative_eq!(MILLIGRAM.of(250.0).value(), 2.5e-4, max_relative = 1e-15);
        assert_eq!(literals::g(500.0), GRAM.of(500.0));
    }
}
