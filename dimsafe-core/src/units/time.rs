//! Time units. The base unit is the second.
//!
//! Days are exactly `86 400 s` and the year is the Julian year of `365.25 d`.

use crate::dimension::Time;
use crate::unit::Unit;
use crate::units::prefix::{MICRO, MILLI, NANO};

crate::units! {
    /// Second (SI base unit).
    s => SECOND: Unit<Time> = Unit::scaled(1.0);
    /// Millisecond.
    ms => MILLISECOND: Unit<Time> = MILLI.times(SECOND);
    /// Microsecond.
    us => MICROSECOND: Unit<Time> = MICRO.times(SECOND);
    /// Nanosecond.
    ns => NANOSECOND: Unit<Time> = NANO.times(SECOND);
    /// Minute (`60 s`).
    min => MINUTE: Unit<Time> = SECOND.scaled_by(60.0);
    /// Hour (`60 min`).
    h => HOUR: Unit<Time> = MINUTE.scaled_by(60.0);
    /// Day (`24 h`).
    d => DAY: Unit<Time> = HOUR.scaled_by(24.0);
    /// Week (`7 d`).
    wk => WEEK: Unit<Time> = DAY.scaled_by(7.0);
    /// Julian year (`365.25 d`).
    yr => YEAR: Unit<Time> = DAY.scaled_by(365.25);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_ladder() {
        assert_eq!(DAY.factor(), 86_400.0);
        assert_eq!(YEAR.factor(), 31_557_600.0);
        assert_eq!(HOUR.of(1.5).value_in(MINUTE), 90.0);
        assert_eq!(WEEK.of(2.0).value_in(DAY), 14.0);
    }

    #[test]
    fn literals_match_constants() {
        assert_eq!(literals::h(2.0).value(), 7200.0);
        assert_eq!(literals::min(1.0), MINUTE.of(1.0));
    }
}
