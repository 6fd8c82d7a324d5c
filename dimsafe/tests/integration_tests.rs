//! Integration-level tests for the `dimsafe` facade crate.

use dimsafe::dimension::{
    Acceleration, Area, Dimensionless, Energy, Force, Length, Power, Temperature, Time, Velocity,
    Volume,
};
use dimsafe::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;

#[test]
fn literal_units_agree() {
    assert_eq!(qty!(1_km), qty!(1000_m));
    assert_eq!(qty!(1_Mach), qty!(330_m_per_s));
    assert_eq!(qty!(2_h), qty!(120_min));
    assert_eq!(qty!(1_t), qty!(1000_kg));
    assert_abs_diff_eq!(qty!(1_ft).value(), qty!(12_inch).value(), epsilon = 1e-15);
}

#[test]
fn literal_expressions() {
    let d: Quantity<Length> = qty!(1_km + 250_m - 50_m);
    assert_eq!(d.value(), 1200.0);

    let a: Quantity<Area> = qty!(2_m * 3_m);
    assert_eq!(a, length::SQUARE_METER.of(6.0));

    let f: Quantity<Force> = qty!(2_kg * 9.81_m_per_s2);
    assert_relative_eq!(f.value_in(mechanics::NEWTON), 19.62);

    let v = qty!(-(3_km / 2_min));
    assert_relative_eq!(v.value(), -25.0);
}

#[test]
fn unit_products_compose() {
    let a = length::METER.of(1.0) * length::METER.of(2.0);
    assert_eq!(a, length::SQUARE_METER.of(2.0));

    let vol: Quantity<Volume> = qty!(1_m) * qty!(1_m) * qty!(1_m);
    assert_relative_eq!(vol.value_in(length::LITER), 1000.0);

    let p: Quantity<Power> = qty!(3_kJ) / qty!(1_min);
    assert_relative_eq!(p.value_in(mechanics::WATT), 50.0);
}

#[test]
fn mass_energy_equivalence() {
    let c = qty!(299_792_458_m_per_s);
    let e: Quantity<Energy> = qty!(1_kg) * c * c;
    assert_relative_eq!(e.value_in(mechanics::JOULE), 8.987_551_787_368_176e16);
}

#[test]
fn temperature_offsets() {
    use temperature::{CELSIUS, FAHRENHEIT, KELVIN};

    let freezing: Quantity<Temperature> = CELSIUS.of(0.0);
    assert_abs_diff_eq!(KELVIN.value_of(freezing), 273.15, epsilon = 1e-12);
    assert_abs_diff_eq!(CELSIUS.value_of(KELVIN.of(273.15)), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(FAHRENHEIT.value_of(freezing), 32.0, epsilon = 1e-9);
    assert_abs_diff_eq!(
        CELSIUS.value_of(qty!(212_degF)),
        100.0,
        epsilon = 1e-9
    );
}

#[test]
fn dimensionless_results_are_plain_numbers() {
    let ratio: f64 = qty!(1_km) / qty!(250_m);
    assert_eq!(ratio, 4.0);

    let cycles: f64 = qty!(3_kHz) * qty!(2_s);
    assert_relative_eq!(cycles, 6000.0);

    let q: Quantity<Dimensionless> = 0.5_f64.into();
    assert_eq!(f64::from(q), 0.5);
}

#[test]
fn scalar_on_the_left() {
    let t: Quantity<Time> = 3.0_f64 * qty!(20_s);
    assert_eq!(t.value(), 60.0);

    let hz = 2.0_f64 / qty!(4_s);
    assert_eq!(hz, mechanics::HERTZ.of(0.5));
}

#[test]
fn zero_sentinel() {
    let d = qty!(5_m);
    assert_eq!(d + ZERO, d);
    assert!(d > ZERO);
    assert!(-d < ZERO);
    assert_eq!(Quantity::<Velocity>::zero(), ZERO);
}

#[test]
fn roots_and_powers() {
    let side: Quantity<Length> = length::SQUARE_METER.of(16.0).sqrt();
    assert_eq!(side.value(), 4.0);

    let edge: Quantity<Length> = length::LITER.of(1.0).cbrt();
    assert_relative_eq!(edge.value_in(length::CENTIMETER), 10.0, max_relative = 1e-12);

    let v: Quantity<Volume> = qty!(2_m).pow::<typenum::P3>();
    assert_eq!(v.value(), 8.0);
}

#[test]
fn text_round_trip() {
    let g: Quantity<Acceleration> = "9.81 m/s^2".parse().unwrap();
    assert_eq!(g, qty!(9.81_m_per_s2));

    let v: Quantity<Velocity> = "72 km/h".parse().unwrap();
    assert_relative_eq!(v.value(), 20.0, max_relative = 1e-12);

    let t: Quantity<Temperature> = "25 °C".parse().unwrap();
    assert_relative_eq!(t.value(), 298.15);

    let err = "3 kg".parse::<Quantity<Length>>().unwrap_err();
    assert!(matches!(err, ParseQuantityError::DimensionMismatch { .. }));
    assert_eq!(
        "3 parsnips".parse::<Quantity<Length>>().unwrap_err(),
        ParseQuantityError::UnknownUnit("parsnips".into())
    );
}

#[test]
fn f32_payloads() {
    let d = length::KILOMETER.of(1.5_f32);
    let t = time::SECOND.of(3.0_f32);
    let v: Quantity<Velocity, f32> = d / t;
    assert_eq!(v.value(), 500.0_f32);

    let wide: Quantity<Velocity> = v.into();
    assert_eq!(wide.value(), 500.0);
}

#[test]
fn vector_quantities() {
    let r = length::METER.of_xyz(3.0, 0.0, 4.0);
    assert_eq!(r.norm(), qty!(5_m));

    let f = mechanics::NEWTON.of_xyz(0.0, 2.0, 0.0);
    let torque = r.cross(f);
    assert_eq!(torque.value(), Vector3::new(-8.0, 0.0, 6.0));

    let work: Quantity<Energy> = f.dot(length::METER.of_xyz(1.0, 3.0, 0.0));
    assert_eq!(work.value_in(mechanics::JOULE), 6.0);

    let v = r / qty!(2_s);
    assert_eq!(v.value(), Vector3::new(1.5, 0.0, 2.0));
    assert_eq!(v.z(), qty!(2_m_per_s));

    let planar = length::KILOMETER.of_xy(1.0, 1.0);
    assert_relative_eq!(
        planar.distance(length::METER.of_xy(0.0, 0.0)).value(),
        1000.0 * 2.0_f64.sqrt(),
        max_relative = 1e-12
    );
}

#[test]
fn sums_of_quantities() {
    let legs = [qty!(1_km), qty!(500_m), qty!(250_m)];
    let total: Quantity<Length> = legs.iter().sum();
    assert_eq!(total, qty!(1750_m));
}

#[test]
fn custom_unit_registry() {
    let mut registry = UnitRegistry::builtin();
    registry.define("furlong", "201.168 m").unwrap();
    registry.define("fortnight", "14 d").unwrap();

    let speed: Quantity<Velocity> = registry.parse_quantity("1 furlong/fortnight").unwrap();
    assert_relative_eq!(speed.value(), 201.168 / 1_209_600.0, max_relative = 1e-12);

    assert!(matches!(
        registry.define("m", "1 km"),
        Err(RegistryError::DuplicateSymbol(_))
    ));
}

proptest! {
    #[test]
    fn conversions_round_trip(x in -1e9_f64..1e9) {
        let q = length::MILE.of(x);
        prop_assert!((length::MILE.value_of(q) - x).abs() <= 1e-9 * x.abs().max(1.0));
    }

    #[test]
    fn addition_commutes(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
        prop_assert_eq!(qty!(1_m) * a + qty!(1_km) * b, qty!(1_km) * b + qty!(1_m) * a);
    }

    #[test]
    fn velocity_times_time_is_length(v in 0.0_f64..1e4, t in 0.0_f64..1e4) {
        let d: Quantity<Length> = mechanics::METERS_PER_SECOND.of(v) * time::SECOND.of(t);
        prop_assert_eq!(d.value(), v * t);
    }

    #[test]
    fn celsius_round_trip(c in -273.15_f64..1e4) {
        let k = temperature::CELSIUS.of(c);
        prop_assert!((temperature::CELSIUS.value_of(k) - c).abs() <= 1e-9);
    }
}
