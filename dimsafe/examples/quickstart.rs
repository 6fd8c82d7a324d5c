//! Minimal end-to-end example: unit literals, composed dimensions and conversions.

use dimsafe::dimension::{Energy, Velocity};
use dimsafe::mechanics::{JOULE, KILOMETERS_PER_HOUR, KILOWATT_HOUR};
use dimsafe::{qty, Quantity};

fn main() {
    let d = qty!(42.195_km);
    let t = qty!(2_h + 1_min + 9_s);
    let pace: Quantity<Velocity> = d / t;
    println!("marathon record pace: {:.2} km/h", pace.value_in(KILOMETERS_PER_HOUR));

    let c = qty!(299_792_458_m_per_s);
    let e: Quantity<Energy> = qty!(1_g) * c * c;
    println!("rest energy of 1 g: {:.3e} J = {:.0} kWh", e.value_in(JOULE), e.value_in(KILOWATT_HOUR));

    let ratio: f64 = qty!(1_mi) / qty!(1_km);
    assert!((ratio - 1.609_344).abs() < 1e-12);
}
