//! Vector quantities: torque, work and a projectile step.

use dimsafe::dimension::{Energy, Length};
use dimsafe::length::METER;
use dimsafe::mechanics::{JOULE, METERS_PER_SECOND, NEWTON};
use dimsafe::{qty, Quantity, Vector3};

fn main() {
    let lever = METER.of_xyz(0.5, 0.0, 0.0);
    let push = NEWTON.of_xyz(0.0, 20.0, 0.0);
    let torque = lever.cross(push);
    println!("torque: {} N·m", torque);

    let path = METER.of_xyz(3.0, 4.0, 0.0);
    let work: Quantity<Energy> = push.dot(path);
    println!("work along path: {} J", work.value_in(JOULE));

    let mut position: Quantity<Length, Vector3<f64>> = METER.of_xyz(0.0, 0.0, 0.0);
    let velocity = METERS_PER_SECOND.of_xyz(10.0, 0.0, 10.0);
    let dt = qty!(100_ms);
    for _ in 0..10 {
        position += velocity * dt;
    }
    println!("after 1 s: {} m ({} m from the origin)", position, position.norm());
}
