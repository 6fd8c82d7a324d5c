//! Extending the text parser with units from a TOML catalog.
//!
//! ```bash
//! cargo run --example catalog
//! ```

#[cfg(feature = "catalog")]
fn main() {
    use dimsafe::dimension::{Length, Velocity};
    use dimsafe::{Quantity, UnitRegistry};

    let registry = UnitRegistry::from_toml_str(
        r#"
        [[unit]]
        symbol = "furlong"
        definition = "201.168 m"

        [[unit]]
        symbol = "fortnight"
        definition = "14 d"

        [[unit]]
        symbol = "smoot"
        factor = 1.7018
        dimension = [1, 0, 0, 0, 0]
        "#,
    )
    .unwrap();

    let bridge: Quantity<Length> = registry.parse_quantity("364.4 smoot").unwrap();
    println!("Harvard Bridge: {:.1} m", bridge.value());

    let creep: Quantity<Velocity> = registry.parse_quantity("1 furlong/fortnight").unwrap();
    println!("1 furlong per fortnight = {:.3e} m/s", creep.value());

    match registry.parse_quantity::<Length, f64>("3 furlong/h") {
        Ok(q) => println!("unexpected: {q}"),
        Err(e) => println!("rejected as expected: {e}"),
    }
}

#[cfg(not(feature = "catalog"))]
fn main() {
    println!("This example requires the 'catalog' feature.");
}
