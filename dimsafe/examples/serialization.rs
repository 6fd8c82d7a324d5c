//! Serializing quantities, with and without their dimension tag.
//!
//! ```bash
//! cargo run --example serialization --features serde
//! ```

#[cfg(feature = "serde")]
fn main() {
    use dimsafe::dimension::{Length, Mass};
    use dimsafe::{qty, Quantity};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Payload {
        #[serde(with = "dimsafe::serde_with_dimension")]
        mass: Quantity<Mass>,
        altitude: Quantity<Length>,
    }

    let payload = Payload {
        mass: qty!(1.2_t),
        altitude: qty!(35_786_km),
    };
    let json = serde_json::to_string_pretty(&payload).unwrap();
    println!("{json}");

    let back: Payload = serde_json::from_str(&json).unwrap();
    println!("{back:?}");

    let tampered = json.replace("[\n      0,\n      1,", "[\n      1,\n      0,");
    match serde_json::from_str::<Payload>(&tampered) {
        Ok(_) => println!("tampered payload accepted?"),
        Err(e) => println!("tampered payload rejected: {e}"),
    }
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serialization --features serde");
}
