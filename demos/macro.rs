//! Building configuration trees with the scl! macro.
//!
//! Run with: cargo run --example macro

use serde_scl::{dumps, scl, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = scl!({
        "name": "gateway",
        "port": 8080,
        "ratio": 0.75,
        "hosts": ["a.local", "b.local"],
        "limits": {
            "burst": 20,
            "strict": false
        },
        "motd": "Welcome.\nBe nice."
    });

    if let Value::Class(tree) = &config {
        println!("{}", dumps(tree)?);
    }

    // Lists must be homogeneous to be written out.
    let broken = scl!({ "mixed": [1, "two"] });
    if let Value::Class(tree) = &broken {
        match dumps(tree) {
            Ok(_) => println!("unexpected success"),
            Err(e) => println!("✓ Rejected: {}", e),
        }
    }

    Ok(())
}
