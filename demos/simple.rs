//! Basic SCL serialization and deserialization.
//!
//! Run with: cargo run --example simple

use serde::{Deserialize, Serialize};
use serde_scl::{from_str, to_string};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Database {
    host: String,
    port: u16,
    pool_size: u32,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Service {
    name: String,
    replicas: Vec<String>,
    load_factor: f64,
    database: Database,
}

fn main() -> Result<(), Box<dyn Error>> {
    let service = Service {
        name: "billing".to_string(),
        replicas: vec!["eu-1".to_string(), "us-2".to_string()],
        load_factor: 0.8,
        database: Database {
            host: "db.internal".to_string(),
            port: 5432,
            pool_size: 16,
        },
    };

    // Serialize to SCL
    let scl = to_string(&service)?;
    println!("SCL output:\n{}", scl);

    // Deserialize back to struct
    let service_back: Service = from_str(&scl)?;
    assert_eq!(service, service_back);
    println!("✓ Round-trip successful");

    Ok(())
}
