//! Reading, editing and writing an SCL document without a fixed schema.
//!
//! Run with: RUST_LOG=serde_scl=trace cargo run --example dynamic_values

use serde_scl::{dumps_with_options, loads, SclOptions, Value};
use std::error::Error;
use tracing_subscriber::EnvFilter;

const SOURCE: &str = r#"
[ deployment settings ]
service :: str { "search" }
replicas :: num { 3 }
debug :: bool { no }
regions :: list(str) { "eu", "us" }
cache :: class {
    ttl :: fl { 30 }
    class :: str { "lru" }
}
"#;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = loads(SOURCE)?;

    if let Some(replicas) = tree.get("replicas").and_then(Value::as_i64) {
        println!("Accessing field 'replicas': {}", replicas);
    }

    if let Some(ttl) = tree.get("cache").and_then(|c| c.get("ttl")) {
        println!("Accessing field 'cache.ttl': {} ({})", ttl, ttl.type_name());
    }

    // Edit in place; new keys go to the end, existing keys keep their position
    tree.insert("replicas".to_string(), Value::from(5));
    tree.insert("owner".to_string(), Value::from("platform team"));
    if let Some(Value::List(regions)) = tree.get_mut("regions") {
        regions.push(Value::from("ap"));
    }

    println!("{}", dumps_with_options(&tree, SclOptions::new().with_indent(2))?);

    Ok(())
}
