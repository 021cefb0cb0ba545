// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for envschema.
//!
//! This example demonstrates:
//! - Declaring a nested schema with defaults
//! - Resolving it from the process environment
//! - Reading values by dotted path
//! - Reporting every unresolvable variable at once
//!
//! To run this example:
//! ```bash
//! export SERVER_PORT="9000"
//! export DB_POOL_SIZE="16"
//! export DEBUG="true"
//! export DB_URL="postgres://localhost/app"
//!
//! cargo run --example basic_usage
//! ```

use envschema::prelude::*;

fn main() -> std::result::Result<(), ResolveErrors> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== envschema: Basic Usage ===\n");

    let schema = Schema::new()
        .with_group(
            "server",
            Schema::new()
                .with_property("host", Property::string_or("0.0.0.0"))
                .with_property("port", Property::number_or(8080.0)),
        )
        .with_group(
            "db",
            Schema::new()
                .with_property("url", Property::string())
                .with_group("pool", Schema::new().with_property("size", Property::number_or(4.0))),
        )
        .with_property("debug", Property::boolean_or(false));

    for (path, property) in schema.leaves() {
        println!(
            "{:<14} {:<8} read from {}",
            path.to_string(),
            property.scalar_type().to_string(),
            path.env_key()
        );
    }

    let config = match DefaultResolver::from_env().resolve(&schema) {
        Ok(config) => config,
        Err(errors) => {
            println!("\n{}", errors);
            println!("\nTip: export the variables listed above and run again.");
            return Err(errors);
        }
    };

    println!("\n--- Resolved values ---");
    if let (Ok(host), Ok(port)) = (config.get_str("server.host"), config.get_f64("server.port")) {
        println!("server: {}:{}", host, port);
    }
    if let Ok(url) = config.get_str("db.url") {
        println!("db.url: {}", url);
    }
    if let Ok(size) = config.get_f64("db.pool.size") {
        println!("db.pool.size: {}", size);
    }
    if let Ok(debug) = config.get_bool("debug") {
        println!("debug: {}", debug);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
