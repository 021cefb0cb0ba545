// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolve a declarative configuration schema from environment variables.
//!
//! An application describes the values it expects as a nested [`Schema`] of
//! typed properties with optional defaults. Resolution walks the schema,
//! derives an environment-variable name for every leaf from its dotted path
//! (`server.port` is read from `SERVER_PORT`), parses the raw text into the
//! declared type and falls back to the default when the variable is missing or
//! malformed. Every problem is collected, so one run reports all of them.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: schema and scalar types, the scalar parser, the fallback
//!   policy, errors and the `ConfigResolver` trait
//! - **Ports**: the `LookupSource` trait the resolver reads values through
//! - **Adapters**: lookup sources for the process environment and closures
//! - **Service**: the default resolver and its builder
//!
//! # Feature Flags
//!
//! - `env`: Enable the environment variable adapter (default)
//! - `typed`: Enable mapping a resolved configuration onto a caller type (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use envschema::prelude::*;
//! use envschema::service::resolve;
//!
//! let schema = Schema::new()
//!     .with_property("a", Property::number_or(5.0))
//!     .with_group("b", Schema::new().with_property("c", Property::boolean()));
//!
//! let config = resolve(&schema, |key: &str| {
//!     (key == "B_C").then(|| "false".to_string())
//! })
//! .unwrap();
//!
//! assert_eq!(config.get_f64("a").unwrap(), 5.0);
//! assert!(!config.get_bool("b.c").unwrap());
//! ```
//!
//! [`Schema`]: crate::domain::Schema

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        ConfigError, ConfigResolver, FallbackPolicy, Property, ResolveErrors, ResolvedConfig,
        Result, ScalarType, ScalarValue, Schema,
    };
    pub use crate::ports::LookupSource;
    pub use crate::service::{DefaultResolver, ResolverBuilder};

    // Re-export adapters based on feature flags
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarAdapter;
    pub use crate::adapters::FnAdapter;
}
