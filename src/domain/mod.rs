// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and logic.
//!
//! Schema and scalar types, the scalar parser, the fallback policy and the
//! resolver trait live here. Nothing in this layer touches the process
//! environment.

pub mod config_path;
pub mod env_key;
pub mod errors;
pub mod policy;
pub mod resolved;
pub mod scalar;
pub mod scalar_parser;
pub mod schema;
pub mod service;

// Re-export commonly used types
pub use config_path::ConfigPath;
pub use env_key::EnvKey;
pub use errors::{ConfigError, ResolveErrors, Result};
pub use policy::FallbackPolicy;
pub use resolved::{ResolvedConfig, ResolvedNode};
pub use scalar::{RawValue, ScalarType, ScalarValue};
pub use scalar_parser::{parse_boolean, parse_number, parse_scalar, parse_string};
pub use schema::{Property, Schema, SchemaNode};
pub use service::ConfigResolver;
