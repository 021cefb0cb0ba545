// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing lookup source implementations.
//!
//! Each adapter implements the `LookupSource` port for one place values can
//! come from.

#[cfg(feature = "env")]
pub mod env_var;
pub mod fn_lookup;

// Re-export adapters based on feature flags
#[cfg(feature = "env")]
pub use env_var::EnvVarAdapter;
pub use fn_lookup::FnAdapter;
