// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the resolver implementation.
//!
//! This module contains the concrete implementation of the `ConfigResolver`
//! trait and the `resolve` shorthand.

pub mod default_resolver;

// Re-export commonly used types
pub use default_resolver::{resolve, DefaultResolver, ResolverBuilder};
