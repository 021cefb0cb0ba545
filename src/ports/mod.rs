// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! The resolver depends only on these traits; adapters in the adapters layer
//! implement them for concrete value sources.

pub mod source;

pub use source::LookupSource;
