// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolver trait definition.
//!
//! This module defines the `ConfigResolver` trait, the main interface for
//! turning a [`Schema`] into a [`ResolvedConfig`].

use crate::domain::{ResolveErrors, ResolvedConfig, Schema};

/// The main resolution trait.
///
/// Implementations must attempt every leaf and report all failures together
/// rather than stopping at the first one.
///
/// # Examples
///
/// ```rust
/// use envschema::domain::{ConfigResolver, ResolveErrors, ResolvedConfig, Schema};
///
/// struct EmptyResolver;
///
/// impl ConfigResolver for EmptyResolver {
///     fn resolve(&self, _schema: &Schema) -> Result<ResolvedConfig, ResolveErrors> {
///         Ok(ResolvedConfig::new())
///     }
/// }
///
/// let config = EmptyResolver.resolve(&Schema::new()).unwrap();
/// assert!(config.is_empty());
/// ```
pub trait ConfigResolver {
    /// Resolves every leaf of `schema`.
    ///
    /// # Returns
    ///
    /// * `Ok(ResolvedConfig)` - Every leaf received a value
    /// * `Err(ResolveErrors)` - At least one leaf could not be resolved; the
    ///   set lists every such leaf
    fn resolve(&self, schema: &Schema) -> Result<ResolvedConfig, ResolveErrors>;
}
