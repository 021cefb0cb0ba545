// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lookup source trait definition.
//!
//! This module defines the `LookupSource` trait, the port through which the
//! resolver reads raw values. The process environment is one implementation;
//! tests and embedders can supply their own.

use crate::domain::{EnvKey, Result};

/// A key-value lookup the resolver reads leaf values from.
///
/// Lookups are synchronous and expected to be cheap; any caching or remote
/// access belongs to the implementation.
///
/// # Priority
///
/// When a resolver is given several sources they are queried from the highest
/// priority down, and the first source that has a value wins.
///
/// # Examples
///
/// ```rust
/// use envschema::domain::{EnvKey, Result};
/// use envschema::ports::LookupSource;
///
/// struct Fixed;
///
/// impl LookupSource for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn get(&self, key: &EnvKey) -> Result<Option<String>> {
///         Ok((key.as_str() == "SERVER_PORT").then(|| "8080".to_string()))
///     }
/// }
///
/// let source = Fixed;
/// assert_eq!(source.get_str("SERVER_PORT").unwrap().as_deref(), Some("8080"));
/// assert_eq!(source.get_str("OTHER").unwrap(), None);
/// ```
pub trait LookupSource: Send + Sync {
    /// Returns the name of this source, used in logs and errors.
    fn name(&self) -> &str;

    /// Returns the priority of this source. Higher values are queried first.
    fn priority(&self) -> u8 {
        1
    }

    /// Retrieves the raw value for a derived key.
    ///
    /// Returns `Ok(None)` when the key is absent and `Err` when the source
    /// itself failed to answer.
    fn get(&self, key: &EnvKey) -> Result<Option<String>>;

    /// Retrieves a value for a key given as a string slice, without deriving
    /// it from a path.
    fn get_str(&self, key: &str) -> Result<Option<String>> {
        self.get(&EnvKey::new(key))
    }
}
