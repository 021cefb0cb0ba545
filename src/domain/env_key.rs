// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lookup key newtype.
//!
//! An [`EnvKey`] is the environment-variable-style name a schema leaf is
//! looked up under. It is derived from the leaf's dotted path by
//! [`ConfigPath::env_key`](crate::domain::ConfigPath::env_key).

use std::fmt;

/// A type-safe wrapper for derived lookup keys.
///
/// # Examples
///
/// ```
/// use envschema::domain::EnvKey;
///
/// let key = EnvKey::from_dotted("db.pool.size");
/// assert_eq!(key.as_str(), "DB_POOL_SIZE");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnvKey(String);

impl EnvKey {
    /// Wraps an already-derived key without transforming it.
    pub fn new(key: impl Into<String>) -> Self {
        EnvKey(key.into())
    }

    /// Derives a key from a dotted path: every `.` becomes `_` and the result
    /// is upper-cased.
    pub fn from_dotted(path: &str) -> Self {
        EnvKey(path.replace('.', "_").to_uppercase())
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a new key with `prefix` prepended verbatim.
    pub fn with_prefix(&self, prefix: &str) -> Self {
        EnvKey(format!("{}{}", prefix, self.0))
    }

    /// Converts the key into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<EnvKey> for String {
    fn from(key: EnvKey) -> Self {
        key.0
    }
}

impl AsRef<str> for EnvKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnvKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
