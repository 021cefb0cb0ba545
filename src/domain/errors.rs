// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for schema resolution.
//!
//! Single failures are reported as [`ConfigError`]. A resolution pass collects
//! every failing leaf into a [`ResolveErrors`] so an operator sees all missing
//! or malformed variables at once.

use crate::domain::scalar::ScalarType;
use std::fmt;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// Marked `#[non_exhaustive]` so new failure modes can be added without
/// breaking downstream matches.
///
/// # Examples
///
/// ```
/// use envschema::domain::{ConfigError, ScalarType};
///
/// let error = ConfigError::UnresolvableLeaf {
///     key: "SERVER_PORT".to_string(),
///     expected: ScalarType::Number,
///     message: "variable is not set and no default is declared".to_string(),
/// };
/// assert!(error.to_string().contains("SERVER_PORT"));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A schema leaf could not be given a value: the lookup was absent or
    /// malformed and the property declares no default.
    #[error("Failed to read '{key}' as {expected}: {message}")]
    UnresolvableLeaf {
        /// The derived lookup key, e.g. `SERVER_PORT`
        key: String,
        /// The scalar type the property declares
        expected: ScalarType,
        /// Human-readable reason
        message: String,
    },

    /// An error occurred in a lookup source.
    #[error("Lookup source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A property was declared with a default of the wrong type.
    #[error("Default value of type {found} does not match declared type {expected}")]
    InvalidDefault {
        /// The declared property type
        expected: ScalarType,
        /// The type of the offending default
        found: ScalarType,
    },

    /// A path was requested from a resolved configuration that does not exist.
    #[error("Configuration path not found: {path}")]
    KeyNotFound {
        /// The dotted path that was requested
        path: String,
    },

    /// A path exists in a resolved configuration but holds a different kind
    /// of value than requested.
    #[error("Configuration path '{path}' holds {found}, not {expected}")]
    TypeMismatch {
        /// The dotted path that was requested
        path: String,
        /// What the caller asked for
        expected: String,
        /// What the path actually holds
        found: String,
    },

    /// Mapping a resolved configuration onto a caller type failed.
    #[error("Failed to deserialize configuration: {message}")]
    DeserializeError {
        /// The error message
        message: String,
        /// The underlying deserialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConfigError {
    /// Creates an `UnresolvableLeaf` error for a variable that is not set.
    pub fn missing(key: impl Into<String>, expected: ScalarType) -> Self {
        ConfigError::UnresolvableLeaf {
            key: key.into(),
            expected,
            message: "variable is not set and no default is declared".to_string(),
        }
    }

    /// Creates an `UnresolvableLeaf` error for a variable whose value cannot be
    /// parsed as the declared type.
    pub fn malformed(key: impl Into<String>, expected: ScalarType) -> Self {
        ConfigError::UnresolvableLeaf {
            key: key.into(),
            expected,
            message: format!(
                "value cannot be parsed to a {} and no default is declared",
                expected
            ),
        }
    }

    /// Creates an `UnresolvableLeaf` error for a variable a lookup source
    /// failed to deliver. The declared default never applies to such a leaf.
    pub fn unreadable(key: impl Into<String>, expected: ScalarType, cause: &ConfigError) -> Self {
        ConfigError::UnresolvableLeaf {
            key: key.into(),
            expected,
            message: format!("value could not be read: {}", cause),
        }
    }

    /// Returns the lookup key this error refers to, if it is a leaf error.
    pub fn lookup_key(&self) -> Option<&str> {
        match self {
            ConfigError::UnresolvableLeaf { key, .. } => Some(key),
            _ => None,
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Every error collected during one resolution pass.
///
/// Errors are kept in schema path order. The collection is never empty when
/// returned from a resolver.
///
/// # Examples
///
/// ```
/// use envschema::domain::{ConfigError, ResolveErrors, ScalarType};
///
/// let errors = ResolveErrors::from(vec![
///     ConfigError::missing("DB_HOST", ScalarType::String),
///     ConfigError::malformed("DB_PORT", ScalarType::Number),
/// ]);
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.lookup_keys(), vec!["DB_HOST", "DB_PORT"]);
/// ```
#[derive(Debug, Default)]
pub struct ResolveErrors {
    errors: Vec<ConfigError>,
}

impl ResolveErrors {
    /// Creates an empty error set.
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the set.
    pub fn push(&mut self, error: ConfigError) {
        self.errors.push(error);
    }

    /// Moves every error of `other` into this set.
    pub fn extend(&mut self, other: ResolveErrors) {
        self.errors.extend(other.errors);
    }

    /// Returns the collected errors.
    pub fn errors(&self) -> &[ConfigError] {
        &self.errors
    }

    /// Returns the number of collected errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if no error was collected.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the lookup keys of every unresolvable leaf.
    pub fn lookup_keys(&self) -> Vec<&str> {
        self.errors.iter().filter_map(ConfigError::lookup_key).collect()
    }

    /// Consumes the set, returning the underlying errors.
    pub fn into_inner(self) -> Vec<ConfigError> {
        self.errors
    }
}

impl From<Vec<ConfigError>> for ResolveErrors {
    fn from(errors: Vec<ConfigError>) -> Self {
        Self { errors }
    }
}

impl From<ConfigError> for ResolveErrors {
    fn from(error: ConfigError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl IntoIterator for ResolveErrors {
    type Item = ConfigError;
    type IntoIter = std::vec::IntoIter<ConfigError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ResolveErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.len() {
            1 => write!(f, "1 configuration value could not be resolved:")?,
            n => write!(f, "{} configuration values could not be resolved:", n)?,
        }
        for error in &self.errors {
            write!(f, "\n  - {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ResolveErrors {}
