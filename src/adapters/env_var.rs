// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable lookup source adapter.
//!
//! This module provides an adapter that answers lookups from the process
//! environment.

use crate::domain::{ConfigError, EnvKey, Result};
use crate::ports::LookupSource;
use std::collections::HashMap;
use std::env;

/// Maximum length for environment variable values (prevents DoS)
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// Lookup source adapter for environment variables.
///
/// Keys are used exactly as derived (`SERVER_PORT`), optionally with a prefix
/// prepended (`APP_SERVER_PORT`).
///
/// # Priority
///
/// Environment variables have a priority of 2, so they win over sources using
/// the default priority of 1.
///
/// # Examples
///
/// ```rust
/// use envschema::adapters::EnvVarAdapter;
/// use envschema::ports::LookupSource;
///
/// // Read SERVER_PORT for the path server.port
/// let adapter = EnvVarAdapter::new();
///
/// // Read APP_SERVER_PORT for the path server.port
/// let adapter = EnvVarAdapter::with_prefix("APP_");
/// assert_eq!(adapter.prefix(), Some("APP_"));
/// ```
#[derive(Debug, Default)]
pub struct EnvVarAdapter {
    /// Optional prefix prepended to every derived key
    prefix: Option<String>,
    /// Fixed values used instead of the process environment
    values: Option<HashMap<String, String>>,
}

impl EnvVarAdapter {
    /// Creates an adapter reading the process environment without a prefix.
    pub fn new() -> Self {
        Self {
            prefix: None,
            values: None,
        }
    }

    /// Creates an adapter that prepends `prefix` to every derived key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use envschema::adapters::EnvVarAdapter;
    ///
    /// let adapter = EnvVarAdapter::with_prefix("MYAPP_");
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            values: None,
        }
    }

    /// Creates an adapter answering from a fixed map instead of the process
    /// environment.
    ///
    /// **Note**: This method is primarily intended for testing. Keys in the map
    /// are matched after the prefix, if any, has been applied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use envschema::adapters::EnvVarAdapter;
    /// use envschema::ports::LookupSource;
    /// use std::collections::HashMap;
    ///
    /// let mut values = HashMap::new();
    /// values.insert("SERVER_PORT".to_string(), "8080".to_string());
    ///
    /// let adapter = EnvVarAdapter::with_values(values);
    /// assert_eq!(adapter.get_str("SERVER_PORT").unwrap().as_deref(), Some("8080"));
    /// ```
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            prefix: None,
            values: Some(values),
        }
    }

    /// Sets the prefix on an existing adapter.
    pub fn prefixed(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Returns the configured prefix.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    fn variable_name(&self, key: &EnvKey) -> String {
        match &self.prefix {
            Some(prefix) => key.with_prefix(prefix).into_string(),
            None => key.as_str().to_string(),
        }
    }

    fn read_process_env(&self, name: &str) -> Result<Option<String>> {
        match env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(e @ env::VarError::NotUnicode(_)) => Err(ConfigError::SourceError {
                source_name: self.name().to_string(),
                message: format!("environment variable '{}' is not valid unicode", name),
                source: Some(Box::new(e)),
            }),
        }
    }
}

impl LookupSource for EnvVarAdapter {
    fn name(&self) -> &str {
        "env"
    }

    fn priority(&self) -> u8 {
        2
    }

    fn get(&self, key: &EnvKey) -> Result<Option<String>> {
        let name = self.variable_name(key);
        let value = match &self.values {
            Some(values) => values.get(&name).cloned(),
            None => self.read_process_env(&name)?,
        };

        match value {
            // Validate input sizes to prevent DoS
            Some(v) if v.len() > MAX_ENV_VALUE_LEN => {
                tracing::debug!(
                    "Rejecting oversized environment variable '{}': value_len={} (max {})",
                    name,
                    v.len(),
                    MAX_ENV_VALUE_LEN
                );
                Err(ConfigError::SourceError {
                    source_name: self.name().to_string(),
                    message: format!(
                        "environment variable '{}' exceeds {} bytes",
                        name, MAX_ENV_VALUE_LEN
                    ),
                    source: None,
                })
            }
            other => Ok(other),
        }
    }
}
