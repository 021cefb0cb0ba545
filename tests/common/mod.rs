// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities and mock implementations shared by the integration tests.

#![allow(dead_code)]

use envschema::domain::{ConfigError, EnvKey, Result};
use envschema::ports::LookupSource;
use std::collections::HashMap;
use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A mock lookup source for testing.
///
/// Records how many lookups it answered so tests can check that every leaf
/// was attempted.
#[derive(Debug, Clone)]
pub struct MockLookupSource {
    name: String,
    priority: u8,
    values: HashMap<String, String>,
    failing: bool,
    calls: Arc<AtomicUsize>,
}

impl MockLookupSource {
    /// Creates a new mock source with the given name and priority.
    pub fn new(name: impl Into<String>, priority: u8) -> Self {
        Self {
            name: name.into(),
            priority,
            values: HashMap::new(),
            failing: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Adds a value to the mock source.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Makes every lookup fail with a source error.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Returns a handle to the lookup counter.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl LookupSource for MockLookupSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }

    fn get(&self, key: &EnvKey) -> Result<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(ConfigError::SourceError {
                source_name: self.name.clone(),
                message: "Mock lookup failure".to_string(),
                source: None,
            });
        }
        Ok(self.values.get(key.as_str()).cloned())
    }
}

/// Builds a lookup closure over fixed key/value pairs.
pub fn lookup_from(
    pairs: &[(&str, &str)],
) -> impl Fn(&str) -> Option<String> + Send + Sync + 'static {
    let values: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| values.get(key).cloned()
}

/// Helper to set and clean up environment variables
pub struct EnvGuard {
    keys: Vec<String>,
}

impl EnvGuard {
    pub fn new() -> Self {
        EnvGuard { keys: Vec::new() }
    }

    pub fn set(&mut self, key: &str, value: &str) {
        env::set_var(key, value);
        self.keys.push(key.to_string());
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.keys {
            env::remove_var(key);
        }
    }
}
