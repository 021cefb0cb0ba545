// SPDX-License-Identifier: MIT OR Apache-2.0

//! Closure-backed lookup source adapter.

use crate::domain::{EnvKey, Result};
use crate::ports::LookupSource;
use std::fmt;

/// Lookup source adapter wrapping a plain function.
///
/// Any `Fn(&str) -> Option<String>` can serve as a lookup, which keeps tests
/// and embedders independent of the real process environment.
///
/// # Examples
///
/// ```rust
/// use envschema::adapters::FnAdapter;
/// use envschema::ports::LookupSource;
/// use std::collections::HashMap;
///
/// let values: HashMap<String, String> =
///     [("B_C".to_string(), "false".to_string())].into_iter().collect();
///
/// let adapter = FnAdapter::new(move |key: &str| values.get(key).cloned()).named("fixture");
/// assert_eq!(adapter.name(), "fixture");
/// assert_eq!(adapter.get_str("B_C").unwrap().as_deref(), Some("false"));
/// ```
pub struct FnAdapter<F> {
    name: String,
    priority: u8,
    lookup: F,
}

impl<F> FnAdapter<F>
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    /// Wraps `lookup` with the name `"fn"` and priority 1.
    pub fn new(lookup: F) -> Self {
        Self {
            name: "fn".to_string(),
            priority: 1,
            lookup,
        }
    }

    /// Sets the name reported in logs.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the query priority.
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }
}

impl<F> LookupSource for FnAdapter<F>
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }

    fn get(&self, key: &EnvKey) -> Result<Option<String>> {
        Ok((self.lookup)(key.as_str()))
    }
}

impl<F> fmt::Debug for FnAdapter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnAdapter")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}
