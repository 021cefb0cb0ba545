// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotted paths into a schema tree.
//!
//! A [`ConfigPath`] is built up while walking a schema and only exists to
//! derive lookup keys and to address values in a resolved configuration.

use crate::domain::env_key::EnvKey;
use std::fmt;

/// The sequence of keys from the schema root to a node.
///
/// # Examples
///
/// ```
/// use envschema::domain::ConfigPath;
///
/// let path = ConfigPath::root().child("server").child("port");
/// assert_eq!(path.as_dotted(), "server.port");
/// assert_eq!(path.env_key().as_str(), "SERVER_PORT");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ConfigPath {
    segments: Vec<String>,
}

impl ConfigPath {
    /// The empty path of the schema root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Splits a dotted string into a path. Empty segments are dropped.
    pub fn parse(dotted: &str) -> Self {
        Self {
            segments: dotted
                .split('.')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Returns a new path with `key` appended.
    pub fn child(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(key.to_string());
        Self { segments }
    }

    /// Returns `true` for the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the individual keys.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Joins the segments with `.`; the root path is the empty string.
    pub fn as_dotted(&self) -> String {
        self.segments.join(".")
    }

    /// Derives the lookup key for this path.
    pub fn env_key(&self) -> EnvKey {
        EnvKey::from_dotted(&self.as_dotted())
    }
}

impl fmt::Display for ConfigPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_dotted())
    }
}
