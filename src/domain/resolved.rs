// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolved configuration trees.
//!
//! A [`ResolvedConfig`] mirrors the shape of the [`Schema`](crate::domain::Schema)
//! it came from, with every leaf replaced by a concrete [`ScalarValue`]. Values
//! can be read by dotted path, or the whole tree can be mapped onto a caller
//! type with `ResolvedConfig::into_typed`.

use crate::domain::config_path::ConfigPath;
use crate::domain::errors::{ConfigError, Result};
use crate::domain::scalar::ScalarValue;
use serde::Serialize;
use std::collections::BTreeMap;

/// One entry of a resolved configuration.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResolvedNode {
    /// A resolved leaf.
    Value(ScalarValue),
    /// A resolved nested group.
    Group(ResolvedConfig),
}

impl ResolvedNode {
    fn kind(&self) -> &'static str {
        match self {
            ResolvedNode::Value(value) => value.scalar_type().as_str(),
            ResolvedNode::Group(_) => "group",
        }
    }
}

/// A fully resolved configuration.
///
/// Serializes as a plain nested map, e.g. `{ a: 5, b: { c: false } }`.
///
/// # Examples
///
/// ```
/// use envschema::domain::{Property, Schema};
/// use envschema::service::resolve;
///
/// let schema = Schema::new()
///     .with_group("server", Schema::new().with_property("port", Property::number_or(80.0)));
///
/// let config = resolve(&schema, |key: &str| {
///     (key == "SERVER_PORT").then(|| "8080".to_string())
/// })
/// .unwrap();
///
/// assert_eq!(config.get_f64("server.port").unwrap(), 8080.0);
/// assert!(config.get_str("server.port").is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedConfig {
    nodes: BTreeMap<String, ResolvedNode>,
}

impl ResolvedConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, key: impl Into<String>, node: ResolvedNode) {
        self.nodes.insert(key.into(), node);
    }

    /// Iterates over the direct entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedNode)> {
        self.nodes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of direct entries.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up a node by dotted path.
    pub fn get(&self, path: &str) -> Result<&ResolvedNode> {
        let parsed = ConfigPath::parse(path);
        let not_found = || ConfigError::KeyNotFound {
            path: path.to_string(),
        };

        let (last, parents) = parsed.segments().split_last().ok_or_else(not_found)?;
        let mut current = self;
        for segment in parents {
            current = match current.nodes.get(segment) {
                Some(ResolvedNode::Group(group)) => group,
                _ => return Err(not_found()),
            };
        }
        current.nodes.get(last).ok_or_else(not_found)
    }

    /// Looks up a leaf value by dotted path.
    pub fn get_value(&self, path: &str) -> Result<&ScalarValue> {
        match self.get(path)? {
            ResolvedNode::Value(value) => Ok(value),
            node => Err(mismatch(path, "value", node)),
        }
    }

    /// Looks up a nested group by dotted path.
    pub fn group(&self, path: &str) -> Result<&ResolvedConfig> {
        match self.get(path)? {
            ResolvedNode::Group(group) => Ok(group),
            node => Err(mismatch(path, "group", node)),
        }
    }

    /// Looks up a string leaf by dotted path.
    pub fn get_str(&self, path: &str) -> Result<&str> {
        let node = self.get(path)?;
        match node {
            ResolvedNode::Value(ScalarValue::String(s)) => Ok(s),
            _ => Err(mismatch(path, "string", node)),
        }
    }

    /// Looks up a number leaf by dotted path.
    pub fn get_f64(&self, path: &str) -> Result<f64> {
        let node = self.get(path)?;
        match node {
            ResolvedNode::Value(ScalarValue::Number(n)) => Ok(*n),
            _ => Err(mismatch(path, "number", node)),
        }
    }

    /// Looks up a boolean leaf by dotted path.
    pub fn get_bool(&self, path: &str) -> Result<bool> {
        let node = self.get(path)?;
        match node {
            ResolvedNode::Value(ScalarValue::Boolean(b)) => Ok(*b),
            _ => Err(mismatch(path, "boolean", node)),
        }
    }

    /// Maps the configuration onto a caller-defined type.
    ///
    /// Numbers without a fractional part are presented as integers, so integer
    /// fields such as `u16` deserialize directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use envschema::domain::{Property, Schema};
    /// use envschema::service::resolve;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Server {
    ///     host: String,
    ///     port: u16,
    /// }
    ///
    /// #[derive(Deserialize)]
    /// struct AppConfig {
    ///     server: Server,
    ///     debug: bool,
    /// }
    ///
    /// let schema = Schema::new()
    ///     .with_group(
    ///         "server",
    ///         Schema::new()
    ///             .with_property("host", Property::string_or("localhost"))
    ///             .with_property("port", Property::number_or(8080.0)),
    ///     )
    ///     .with_property("debug", Property::boolean_or(false));
    ///
    /// let config: AppConfig = resolve(&schema, |_: &str| None)
    ///     .unwrap()
    ///     .into_typed()
    ///     .unwrap();
    /// assert_eq!(config.server.port, 8080);
    /// assert!(!config.debug);
    /// ```
    #[cfg(feature = "typed")]
    pub fn into_typed<T>(self) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        serde_yaml::from_value(self.to_yaml_value()).map_err(|e| ConfigError::DeserializeError {
            message: e.to_string(),
            source: Some(Box::new(e)),
        })
    }

    #[cfg(feature = "typed")]
    fn to_yaml_value(&self) -> serde_yaml::Value {
        use serde_yaml::{Mapping, Number, Value};

        let mut mapping = Mapping::new();
        for (key, node) in &self.nodes {
            let value = match node {
                ResolvedNode::Group(group) => group.to_yaml_value(),
                ResolvedNode::Value(ScalarValue::String(s)) => Value::String(s.clone()),
                ResolvedNode::Value(ScalarValue::Boolean(b)) => Value::Bool(*b),
                ResolvedNode::Value(ScalarValue::Number(n)) => {
                    // i64::MAX rounds up to 2^63 as f64, which is out of range
                    if n.fract() == 0.0 && *n >= i64::MIN as f64 && *n < i64::MAX as f64 {
                        Value::Number(Number::from(*n as i64))
                    } else {
                        Value::Number(Number::from(*n))
                    }
                }
            };
            mapping.insert(Value::String(key.clone()), value);
        }
        Value::Mapping(mapping)
    }
}

fn mismatch(path: &str, expected: &str, node: &ResolvedNode) -> ConfigError {
    ConfigError::TypeMismatch {
        path: path.to_string(),
        expected: expected.to_string(),
        found: node.kind().to_string(),
    }
}
