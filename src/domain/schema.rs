// SPDX-License-Identifier: MIT OR Apache-2.0

//! Declarative schema describing expected configuration values.
//!
//! A [`Schema`] is a tree: every entry is either a [`Property`] leaf or a
//! nested group. The node kind is an explicit [`SchemaNode`] tag, never
//! inferred from the presence of fields.

use crate::domain::config_path::ConfigPath;
use crate::domain::errors::{ConfigError, Result};
use crate::domain::scalar::{ScalarType, ScalarValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A schema leaf: one scalar type and an optional default.
///
/// The default, when present, always has the declared type. The typed
/// constructors guarantee this and [`Property::with_default`] checks it.
///
/// # Examples
///
/// ```
/// use envschema::domain::{Property, ScalarType, ScalarValue};
///
/// let port = Property::number_or(8080.0);
/// assert_eq!(port.scalar_type(), ScalarType::Number);
/// assert_eq!(port.default_value(), Some(&ScalarValue::Number(8080.0)));
///
/// assert!(Property::boolean().with_default("yes").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PropertyDef", into = "PropertyDef")]
pub struct Property {
    ty: ScalarType,
    default: Option<ScalarValue>,
}

impl Property {
    /// Creates a property of the given type with no default.
    pub fn new(ty: ScalarType) -> Self {
        Self { ty, default: None }
    }

    /// A required string property.
    pub fn string() -> Self {
        Self::new(ScalarType::String)
    }

    /// A required number property.
    pub fn number() -> Self {
        Self::new(ScalarType::Number)
    }

    /// A required boolean property.
    pub fn boolean() -> Self {
        Self::new(ScalarType::Boolean)
    }

    /// A string property with a default.
    pub fn string_or(default: impl Into<String>) -> Self {
        Self {
            ty: ScalarType::String,
            default: Some(ScalarValue::String(default.into())),
        }
    }

    /// A number property with a default.
    pub fn number_or(default: f64) -> Self {
        Self {
            ty: ScalarType::Number,
            default: Some(ScalarValue::Number(default)),
        }
    }

    /// A boolean property with a default.
    pub fn boolean_or(default: bool) -> Self {
        Self {
            ty: ScalarType::Boolean,
            default: Some(ScalarValue::Boolean(default)),
        }
    }

    /// Sets the default, rejecting a value whose type differs from the
    /// declared one.
    pub fn with_default(mut self, default: impl Into<ScalarValue>) -> Result<Self> {
        let default = default.into();
        if default.scalar_type() != self.ty {
            return Err(ConfigError::InvalidDefault {
                expected: self.ty,
                found: default.scalar_type(),
            });
        }
        self.default = Some(default);
        Ok(self)
    }

    /// Returns the declared type.
    pub fn scalar_type(&self) -> ScalarType {
        self.ty
    }

    /// Returns the declared default, if any.
    pub fn default_value(&self) -> Option<&ScalarValue> {
        self.default.as_ref()
    }
}

/// Wire form of a property: `{ type: number, default: 5 }`.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct PropertyDef {
    #[serde(rename = "type")]
    ty: ScalarType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default: Option<ScalarValue>,
}

impl TryFrom<PropertyDef> for Property {
    type Error = ConfigError;

    fn try_from(def: PropertyDef) -> Result<Self> {
        let property = Property::new(def.ty);
        match def.default {
            Some(default) => property.with_default(default),
            None => Ok(property),
        }
    }
}

impl From<Property> for PropertyDef {
    fn from(property: Property) -> Self {
        PropertyDef {
            ty: property.ty,
            default: property.default,
        }
    }
}

/// One entry of a schema.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaNode {
    /// A leaf resolved from a single lookup key.
    Leaf(Property),
    /// A nested schema whose keys extend the parent path.
    Group(Schema),
}

impl From<Property> for SchemaNode {
    fn from(property: Property) -> Self {
        SchemaNode::Leaf(property)
    }
}

impl From<Schema> for SchemaNode {
    fn from(schema: Schema) -> Self {
        SchemaNode::Group(schema)
    }
}

/// A tree of expected configuration values.
///
/// Keys are kept sorted so traversal, error reports and serialized output are
/// stable. Key order has no effect on the resolved values.
///
/// # Examples
///
/// ```
/// use envschema::domain::{Property, Schema};
///
/// let schema = Schema::new()
///     .with_property("a", Property::number_or(5.0))
///     .with_group("b", Schema::new().with_property("c", Property::boolean()));
///
/// let keys: Vec<String> = schema
///     .leaves()
///     .iter()
///     .map(|(path, _)| path.env_key().into_string())
///     .collect();
/// assert_eq!(keys, vec!["A", "B_C"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    nodes: BTreeMap<String, SchemaNode>,
}

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a leaf property, replacing any existing entry for `key`.
    pub fn with_property(mut self, key: impl Into<String>, property: Property) -> Self {
        self.insert(key, property);
        self
    }

    /// Adds a nested group, replacing any existing entry for `key`.
    pub fn with_group(mut self, key: impl Into<String>, group: Schema) -> Self {
        self.insert(key, group);
        self
    }

    /// Inserts a node, returning the entry it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        node: impl Into<SchemaNode>,
    ) -> Option<SchemaNode> {
        self.nodes.insert(key.into(), node.into())
    }

    /// Returns the node stored under `key`.
    pub fn get(&self, key: &str) -> Option<&SchemaNode> {
        self.nodes.get(key)
    }

    /// Iterates over the direct entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.nodes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of direct entries.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the schema has no entries.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Lists every leaf with its full path, depth first in key order.
    ///
    /// Useful for documenting which variables an application reads.
    pub fn leaves(&self) -> Vec<(ConfigPath, &Property)> {
        let mut out = Vec::new();
        self.collect_leaves(&ConfigPath::root(), &mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, parent: &ConfigPath, out: &mut Vec<(ConfigPath, &'a Property)>) {
        for (key, node) in &self.nodes {
            let path = parent.child(key);
            match node {
                SchemaNode::Leaf(property) => out.push((path, property)),
                SchemaNode::Group(group) => group.collect_leaves(&path, out),
            }
        }
    }
}
