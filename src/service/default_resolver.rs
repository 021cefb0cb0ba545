// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default schema resolver implementation.
//!
//! This module provides the default implementation of the `ConfigResolver`
//! trait. It walks a schema tree, derives a lookup key for every leaf, queries
//! its lookup sources in priority order and applies the fallback policy.

use crate::adapters::FnAdapter;
use crate::domain::{
    parse_scalar, ConfigError, ConfigPath, ConfigResolver, EnvKey, FallbackPolicy, Property,
    RawValue, ResolveErrors, ResolvedConfig, ResolvedNode, Result, ScalarValue, Schema,
    SchemaNode,
};
use crate::ports::LookupSource;

/// Default implementation of the schema resolver.
///
/// Every leaf is attempted, and all failures are returned together in a
/// [`ResolveErrors`] ordered by schema path. A failure never produces a partial
/// configuration.
///
/// # Examples
///
/// ```rust
/// use envschema::prelude::*;
/// use envschema::service::DefaultResolver;
///
/// let schema = Schema::new()
///     .with_property("a", Property::number_or(5.0))
///     .with_group("b", Schema::new().with_property("c", Property::boolean()));
///
/// let resolver = DefaultResolver::builder()
///     .with_lookup(|key: &str| (key == "B_C").then(|| "false".to_string()))
///     .build();
///
/// let config = resolver.resolve(&schema).unwrap();
/// assert_eq!(config.get_f64("a").unwrap(), 5.0);
/// assert!(!config.get_bool("b.c").unwrap());
/// ```
pub struct DefaultResolver<'a> {
    /// Lookup sources, maintained in priority order (highest first)
    sources: Vec<Box<dyn LookupSource + 'a>>,
    /// When a declared default replaces a parsed value
    policy: FallbackPolicy,
}

impl<'a> DefaultResolver<'a> {
    /// Creates a resolver with no sources and the default policy.
    ///
    /// Without sources every lookup is absent, so only defaults resolve.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            policy: FallbackPolicy::default(),
        }
    }

    /// Creates a new resolver builder.
    pub fn builder() -> ResolverBuilder<'a> {
        ResolverBuilder::new()
    }

    /// Creates a resolver reading the process environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use envschema::prelude::*;
    /// use envschema::service::DefaultResolver;
    ///
    /// let schema = Schema::new().with_property(
    ///     "envschema_doc_unset_variable",
    ///     Property::string_or("fallback"),
    /// );
    /// let config = DefaultResolver::from_env().resolve(&schema).unwrap();
    /// assert_eq!(config.get_str("envschema_doc_unset_variable").unwrap(), "fallback");
    /// ```
    #[cfg(feature = "env")]
    pub fn from_env() -> Self {
        Self::builder().with_env_vars().build()
    }

    /// Adds a lookup source to the resolver.
    ///
    /// Sources are kept sorted by priority; sources of equal priority are
    /// queried in the order they were added.
    pub fn add_source(&mut self, source: Box<dyn LookupSource + 'a>) {
        self.sources.push(source);
        self.sort_sources();
    }

    /// Replaces the fallback policy.
    pub fn set_fallback_policy(&mut self, policy: FallbackPolicy) {
        self.policy = policy;
    }

    /// Returns the active fallback policy.
    pub fn fallback_policy(&self) -> FallbackPolicy {
        self.policy
    }

    /// Returns the names of the configured sources in query order.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Sorts sources by priority (highest first).
    fn sort_sources(&mut self) {
        self.sources.sort_by_key(|s| std::cmp::Reverse(s.priority()));
    }

    /// Queries all sources for a key, respecting priority order.
    ///
    /// A failing source ends the lookup: a lower-priority source must not
    /// stand in for a value that exists but could not be read.
    fn lookup(&self, key: &EnvKey) -> Result<Option<String>> {
        for source in &self.sources {
            match source.get(key) {
                Ok(Some(value)) => {
                    tracing::debug!("Found '{}' in source '{}'", key, source.name());
                    return Ok(Some(value));
                }
                Ok(None) => continue,
                Err(e) => {
                    tracing::warn!(
                        "Error querying source '{}' for key '{}': {}",
                        source.name(),
                        key,
                        e
                    );
                    return Err(e);
                }
            }
        }
        Ok(None)
    }
}

impl Default for DefaultResolver<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigResolver for DefaultResolver<'_> {
    fn resolve(&self, schema: &Schema) -> std::result::Result<ResolvedConfig, ResolveErrors> {
        Walk {
            lookup: &|key: &EnvKey| self.lookup(key),
            policy: self.policy,
        }
        .run(schema)
    }
}

/// Resolves `schema` against a single lookup function.
///
/// Uses the default fallback policy. The lookup may borrow local data; it
/// only has to live for the duration of the call.
///
/// # Examples
///
/// ```rust
/// use envschema::prelude::*;
/// use envschema::service::resolve;
/// use std::collections::HashMap;
///
/// let schema = Schema::new()
///     .with_group("a", Schema::new().with_group("b", Schema::new().with_property("c", Property::number())));
///
/// let errors = resolve(&schema, |_: &str| Some("abc".to_string())).unwrap_err();
/// assert_eq!(errors.lookup_keys(), vec!["A_B_C"]);
///
/// let env: HashMap<String, String> = [("A_B_C".to_string(), "7".to_string())].into();
/// let config = resolve(&schema, |key: &str| env.get(key).cloned()).unwrap();
/// assert_eq!(config.get_f64("a.b.c").unwrap(), 7.0);
/// ```
pub fn resolve<F>(schema: &Schema, lookup: F) -> std::result::Result<ResolvedConfig, ResolveErrors>
where
    F: Fn(&str) -> Option<String>,
{
    Walk {
        lookup: &|key: &EnvKey| Ok::<_, ConfigError>(lookup(key.as_str())),
        policy: FallbackPolicy::default(),
    }
    .run(schema)
}

/// One resolution pass over a schema tree.
struct Walk<'w> {
    lookup: &'w dyn Fn(&EnvKey) -> Result<Option<String>>,
    policy: FallbackPolicy,
}

impl Walk<'_> {
    fn run(&self, schema: &Schema) -> std::result::Result<ResolvedConfig, ResolveErrors> {
        let result = self.resolve_layer(schema, &ConfigPath::root());
        if let Err(errors) = &result {
            tracing::warn!("{} configuration value(s) could not be resolved", errors.len());
        }
        result
    }

    fn resolve_leaf(&self, property: &Property, path: &ConfigPath) -> Result<ScalarValue> {
        let key = path.env_key();
        let ty = property.scalar_type();
        let raw = match (self.lookup)(&key) {
            Ok(value) => value.map(RawValue::Text),
            Err(e) => return Err(ConfigError::unreadable(key.as_str(), ty, &e)),
        };
        let parsed = parse_scalar(ty, raw.as_ref());

        match (parsed, property.default_value()) {
            (Some(value), Some(default)) if self.policy.prefers_default(&value) => {
                tracing::debug!("'{}' is falsy, using declared default", key);
                Ok(default.clone())
            }
            (Some(value), _) => Ok(value),
            (None, Some(default)) => {
                if raw.is_some() {
                    tracing::debug!("'{}' is not a valid {}, using declared default", key, ty);
                } else {
                    tracing::debug!("'{}' is not set, using declared default", key);
                }
                Ok(default.clone())
            }
            (None, None) if raw.is_none() => Err(ConfigError::missing(key.as_str(), ty)),
            (None, None) => Err(ConfigError::malformed(key.as_str(), ty)),
        }
    }

    fn resolve_layer(
        &self,
        schema: &Schema,
        parent: &ConfigPath,
    ) -> std::result::Result<ResolvedConfig, ResolveErrors> {
        let mut resolved = ResolvedConfig::new();
        let mut errors = ResolveErrors::new();

        for (key, node) in schema.iter() {
            let path = parent.child(key);
            match node {
                SchemaNode::Leaf(property) => match self.resolve_leaf(property, &path) {
                    Ok(value) => resolved.insert(key, ResolvedNode::Value(value)),
                    Err(e) => errors.push(e),
                },
                SchemaNode::Group(group) => match self.resolve_layer(group, &path) {
                    Ok(config) => resolved.insert(key, ResolvedNode::Group(config)),
                    Err(e) => errors.extend(e),
                },
            }
        }

        if errors.is_empty() {
            Ok(resolved)
        } else {
            Err(errors)
        }
    }
}

/// Builder for constructing a `DefaultResolver`.
///
/// # Examples
///
/// ```rust
/// use envschema::domain::FallbackPolicy;
/// use envschema::service::ResolverBuilder;
///
/// let resolver = ResolverBuilder::new()
///     .with_lookup(|key: &str| (key == "PORT").then(|| "0".to_string()))
///     .with_fallback_policy(FallbackPolicy::UnparseableOrFalsy)
///     .build();
/// assert_eq!(resolver.source_names(), vec!["fn"]);
/// ```
pub struct ResolverBuilder<'a> {
    sources: Vec<Box<dyn LookupSource + 'a>>,
    policy: FallbackPolicy,
}

impl<'a> ResolverBuilder<'a> {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            policy: FallbackPolicy::default(),
        }
    }

    /// Adds a lookup source to the builder.
    pub fn with_source(mut self, source: Box<dyn LookupSource + 'a>) -> Self {
        self.sources.push(source);
        self
    }

    /// Adds a lookup function as a source.
    ///
    /// The function may borrow data that outlives the resolver.
    pub fn with_lookup<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'a,
    {
        self.with_source(Box::new(FnAdapter::new(lookup)))
    }

    /// Adds the process environment as a source.
    #[cfg(feature = "env")]
    pub fn with_env_vars(self) -> Self {
        use crate::adapters::EnvVarAdapter;
        self.with_source(Box::new(EnvVarAdapter::new()))
    }

    /// Adds the process environment as a source, reading `PREFIX` + key.
    #[cfg(feature = "env")]
    pub fn with_env_prefix(self, prefix: impl Into<String>) -> Self {
        use crate::adapters::EnvVarAdapter;
        self.with_source(Box::new(EnvVarAdapter::with_prefix(prefix)))
    }

    /// Sets the fallback policy.
    pub fn with_fallback_policy(mut self, policy: FallbackPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builds the resolver.
    pub fn build(self) -> DefaultResolver<'a> {
        let mut resolver = DefaultResolver {
            sources: self.sources,
            policy: self.policy,
        };
        resolver.sort_sources();
        resolver
    }
}

impl Default for ResolverBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}
