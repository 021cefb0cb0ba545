// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for lookup source precedence and the process environment.

mod common;

#[cfg(feature = "env")]
use common::EnvGuard;
use common::MockLookupSource;
use envschema::prelude::*;

#[test]
#[cfg(feature = "env")]
fn test_resolve_from_process_env() {
    let mut env_guard = EnvGuard::new();
    env_guard.set("ENVSCHEMA_IT_SERVER_PORT", "9000");
    env_guard.set("ENVSCHEMA_IT_SERVER_TLS", " False ");

    let schema = Schema::new().with_group(
        "envschema_it",
        Schema::new().with_group(
            "server",
            Schema::new()
                .with_property("port", Property::number())
                .with_property("tls", Property::boolean_or(true))
                .with_property("host", Property::string_or("0.0.0.0")),
        ),
    );

    let config = DefaultResolver::from_env().resolve(&schema).unwrap();
    assert_eq!(config.get_f64("envschema_it.server.port").unwrap(), 9000.0);
    assert!(!config.get_bool("envschema_it.server.tls").unwrap());
    assert_eq!(config.get_str("envschema_it.server.host").unwrap(), "0.0.0.0");
}

#[test]
#[cfg(feature = "env")]
fn test_resolve_with_env_prefix() {
    let mut env_guard = EnvGuard::new();
    env_guard.set("ENVSCHEMA_PREFIXED_DB_HOST", "db.internal");

    let schema = Schema::new().with_group("db", Schema::new().with_property("host", Property::string()));

    let config = DefaultResolver::builder()
        .with_env_prefix("ENVSCHEMA_PREFIXED_")
        .build()
        .resolve(&schema)
        .unwrap();
    assert_eq!(config.get_str("db.host").unwrap(), "db.internal");
}

#[test]
#[cfg(feature = "env")]
fn test_env_overrides_lower_priority_source() {
    let mut env_guard = EnvGuard::new();
    env_guard.set("ENVSCHEMA_PREC_KEY", "from_env");

    let fallback = MockLookupSource::new("fallback", 1)
        .with_value("ENVSCHEMA_PREC_KEY", "from_fallback")
        .with_value("ENVSCHEMA_PREC_OTHER", "only_in_fallback");

    let resolver = DefaultResolver::builder()
        .with_source(Box::new(fallback))
        .with_env_vars()
        .build();
    assert_eq!(resolver.source_names(), vec!["env", "fallback"]);

    let schema = Schema::new().with_group(
        "envschema_prec",
        Schema::new()
            .with_property("key", Property::string())
            .with_property("other", Property::string()),
    );
    let config = resolver.resolve(&schema).unwrap();
    assert_eq!(config.get_str("envschema_prec.key").unwrap(), "from_env");
    assert_eq!(config.get_str("envschema_prec.other").unwrap(), "only_in_fallback");
}

#[test]
fn test_three_sources_first_hit_wins() {
    let low = MockLookupSource::new("low_priority", 1)
        .with_value("KEY1", "from_low")
        .with_value("KEY2", "low_value");
    let medium = MockLookupSource::new("medium_priority", 2)
        .with_value("KEY1", "from_medium")
        .with_value("KEY3", "medium_value");
    let high = MockLookupSource::new("high_priority", 3).with_value("KEY1", "from_high");

    let resolver = DefaultResolver::builder()
        .with_source(Box::new(low))
        .with_source(Box::new(high))
        .with_source(Box::new(medium))
        .build();

    let schema = Schema::new()
        .with_property("key1", Property::string())
        .with_property("key2", Property::string())
        .with_property("key3", Property::string());
    let config = resolver.resolve(&schema).unwrap();

    assert_eq!(config.get_str("key1").unwrap(), "from_high");
    assert_eq!(config.get_str("key2").unwrap(), "low_value");
    assert_eq!(config.get_str("key3").unwrap(), "medium_value");
}

#[test]
fn test_failing_source_fails_only_its_leaves() {
    let broken = MockLookupSource::new("broken", 5).failing();
    let calls = broken.calls();
    let working = MockLookupSource::new("working", 1).with_value("PORT", "1234");
    let working_calls = working.calls();

    let resolver = DefaultResolver::builder()
        .with_source(Box::new(broken))
        .with_source(Box::new(working))
        .build();

    let schema = Schema::new()
        .with_property("port", Property::number())
        .with_property("name", Property::string_or("svc"));
    let errors = resolver.resolve(&schema).unwrap_err();

    // Both leaves are attempted, and the lower-priority value never stands in
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 2);
    assert_eq!(working_calls.load(std::sync::atomic::Ordering::SeqCst), 0);
    assert_eq!(errors.lookup_keys(), vec!["NAME", "PORT"]);
    assert!(errors.to_string().contains("Mock lookup failure"));
}

#[test]
fn test_failing_low_priority_source_unused_when_higher_has_value() {
    let resolver = DefaultResolver::builder()
        .with_source(Box::new(MockLookupSource::new("broken", 1).failing()))
        .with_source(Box::new(
            MockLookupSource::new("primary", 3).with_value("PORT", "8080"),
        ))
        .build();

    let schema = Schema::new().with_property("port", Property::number());
    let config = resolver.resolve(&schema).unwrap();
    assert_eq!(config.get_f64("port").unwrap(), 8080.0);
}

#[test]
fn test_source_error_is_not_reported_as_missing() {
    let resolver = DefaultResolver::builder()
        .with_source(Box::new(MockLookupSource::new("broken", 1).failing()))
        .build();

    let schema = Schema::new().with_property("port", Property::number());
    let errors = resolver.resolve(&schema).unwrap_err();
    assert_eq!(errors.lookup_keys(), vec!["PORT"]);
    let rendered = errors.to_string();
    assert!(rendered.contains("could not be read"));
    assert!(!rendered.contains("not set"));
}

#[cfg(all(unix, feature = "env"))]
#[test]
fn test_non_unicode_env_value_fails_leaf_with_default() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    std::env::set_var("ENVSCHEMA_NU_HOST", OsStr::from_bytes(&[0x68, 0x6f, 0xff]));
    let schema = Schema::new().with_group(
        "envschema_nu",
        Schema::new().with_property("host", Property::string_or("localhost")),
    );
    let result = DefaultResolver::from_env().resolve(&schema);
    std::env::remove_var("ENVSCHEMA_NU_HOST");

    let errors = result.unwrap_err();
    assert_eq!(errors.lookup_keys(), vec!["ENVSCHEMA_NU_HOST"]);
    assert!(errors.to_string().contains("not valid unicode"));
}
