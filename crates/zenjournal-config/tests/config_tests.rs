// SPDX-FileCopyrightText: 2026 ZenJournal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the ZenJournal configuration system.

use zenjournal_config::model::ZenConfig;
use zenjournal_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_zen_config() {
    let toml = r#"
[app]
name = "test-journal"
log_level = "debug"

[server]
host = "0.0.0.0"
port = 9000

[storage]
database_path = "/tmp/test.db"
wal_mode = false

[gemini]
api_key = "AIza-test"
model = "gemini-3-flash-preview"

[auth]
session_ttl_hours = 48
min_password_len = 12
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.app.name, "test-journal");
    assert_eq!(config.app.log_level, "debug");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.storage.database_path, "/tmp/test.db");
    assert!(!config.storage.wal_mode);
    assert_eq!(config.gemini.api_key.as_deref(), Some("AIza-test"));
    assert_eq!(config.auth.session_ttl_hours, 48);
    assert_eq!(config.auth.min_password_len, 12);
}

/// Unknown field in [gemini] section produces an error.
#[test]
fn unknown_field_in_gemini_produces_error() {
    let toml = r#"
[gemini]
api_kye = "abc"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("api_kye"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.app.name, "zenjournal");
    assert_eq!(config.app.log_level, "info");
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8420);
    assert!(config.storage.wal_mode);
    assert!(config.gemini.api_key.is_none());
    assert_eq!(config.gemini.model, "gemini-3-flash-preview");
    assert_eq!(config.auth.session_ttl_hours, 720);
}

/// Env-style override merges over TOML values.
#[test]
fn override_wins_over_toml() {
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let toml_content = r#"
[server]
port = 8000
"#;

    let config: ZenConfig = Figment::new()
        .merge(Serialized::defaults(ZenConfig::default()))
        .merge(Toml::string(toml_content))
        .merge(("server.port", 9999))
        .extract()
        .expect("should merge override");

    assert_eq!(config.server.port, 9999);
}

/// Validation errors are reported as diagnostics, not panics.
#[test]
fn invalid_values_are_collected_as_diagnostics() {
    let toml = r#"
[auth]
session_ttl_hours = 0
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail validation");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().contains("session_ttl_hours"));
}

/// An unknown key yields a typo suggestion in the rendered help.
#[test]
fn unknown_key_gets_suggestion() {
    let toml = r#"
[storage]
databse_path = "/tmp/x.db"
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail");
    let found = errors.iter().any(|e| {
        matches!(
            e,
            zenjournal_config::ConfigError::UnknownKey { suggestion: Some(s), .. }
                if s == "database_path"
        )
    });
    assert!(found, "expected a `database_path` suggestion, got {errors:?}");
}
