// SPDX-FileCopyrightText: 2026 ZenJournal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./zenjournal.toml` >
//! `~/.config/zenjournal/zenjournal.toml` > `/etc/zenjournal/zenjournal.toml`
//! with environment variable overrides via the `ZENJOURNAL_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::ZenConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/zenjournal/zenjournal.toml` (system-wide)
/// 3. `~/.config/zenjournal/zenjournal.toml` (user XDG config)
/// 4. `./zenjournal.toml` (local directory)
/// 5. `ZENJOURNAL_*` environment variables
pub fn load_config() -> Result<ZenConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<ZenConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ZenConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ZenConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ZenConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(ZenConfig::default()))
        .merge(Toml::file("/etc/zenjournal/zenjournal.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("zenjournal/zenjournal.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("zenjournal.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `ZENJOURNAL_STORAGE_DATABASE_PATH`
/// must map to `storage.database_path`, not `storage.database.path`.
fn env_provider() -> Env {
    Env::prefixed("ZENJOURNAL_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: ZENJOURNAL_GEMINI_API_KEY -> "gemini_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("app_", "app.", 1)
            .replacen("server_", "server.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("gemini_", "gemini.", 1)
            .replacen("auth_", "auth.", 1);
        mapped.into()
    })
}
