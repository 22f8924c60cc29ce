// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_VERSION: i64 = 1;
const APP_NAME: &str = "scry";
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8006";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub backend: Backend,
    #[serde(default)]
    pub ui: Ui,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            backend: Backend::default(),
            ui: Ui::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Backend {
    pub base_url: Option<String>,
    pub timeout: Option<String>,
}

impl Default for Backend {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Some("5s".to_owned()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub hover_effects: Option<bool>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            hover_effects: Some(false),
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("SCRY_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set SCRY_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and move values under [backend] and [ui]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.version != CONFIG_VERSION {
            bail!(
                "config {} has version {}; expected 1",
                path.display(),
                self.version
            );
        }

        if let Some(base_url) = &self.backend.base_url
            && base_url.trim().is_empty()
        {
            bail!("backend.base_url in {} must not be empty", path.display());
        }

        if let Some(timeout) = &self.backend.timeout {
            let parsed = parse_duration(timeout)?;
            if parsed <= Duration::ZERO {
                bail!(
                    "backend.timeout in {} must be positive, got {}",
                    path.display(),
                    timeout
                );
            }
        }

        Ok(())
    }

    /// Resolution order: explicit config value, then the SCRY_BASE_URL
    /// environment variable, then the stock local backend address.
    pub fn base_url(&self) -> String {
        if let Some(base_url) = &self.backend.base_url {
            return base_url.trim_end_matches('/').to_owned();
        }
        if let Ok(base_url) = env::var("SCRY_BASE_URL")
            && !base_url.is_empty()
        {
            return base_url.trim_end_matches('/').to_owned();
        }
        DEFAULT_BASE_URL.to_owned()
    }

    pub fn timeout(&self) -> Result<Duration> {
        parse_duration(self.backend.timeout.as_deref().unwrap_or("5s"))
    }

    pub fn hover_effects(&self) -> bool {
        self.ui.hover_effects.unwrap_or(false)
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# scry config\n# Place this file at: {}\n\nversion = 1\n\n[backend]\n# Optional. Default is {} (or SCRY_BASE_URL when set)\n# base_url = \"http://127.0.0.1:8006\"\ntimeout = \"5s\"\n\n[ui]\nhover_effects = false\n",
            path.display(),
            DEFAULT_BASE_URL,
        )
    }
}

fn parse_duration(raw: &str) -> Result<Duration> {
    if let Some(value) = raw.strip_suffix("ms") {
        let millis: u64 = value
            .parse()
            .with_context(|| format!("invalid timeout duration {raw:?}"))?;
        return Ok(Duration::from_millis(millis));
    }
    if let Some(value) = raw.strip_suffix('s') {
        let secs: u64 = value
            .parse()
            .with_context(|| format!("invalid timeout duration {raw:?}"))?;
        return Ok(Duration::from_secs(secs));
    }
    if let Some(value) = raw.strip_suffix('m') {
        let mins: u64 = value
            .parse()
            .with_context(|| format!("invalid timeout duration {raw:?}"))?;
        return Ok(Duration::from_secs(mins * 60));
    }

    bail!("invalid duration {raw:?}; use one of: <N>ms, <N>s, <N>m (for example 500ms or 5s)")
}

#[cfg(test)]
mod tests {
    use super::{Config, DEFAULT_BASE_URL, parse_duration};
    use anyhow::Result;
    use std::path::PathBuf;
    use std::sync::{Mutex, OnceLock};
    use std::time::Duration;

    fn write_config(content: &str) -> Result<(tempfile::TempDir, PathBuf)> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        std::fs::write(&path, content)?;
        Ok((temp, path))
    }

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        match ENV_LOCK.get_or_init(|| Mutex::new(())).lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[test]
    fn missing_config_uses_defaults() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let config = Config::load(&temp.path().join("missing.toml"))?;
        assert_eq!(config.version, 1);
        assert!(!config.hover_effects());
        assert_eq!(config.timeout()?, Duration::from_secs(5));
        Ok(())
    }

    #[test]
    fn unversioned_config_is_rejected_with_actionable_message() -> Result<()> {
        let (_temp, path) = write_config("[backend]\ntimeout=\"5s\"\n")?;
        let error = Config::load(&path).expect_err("unversioned config should fail");
        let message = error.to_string();
        assert!(message.contains("version = 1"));
        assert!(message.contains("[backend] and [ui]"));
        Ok(())
    }

    #[test]
    fn v1_config_parses() -> Result<()> {
        let (_temp, path) = write_config(
            "version = 1\n[backend]\nbase_url = \"http://10.0.0.5:8006/\"\ntimeout = \"2s\"\n[ui]\nhover_effects = true\n",
        )?;

        let config = Config::load(&path)?;
        assert_eq!(config.base_url(), "http://10.0.0.5:8006");
        assert_eq!(config.timeout()?, Duration::from_secs(2));
        assert!(config.hover_effects());
        Ok(())
    }

    #[test]
    fn malformed_config_returns_parse_error() -> Result<()> {
        let (_temp, path) = write_config("{{not toml")?;
        let error = Config::load(&path).expect_err("malformed config should fail");
        assert!(error.to_string().contains("parse TOML config"));
        Ok(())
    }

    #[test]
    fn unsupported_config_version_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 2\n")?;
        let error = Config::load(&path).expect_err("v2 config should fail");
        assert!(error.to_string().contains("unsupported config version 2"));
        Ok(())
    }

    #[test]
    fn default_path_honors_env_override() -> Result<()> {
        let _guard = env_lock();
        let temp = tempfile::tempdir()?;
        let override_path = temp.path().join("custom-config.toml");
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("SCRY_CONFIG_PATH", &override_path);
        }
        let resolved = Config::default_path()?;
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var("SCRY_CONFIG_PATH");
        }
        assert_eq!(resolved, override_path);
        Ok(())
    }

    #[test]
    fn default_path_uses_config_toml_suffix_when_no_env_override() -> Result<()> {
        let _guard = env_lock();
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::remove_var("SCRY_CONFIG_PATH");
        }
        let path = Config::default_path()?;
        assert!(path.ends_with("config.toml"));
        Ok(())
    }

    #[test]
    fn base_url_prefers_config_over_env_override() -> Result<()> {
        let _guard = env_lock();
        let (_temp, path) =
            write_config("version = 1\n[backend]\nbase_url = \"http://explicit:8006\"\n")?;
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("SCRY_BASE_URL", "http://from-env:8006");
        }
        let config = Config::load(&path)?;
        let resolved = config.base_url();
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var("SCRY_BASE_URL");
        }
        assert_eq!(resolved, "http://explicit:8006");
        Ok(())
    }

    #[test]
    fn base_url_uses_env_override_when_config_value_missing() -> Result<()> {
        let _guard = env_lock();
        let (_temp, path) = write_config("version = 1\n")?;
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("SCRY_BASE_URL", "http://from-env:8006/");
        }
        let config = Config::load(&path)?;
        let resolved = config.base_url();
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var("SCRY_BASE_URL");
        }
        assert_eq!(resolved, "http://from-env:8006");
        Ok(())
    }

    #[test]
    fn base_url_defaults_to_the_local_backend() -> Result<()> {
        let _guard = env_lock();
        let (_temp, path) = write_config("version = 1\n")?;
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::remove_var("SCRY_BASE_URL");
        }
        let config = Config::load(&path)?;
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        Ok(())
    }

    #[test]
    fn empty_base_url_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[backend]\nbase_url = \"  \"\n")?;
        let error = Config::load(&path).expect_err("blank base_url should fail");
        assert!(error.to_string().contains("must not be empty"));
        Ok(())
    }

    #[test]
    fn timeout_parses_ms_seconds_and_minutes() -> Result<()> {
        assert_eq!(parse_duration("500ms")?, Duration::from_millis(500));
        assert_eq!(parse_duration("5s")?, Duration::from_secs(5));
        assert_eq!(parse_duration("2m")?, Duration::from_secs(120));
        Ok(())
    }

    #[test]
    fn timeout_rejects_invalid_duration() {
        let error = parse_duration("oops").expect_err("invalid duration should fail");
        let message = error.to_string();
        assert!(
            message.contains("invalid duration") || message.contains("invalid timeout duration"),
            "unexpected message: {message}"
        );
    }

    #[test]
    fn timeout_rejects_non_positive_values_in_config() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[backend]\ntimeout = \"0s\"\n")?;
        let error = Config::load(&path).expect_err("zero timeout should fail");
        assert!(error.to_string().contains("must be positive"));
        Ok(())
    }

    #[test]
    fn example_config_includes_required_sections() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        let example = Config::example_config(&path);
        assert!(example.contains("version = 1"));
        assert!(example.contains("[backend]"));
        assert!(example.contains("[ui]"));
        Ok(())
    }
}
