//! Runtime settings: defaults, then `ehighway.toml`, then environment.
//!
//! Command-line flags are applied on top by the binary.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::application::DEFAULT_BREAKPOINT;
use crate::domain::{SiteError, SiteResult};

pub const DEFAULT_CONFIG_FILE: &str = "ehighway.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Path shown on start-up
    pub start_path: String,
    /// Terminal widths below this use the mobile layout
    pub breakpoint: u16,
    /// Event poll timeout, which is also the animation frame length
    pub tick_ms: u64,
    /// Log destination; logging is off when unset
    pub log_file: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_path: "/".into(),
            breakpoint: DEFAULT_BREAKPOINT,
            tick_ms: 16,
            log_file: None,
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileSettings {
    start_path: Option<String>,
    breakpoint: Option<u16>,
    tick_ms: Option<u64>,
    log_file: Option<PathBuf>,
    log_filter: Option<String>,
}

impl Settings {
    /// Loads settings from `config` (which must exist) or, when `None`,
    /// from `ehighway.toml` in the working directory if present; then
    /// applies the `EHIGHWAY_*` environment variables.
    pub fn load(config: Option<&Path>) -> SiteResult<Self> {
        let mut settings = Self::default();

        match config {
            Some(path) => settings.apply_file(path)?,
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    settings.apply_file(path)?;
                }
            }
        }

        settings.apply_env(|key| std::env::var(key).ok());
        Ok(settings)
    }

    pub fn apply_file(&mut self, path: &Path) -> SiteResult<()> {
        let raw = fs::read_to_string(path)
            .map_err(|err| SiteError::Config(format!("{}: {err}", path.display())))?;
        let file: FileSettings = toml::from_str(&raw)
            .map_err(|err| SiteError::Config(format!("{}: {err}", path.display())))?;
        self.merge(file);
        Ok(())
    }

    pub fn apply_toml(&mut self, raw: &str) -> SiteResult<()> {
        let file: FileSettings =
            toml::from_str(raw).map_err(|err| SiteError::Config(err.to_string()))?;
        self.merge(file);
        Ok(())
    }

    fn merge(&mut self, file: FileSettings) {
        if let Some(v) = file.start_path {
            self.start_path = v;
        }
        if let Some(v) = file.breakpoint {
            self.breakpoint = v;
        }
        if let Some(v) = file.tick_ms {
            self.tick_ms = v;
        }
        if let Some(v) = file.log_file {
            self.log_file = Some(v);
        }
        if let Some(v) = file.log_filter {
            self.log_filter = v;
        }
    }

    /// Applies environment overrides read through `lookup`.
    ///
    /// Numbers that fail to parse are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("EHIGHWAY_START_PATH") {
            self.start_path = v;
        }
        if let Some(v) = lookup("EHIGHWAY_BREAKPOINT") {
            if let Ok(parsed) = v.parse::<u16>() {
                self.breakpoint = parsed;
            }
        }
        if let Some(v) = lookup("EHIGHWAY_TICK_MS") {
            if let Ok(parsed) = v.parse::<u64>() {
                self.tick_ms = parsed;
            }
        }
        if let Some(v) = lookup("EHIGHWAY_LOG_FILE") {
            self.log_file = Some(PathBuf::from(v));
        }
        if let Some(v) = lookup("EHIGHWAY_LOG") {
            self.log_filter = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.start_path, "/");
        assert_eq!(settings.breakpoint, DEFAULT_BREAKPOINT);
        assert_eq!(settings.tick_ms, 16);
        assert!(settings.log_file.is_none());
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ehighway.toml");
        fs::write(&path, "start_path = \"/services\"\nbreakpoint = 120\n").unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.start_path, "/services");
        assert_eq!(settings.breakpoint, 120);
        assert_eq!(settings.tick_ms, 16);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let result = Settings::load(Some(&path));
        assert!(matches!(result, Err(SiteError::Config(_))));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "breakpoint = \"wide\"\n").unwrap();

        let err = Settings::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let mut settings = Settings::default();
        assert!(settings.apply_toml("colour = \"green\"\n").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("EHIGHWAY_START_PATH", "/contact"),
            ("EHIGHWAY_BREAKPOINT", "not-a-number"),
            ("EHIGHWAY_TICK_MS", "33"),
            ("EHIGHWAY_LOG_FILE", "/tmp/ehighway.log"),
            ("EHIGHWAY_LOG", "debug"),
        ]);
        let mut settings = Settings::default();
        settings.apply_env(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(settings.start_path, "/contact");
        assert_eq!(settings.breakpoint, DEFAULT_BREAKPOINT);
        assert_eq!(settings.tick_ms, 33);
        assert_eq!(settings.log_file, Some(PathBuf::from("/tmp/ehighway.log")));
        assert_eq!(settings.log_filter, "debug");
    }
}
