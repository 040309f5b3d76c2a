//! Simple CLI configuration loader for codepeek
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./codepeek.json or ./.codepeek/config.json
//! 3. XDG config: $XDG_CONFIG_HOME/codepeek/config.json or ~/.config/codepeek/config.json
//! 4. Built-in defaults (no files)
//!
//! Environment variables (`CODEPEEK_FORMAT`, `NO_COLOR`) are applied on top of
//! whichever source was found, and command-line flags on top of those.

use anyhow::{anyhow, Context, Result};
use codepeek_core::{ConfigError, OutputFormat, Settings};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the working directory
const CWD_CONFIG_FILE: &str = "codepeek.json";
/// Directory name used under the working directory and the XDG config home
const CONFIG_DIR_NAME: &str = ".codepeek";
const APP_DIR_NAME: &str = "codepeek";
const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable selecting the output format
pub const FORMAT_ENV: &str = "CODEPEEK_FORMAT";
/// Conventional switch for disabling colored output
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Raw configuration file format (every field optional)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawConfig {
    /// Output format name (`text` or `json`)
    #[serde(default)]
    pub format: Option<String>,
    /// Whether to use ANSI colors
    #[serde(default)]
    pub color: Option<bool>,
    /// Live mode prompt
    #[serde(default)]
    pub prompt: Option<String>,
}

/// CLI configuration loader
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Directory searched for project-local config (defaults to the cwd)
    working_dir: Option<PathBuf>,
    /// Base directory for the user config (defaults to XDG / platform dir)
    config_home: Option<PathBuf>,
    /// Flag overrides
    format_override: Option<OutputFormat>,
    no_color: bool,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config_override: None,
            working_dir: None,
            config_home: None,
            format_override: None,
            no_color: false,
        }
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Search for project config in this directory instead of the cwd
    #[cfg(test)]
    pub fn with_working_dir(mut self, path: PathBuf) -> Self {
        self.working_dir = Some(path);
        self
    }

    /// Use this directory as the user config home
    #[cfg(test)]
    pub fn with_config_home(mut self, path: PathBuf) -> Self {
        self.config_home = Some(path);
        self
    }

    /// Set output format override
    pub fn with_format_override(mut self, format: OutputFormat) -> Self {
        self.format_override = Some(format);
        self
    }

    /// Disable colors regardless of config
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    /// Load and resolve settings
    pub async fn load(&self) -> Result<Settings> {
        self.load_with_env(|key| std::env::var(key).ok()).await
    }

    /// Load and resolve settings, reading environment variables through `env`
    pub async fn load_with_env<F>(&self, env: F) -> Result<Settings>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Step 1: Find and load base configuration
        let config = if let Some(override_path) = &self.config_override {
            // Use explicit config override
            self.load_from_path(override_path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            // Search in priority order
            self.search_and_load().await?
        };

        // Step 2: Apply environment
        let config = apply_environment(config, env);

        // Step 3: Resolve, then apply flag overrides
        let mut settings = resolve_config(config)?;
        if let Some(format) = self.format_override {
            settings.format = format;
        }
        if self.no_color {
            settings.color = false;
        }

        settings
            .validate()
            .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

        debug!(
            format = settings.format.as_str(),
            color = settings.color,
            "Resolved settings"
        );

        Ok(settings)
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<RawConfig> {
        // 1. Current working directory
        if let Some(config) = self.try_load_cwd().await? {
            return Ok(config);
        }

        // 2. XDG config directory
        if let Some(config) = self.try_load_xdg().await? {
            return Ok(config);
        }

        // 3. Defaults only
        debug!("No configuration file found, using defaults");
        Ok(RawConfig::default())
    }

    /// Try loading from current working directory
    async fn try_load_cwd(&self) -> Result<Option<RawConfig>> {
        let cwd = match &self.working_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        // Try ./codepeek.json first
        let cwd_json = cwd.join(CWD_CONFIG_FILE);
        if cwd_json.exists() {
            return Ok(Some(self.load_file(&cwd_json).await?));
        }

        // Try ./.codepeek/config.json
        let dir_config = cwd.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        if dir_config.exists() {
            return Ok(Some(self.load_file(&dir_config).await?));
        }

        Ok(None)
    }

    /// Try loading from XDG config directory
    async fn try_load_xdg(&self) -> Result<Option<RawConfig>> {
        if let Some(config_dir) = self.get_config_home() {
            let config_path = config_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(Some(self.load_file(&config_path).await?));
            }
        }
        Ok(None)
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<RawConfig> {
        if path.is_file() {
            self.load_file(path).await
        } else if path.is_dir() {
            // Try config.json in the directory
            let config_file = path.join(CONFIG_FILE_NAME);
            if config_file.exists() {
                self.load_file(&config_file).await
            } else {
                Err(ConfigError::FileNotFound {
                    path: config_file.display().to_string(),
                }
                .into())
            }
        } else {
            Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
            .into())
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<RawConfig> {
        debug!("Loading config file: {}", path.display());

        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Get XDG config directory
    fn get_config_home(&self) -> Option<PathBuf> {
        if let Some(home) = &self.config_home {
            return Some(home.clone());
        }

        match std::env::var("XDG_CONFIG_HOME") {
            Ok(xdg_config) if !xdg_config.is_empty() => Some(PathBuf::from(xdg_config)),
            _ => dirs::config_dir(),
        }
    }
}

impl Default for CliConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Layer environment variables over a raw config
fn apply_environment<F>(mut config: RawConfig, env: F) -> RawConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(format) = env(FORMAT_ENV).filter(|value| !value.trim().is_empty()) {
        config.format = Some(format);
    }

    // Any non-empty value disables color
    if env(NO_COLOR_ENV).is_some_and(|value| !value.is_empty()) {
        config.color = Some(false);
    }

    config
}

/// Resolve raw config to Settings
fn resolve_config(config: RawConfig) -> Result<Settings> {
    let mut settings = Settings::default();

    if let Some(format) = config.format {
        settings.format = format.parse::<OutputFormat>().context("Invalid output format")?;
    }
    if let Some(color) = config.color {
        settings.color = color;
    }
    if let Some(prompt) = config.prompt {
        settings.prompt = prompt;
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    /// Loader isolated from the real cwd and user config
    fn isolated_loader(work: &TempDir, home: &TempDir) -> CliConfigLoader {
        CliConfigLoader::new()
            .with_working_dir(work.path().to_path_buf())
            .with_config_home(home.path().to_path_buf())
    }

    #[tokio::test]
    async fn test_defaults_without_files() {
        let work = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();

        let settings = isolated_loader(&work, &home)
            .load_with_env(no_env)
            .await
            .unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[tokio::test]
    async fn test_cwd_file_beats_user_config() {
        let work = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        fs::write(work.path().join("codepeek.json"), r#"{"format": "json"}"#).unwrap();
        fs::create_dir_all(home.path().join("codepeek")).unwrap();
        fs::write(
            home.path().join("codepeek").join("config.json"),
            r#"{"format": "text", "color": false}"#,
        )
        .unwrap();

        let settings = isolated_loader(&work, &home)
            .load_with_env(no_env)
            .await
            .unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
        // Sources are not merged
        assert!(settings.color);
    }

    #[tokio::test]
    async fn test_dot_dir_config() {
        let work = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        fs::create_dir_all(work.path().join(".codepeek")).unwrap();
        fs::write(
            work.path().join(".codepeek").join("config.json"),
            r#"{"prompt": "hex? "}"#,
        )
        .unwrap();

        let settings = isolated_loader(&work, &home)
            .load_with_env(no_env)
            .await
            .unwrap();
        assert_eq!(settings.prompt, "hex? ");
    }

    #[tokio::test]
    async fn test_user_config_used_when_cwd_has_none() {
        let work = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        fs::create_dir_all(home.path().join("codepeek")).unwrap();
        fs::write(
            home.path().join("codepeek").join("config.json"),
            r#"{"color": false}"#,
        )
        .unwrap();

        let settings = isolated_loader(&work, &home)
            .load_with_env(no_env)
            .await
            .unwrap();
        assert!(!settings.color);
    }

    #[tokio::test]
    async fn test_override_directory() {
        let work = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let custom = TempDir::new().unwrap();
        fs::write(custom.path().join("config.json"), r#"{"format": "json"}"#).unwrap();

        let settings = isolated_loader(&work, &home)
            .with_config_override(custom.path().to_path_buf())
            .load_with_env(no_env)
            .await
            .unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[tokio::test]
    async fn test_missing_override_fails() {
        let work = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();

        let result = isolated_loader(&work, &home)
            .with_config_override(work.path().join("nope.json"))
            .load_with_env(no_env)
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_invalid_format_in_file_fails() {
        let work = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        fs::write(work.path().join("codepeek.json"), r#"{"format": "yaml"}"#).unwrap();

        let result = isolated_loader(&work, &home).load_with_env(no_env).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_malformed_json_fails() {
        let work = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        fs::write(work.path().join("codepeek.json"), "{ not json").unwrap();

        let result = isolated_loader(&work, &home).load_with_env(no_env).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_environment_then_flags() {
        let work = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        fs::write(work.path().join("codepeek.json"), r#"{"format": "text"}"#).unwrap();

        let env = |key: &str| match key {
            FORMAT_ENV => Some("json".to_string()),
            NO_COLOR_ENV => Some("1".to_string()),
            _ => None,
        };

        let settings = isolated_loader(&work, &home)
            .load_with_env(env)
            .await
            .unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
        assert!(!settings.color);

        let settings = isolated_loader(&work, &home)
            .with_format_override(OutputFormat::Text)
            .load_with_env(env)
            .await
            .unwrap();
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[tokio::test]
    async fn test_empty_no_color_is_ignored() {
        let work = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let env = |key: &str| (key == NO_COLOR_ENV).then(String::new);

        let settings = isolated_loader(&work, &home)
            .load_with_env(env)
            .await
            .unwrap();
        assert!(settings.color);
    }

    #[tokio::test]
    async fn test_invalid_prompt_fails_validation() {
        let work = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        fs::write(work.path().join("codepeek.json"), r#"{"prompt": "a\nb"}"#).unwrap();

        let result = isolated_loader(&work, &home).load_with_env(no_env).await;
        assert!(result.is_err());
    }
}
