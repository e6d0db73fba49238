//! CLI configuration loader for the Vedanco site
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./vedanco.json or ./.vedanco/config.json
//! 3. Git repository root: <repo_root>/.vedanco/config.json
//! 4. User config: <config_dir>/vedanco/config.json
//! 5. Environment variables only (no files)
//!
//! UI timing can always be tuned through `VEDANCO_UI_*` variables.

use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use vedanco_core::config::{Easing, SiteConfig};

/// CLI configuration loader
#[derive(Debug, Default)]
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    contact_endpoint_override: Option<String>,
    api_key_override: Option<String>,
    base_url_override: Option<String>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set contact endpoint override
    pub fn with_contact_endpoint_override(mut self, endpoint: String) -> Self {
        self.contact_endpoint_override = Some(endpoint);
        self
    }

    /// Set API key override
    pub fn with_api_key_override(mut self, api_key: String) -> Self {
        self.api_key_override = Some(api_key);
        self
    }

    /// Set base URL override
    pub fn with_base_url_override(mut self, base_url: String) -> Self {
        self.base_url_override = Some(base_url);
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<SiteConfig> {
        // Step 1: Find and load base configuration
        let mut config = if let Some(override_path) = &self.config_override {
            let expanded = expand_path(override_path);
            self.load_from_path(&expanded).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            self.search_and_load().await?
        };

        // Step 2: Apply flag overrides
        if let Some(endpoint) = &self.contact_endpoint_override {
            config.contact.endpoint = Some(endpoint.clone());
        }
        if let Some(api_key) = &self.api_key_override {
            config.genai.api_key = Some(api_key.clone());
        }
        if let Some(base_url) = &self.base_url_override {
            config.genai.base_url = base_url.clone();
        }

        // Step 3: Resolve and validate
        self.resolve_config(config)
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<SiteConfig> {
        // 1. Current working directory
        if let Some(config) = self.try_load_cwd().await? {
            return Ok(config);
        }

        // 2. Git repository root
        if let Some(config) = self.try_load_git_root().await? {
            return Ok(config);
        }

        // 3. User config directory
        if let Some(config) = self.try_load_user_dir().await? {
            return Ok(config);
        }

        // 4. Environment variables only
        Ok(self.load_env_only())
    }

    /// Try loading from current working directory
    async fn try_load_cwd(&self) -> Result<Option<SiteConfig>> {
        let cwd = std::env::current_dir()?;

        let site_json = cwd.join("vedanco.json");
        if site_json.exists() {
            return Ok(Some(self.load_file(&site_json).await?));
        }

        let dir_config = cwd.join(".vedanco").join("config.json");
        if dir_config.exists() {
            return Ok(Some(self.load_file(&dir_config).await?));
        }

        Ok(None)
    }

    /// Try loading from git repository root
    async fn try_load_git_root(&self) -> Result<Option<SiteConfig>> {
        if let Some(git_root) = self.find_git_root()? {
            let config_path = git_root.join(".vedanco").join("config.json");
            if config_path.exists() {
                return Ok(Some(self.load_file(&config_path).await?));
            }
        }
        Ok(None)
    }

    /// Try loading from the user config directory
    async fn try_load_user_dir(&self) -> Result<Option<SiteConfig>> {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("vedanco").join("config.json");
            if config_path.exists() {
                return Ok(Some(self.load_file(&config_path).await?));
            }
        }
        Ok(None)
    }

    /// Build configuration from environment variables only
    fn load_env_only(&self) -> SiteConfig {
        debug!("No config file found, using environment");
        let mut config = SiteConfig::default();

        config.contact.endpoint = non_empty_var("CONTACT_SCRIPT_URL");
        config.genai.api_key = non_empty_var("API_KEY").or_else(|| non_empty_var("GEMINI_API_KEY"));
        if let Some(base_url) = non_empty_var("VEDANCO_GENAI_BASE_URL") {
            config.genai.base_url = base_url;
        }

        config
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<SiteConfig> {
        if path.is_file() {
            self.load_file(path).await
        } else if path.is_dir() {
            let config_file = path.join("config.json");
            if config_file.exists() {
                self.load_file(&config_file).await
            } else {
                Err(anyhow!(
                    "No config.json found in directory: {}",
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<SiteConfig> {
        debug!("Loading config from {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Find git repository root
    fn find_git_root(&self) -> Result<Option<PathBuf>> {
        let mut current = std::env::current_dir()?;

        loop {
            if current.join(".git").exists() {
                return Ok(Some(current));
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }

    /// Resolve `env:` references, UI overrides, and validate
    fn resolve_config(&self, mut config: SiteConfig) -> Result<SiteConfig> {
        // Resolve API key (handle env: prefix)
        if let Some(api_key) = &config.genai.api_key {
            if let Some(var_name) = api_key.strip_prefix("env:") {
                let value = std::env::var(var_name)
                    .with_context(|| format!("Environment variable not found: {}", var_name))?;
                config.genai.api_key = Some(value);
            }
        }
        // An empty endpoint means the same as none at all
        config.contact.endpoint = config.contact.endpoint.filter(|e| !e.trim().is_empty());

        apply_ui_env(&mut config);

        config
            .validate()
            .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

        Ok(config)
    }
}

fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(&raw).into_owned())
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Apply `VEDANCO_UI_*` overrides on top of the loaded values
fn apply_ui_env(config: &mut SiteConfig) {
    if let Some(easing) = std::env::var("VEDANCO_UI_EASING")
        .ok()
        .and_then(|v| Easing::parse(&v))
    {
        config.ui.easing = easing;
    }

    let parse_ms = |name: &str| std::env::var(name).ok().and_then(|v| v.parse::<u64>().ok());
    if let Some(ms) = parse_ms("VEDANCO_UI_FRAME_MS") {
        config.ui.frame_interval_ms = ms;
    }
    if let Some(ms) = parse_ms("VEDANCO_UI_SCROLL_MS") {
        config.ui.scroll_duration_ms = ms;
    }
    if let Some(ms) = parse_ms("VEDANCO_UI_INTRO_MS") {
        config.ui.intro_ms = ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[tokio::test]
    async fn test_load_from_file_override() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            dir.path(),
            "site.json",
            r#"{"contact": {"endpoint": "https://forms.test/exec"}, "genai": {"api_key": "k-123"}}"#,
        );

        let config = CliConfigLoader::new()
            .with_config_override(path)
            .load()
            .await
            .unwrap();

        assert_eq!(config.contact.endpoint.as_deref(), Some("https://forms.test/exec"));
        assert_eq!(config.genai.api_key.as_deref(), Some("k-123"));
    }

    #[tokio::test]
    async fn test_directory_override_reads_config_json() {
        let dir = TempDir::new().unwrap();
        write_config(dir.path(), "config.json", r#"{"ui": {"intro_ms": 10}}"#);

        let config = CliConfigLoader::new()
            .with_config_override(dir.path().to_path_buf())
            .load()
            .await
            .unwrap();

        assert!(config.contact.endpoint.is_none());
        assert_eq!(config.genai.poll_interval_ms, 5000);
    }

    #[tokio::test]
    async fn test_flags_override_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            dir.path(),
            "config.json",
            r#"{"contact": {"endpoint": "https://old.test/exec"}}"#,
        );

        let config = CliConfigLoader::new()
            .with_config_override(path)
            .with_contact_endpoint_override("https://new.test/exec".to_string())
            .with_api_key_override("flag-key".to_string())
            .with_base_url_override("http://localhost:8080/v1beta".to_string())
            .load()
            .await
            .unwrap();

        assert_eq!(config.contact.endpoint.as_deref(), Some("https://new.test/exec"));
        assert_eq!(config.genai.api_key.as_deref(), Some("flag-key"));
        assert_eq!(config.genai.base_url, "http://localhost:8080/v1beta");
    }

    #[tokio::test]
    async fn test_env_prefixed_api_key() {
        std::env::set_var("VEDANCO_TEST_LOADER_KEY", "from-env");
        let dir = TempDir::new().unwrap();
        let path = write_config(
            dir.path(),
            "config.json",
            r#"{"genai": {"api_key": "env:VEDANCO_TEST_LOADER_KEY"}}"#,
        );

        let config = CliConfigLoader::new()
            .with_config_override(path)
            .load()
            .await
            .unwrap();

        assert_eq!(config.genai.api_key.as_deref(), Some("from-env"));
    }

    #[tokio::test]
    async fn test_missing_override_path_fails() {
        let dir = TempDir::new().unwrap();
        let result = CliConfigLoader::new()
            .with_config_override(dir.path().join("nope.json"))
            .load()
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_invalid_endpoint_fails_validation() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            dir.path(),
            "config.json",
            r#"{"contact": {"endpoint": "forms.test/exec"}}"#,
        );

        let err = CliConfigLoader::new()
            .with_config_override(path)
            .load()
            .await
            .unwrap_err();
        assert!(err.to_string().contains("validation failed"));
    }
}
