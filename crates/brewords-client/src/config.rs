//! Configuration loading and data source factory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use brewords_core::settings::LanguagePair;
use brewords_core::traits::DataSource;

use crate::api::{ApiClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::pack_source::PackSource;

/// Backend connection settings.
///
/// Note: Custom Debug impl masks the token to prevent accidental exposure in logs.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Fixed bearer token; takes precedence over the token file.
    #[serde(default)]
    pub token: Option<String>,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .finish()
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            token: None,
        }
    }
}

/// Auto-advance delays after a reveal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamesConfig {
    #[serde(default = "default_guess_advance")]
    pub guess_advance_ms: u64,
    #[serde(default = "default_unscramble_advance")]
    pub unscramble_advance_ms: u64,
}

fn default_guess_advance() -> u64 {
    1500
}
fn default_unscramble_advance() -> u64 {
    2000
}

impl Default for GamesConfig {
    fn default() -> Self {
        Self {
            guess_advance_ms: default_guess_advance(),
            unscramble_advance_ms: default_unscramble_advance(),
        }
    }
}

impl GamesConfig {
    pub fn guess_delay(&self) -> Duration {
        Duration::from_millis(self.guess_advance_ms)
    }

    pub fn unscramble_delay(&self) -> Duration {
        Duration::from_millis(self.unscramble_advance_ms)
    }
}

/// Top-level brewords configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrewordsConfig {
    #[serde(default)]
    pub api: ApiConfig,
    /// Where the session token is kept between runs.
    #[serde(default = "default_token_path")]
    pub token_path: PathBuf,
    /// Offline content pack; when set, content comes from it instead of
    /// the backend.
    #[serde(default)]
    pub pack: Option<PathBuf>,
    #[serde(default)]
    pub games: GamesConfig,
    /// Translation and study language for flash cards.
    #[serde(default)]
    pub languages: LanguagePair,
}

fn default_token_path() -> PathBuf {
    config_dir()
        .map(|d| d.join("token"))
        .unwrap_or_else(|| PathBuf::from(".brewords-token"))
}

impl Default for BrewordsConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            token_path: default_token_path(),
            pack: None,
            games: GamesConfig::default(),
            languages: LanguagePair::default(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are taken literally, even if they contain `${`.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `brewords.toml` in the current directory
/// 2. `~/.config/brewords/config.toml`
///
/// Environment variable overrides: `BREWORDS_API_URL`, `BREWORDS_PACK`.
pub fn load_config() -> Result<BrewordsConfig> {
    load_config_from(None)
}

/// The config file that would be read, if any exists.
fn find_config(path: Option<&Path>) -> Result<Option<PathBuf>> {
    match path {
        Some(p) if p.exists() => Ok(Some(p.to_path_buf())),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from("brewords.toml");
            if local.exists() {
                Ok(Some(local))
            } else {
                Ok(config_dir()
                    .map(|dir| dir.join("config.toml"))
                    .filter(|global| global.exists()))
            }
        }
    }
}

/// Where settings changes are written: the config in use, or a new
/// `brewords.toml` in the current directory.
pub fn config_path(path: Option<&Path>) -> Result<PathBuf> {
    Ok(find_config(path)?.unwrap_or_else(|| PathBuf::from("brewords.toml")))
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<BrewordsConfig> {
    let config_path = find_config(path)?;

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<BrewordsConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => BrewordsConfig::default(),
    };

    // Apply env var overrides
    if let Ok(url) = std::env::var("BREWORDS_API_URL") {
        config.api.base_url = url;
    }
    if let Ok(pack) = std::env::var("BREWORDS_PACK") {
        config.pack = Some(PathBuf::from(pack));
    }

    config.api.base_url = resolve_env_vars(&config.api.base_url);
    config.api.token = config
        .api
        .token
        .as_deref()
        .map(resolve_env_vars)
        .filter(|t| !t.is_empty());
    config.token_path = resolve_path(&config.token_path);
    config.pack = config.pack.as_deref().map(resolve_path);
    config
        .languages
        .validate()
        .context("invalid [languages] in config")?;

    Ok(config)
}

/// Store `languages` in the config file at `path`, keeping everything else
/// in the file as written.
pub fn save_languages(path: &Path, languages: LanguagePair) -> Result<()> {
    languages.validate()?;
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read config: {}", path.display()))
        }
    };
    let mut doc = content
        .parse::<toml_edit::DocumentMut>()
        .with_context(|| format!("failed to parse config: {}", path.display()))?;

    if !doc.contains_table("languages") {
        doc["languages"] = toml_edit::table();
    }
    doc["languages"]["native"] = toml_edit::value(languages.native.code());
    doc["languages"]["learning"] = toml_edit::value(languages.learning.code());

    std::fs::write(path, doc.to_string())
        .with_context(|| format!("failed to write config: {}", path.display()))?;
    tracing::info!(path = %path.display(), %languages, "saved language settings");
    Ok(())
}

/// `~/.config/brewords`, if `HOME` is set.
pub fn config_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("brewords"))
}

/// Build the backend client described by `config`.
pub fn create_client(config: &BrewordsConfig) -> Result<ApiClient> {
    let client = ApiClient::new(&config.api.base_url, config.api.timeout_secs)
        .context("failed to create API client")?
        .with_languages(config.languages);
    if let Some(token) = &config.api.token {
        client.set_token(Some(token.clone()));
    }
    Ok(client)
}

/// Pick the content source: the configured pack if any, else the backend.
pub fn create_source(config: &BrewordsConfig, client: ApiClient) -> Result<Box<dyn DataSource>> {
    match &config.pack {
        Some(path) => {
            let source = PackSource::load(path)?;
            tracing::debug!(pack = %path.display(), "using offline content pack");
            Ok(Box::new(source))
        }
        None => Ok(Box::new(client)),
    }
}
