use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/pagecheck/config.toml`.
///
/// Both fields are optional and both can be overridden from the
/// environment: `DATABASE_URL` beats `database_url`, `SECRET_KEY` beats
/// `secret_key`. An absent database URL means the default database file
/// under the XDG state directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Store location: a `sqlite:` URI or a plain filesystem path.
    #[serde(default)]
    pub database_url: Option<String>,
    /// Session-signing secret for an embedding front end. Loaded and
    /// exposed here; nothing in the core consumes it.
    #[serde(default)]
    pub secret_key: Option<String>,
}

impl AppConfig {
    /// Store location with environment precedence applied.
    pub fn database_url(&self) -> Option<String> {
        env_or_file(env::var("DATABASE_URL").ok(), self.database_url.as_deref())
    }

    /// Session secret with environment precedence applied.
    pub fn secret_key(&self) -> Option<String> {
        env_or_file(env::var("SECRET_KEY").ok(), self.secret_key.as_deref())
    }
}

/// A set, non-blank environment value wins over the file value.
fn env_or_file(env_value: Option<String>, file_value: Option<&str>) -> Option<String> {
    env_value
        .filter(|v| !v.trim().is_empty())
        .or_else(|| file_value.map(str::to_string))
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pagecheck")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AppConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = AppConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: AppConfig = toml::from_str(&data)?;
    Ok(cfg)
}
