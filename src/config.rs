use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{AppError, Result};
use crate::models::Language;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default quote language when neither --language nor MOTIVAR_LANGUAGE
    /// is set.
    #[serde(default = "default_language")]
    pub language: String,

    /// Probability of trying the database before the embedded quotes.
    /// Must lie within 0.0..=1.0.
    #[serde(default = "default_db_preference")]
    pub db_preference: f64,

    #[serde(default = "default_db_path")]
    pub db_path: String,

    /// Upper bound on the size of a downloaded feed document.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_language() -> String {
    "br".to_string()
}

fn default_db_preference() -> f64 {
    0.5
}

fn default_db_path() -> String {
    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("motivar");
    std::fs::create_dir_all(&data_dir).ok();
    data_dir.join("motivar.db").to_string_lossy().to_string()
}

fn default_max_body_bytes() -> usize {
    200_000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            db_preference: default_db_preference(),
            db_path: default_db_path(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("motivar")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        Language::from_str(&self.language)?;
        if !(0.0..=1.0).contains(&self.db_preference) {
            return Err(AppError::Config(format!(
                "db_preference must lie within 0.0..=1.0, got {}",
                self.db_preference
            )));
        }
        Ok(())
    }
}
