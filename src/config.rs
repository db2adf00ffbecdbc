use crate::error::{OrganizerError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persisted defaults; every value can be overridden per invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub curp_column: String,
    pub output_archive_name: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| OrganizerError::Config("No se encontró el directorio HOME".into()))?;
        Ok(home
            .join(".config")
            .join("curp-organizer")
            .join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            curp_column: "CURP".into(),
            output_archive_name: "documentos_filtrados_curp.zip".into(),
        }
    }

    pub fn set_column(&mut self, column: String) -> Result<()> {
        self.curp_column = column;
        self.save()
    }

    pub fn set_archive_name(&mut self, name: String) -> Result<()> {
        self.output_archive_name = name;
        self.save()
    }
}
