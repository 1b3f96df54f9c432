use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScanConfig {
    /// Root directory scanned for `.log` files.
    #[serde(default = "ScanConfig::default_directory")]
    pub directory: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            directory: Self::default_directory(),
        }
    }
}

impl ScanConfig {
    fn default_directory() -> String {
        "navi_log/NioApp/storage_Log/".to_string()
    }
}

impl Config {
    /// Load `~/geolog/config.json`, falling back to defaults when the file
    /// does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_dir()?.join("config.json");

        if !config_path.exists() {
            debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;

        Ok(config)
    }

    fn config_dir() -> anyhow::Result<PathBuf> {
        let home_dir =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;
        Ok(home_dir.join("geolog"))
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "scan": {
    "directory": "navi_log/NioApp/storage_Log/"
  }
}"#;

        std::fs::write(&config_path, config_template)?;

        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Next steps:");
        println!("   1. Set scan.directory to the folder holding your .log files");
        println!("   2. Run 'geolog scan' to convert them to GeoJSON");
        println!();
        Ok(())
    }
}
