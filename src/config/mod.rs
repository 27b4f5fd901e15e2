use crate::models::City;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::utils::path::expand_tilde;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory containing the three city CSV files.
    pub data_dir: String,
    /// Re-prompt message, formatted with the rejected raw input.
    #[serde(default = "default_error_template")]
    pub error_template: String,
}

fn default_error_template() -> String {
    "{} is not a valid input. Please try again.".to_string()
}

fn default_data_dir() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            error_template: default_error_template(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("bikestats")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".bikestats")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("bikestats.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Resolve a city's source file inside the configured data directory.
    pub fn data_file(&self, city: City) -> PathBuf {
        expand_tilde(&self.data_dir).join(city.file_name())
    }
}
