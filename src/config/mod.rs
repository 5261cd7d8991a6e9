//! Configuration management module.
//!
//! This module handles loading and saving the application configuration:
//! where each form submits to, whether the lead form runs in demo mode, and
//! notification timing. It also decides where local storage lives.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use crate::form::FormKind;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/intake-tui";
const STORAGE_DIRECTORY: &str = "storage";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub case_action_url: Option<String>,
    pub lead_action_url: Option<String>,
    pub lead_demo: bool,
    pub lead_demo_delay_ms: u64,
    pub notification_timeout_secs: u64,
    pub theme_name: String,
    dir_path: Option<PathBuf>,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default)]
    pub case_action_url: Option<String>,
    #[serde(default)]
    pub lead_action_url: Option<String>,
    #[serde(default = "default_lead_demo")]
    pub lead_demo: bool,
    #[serde(default = "default_lead_demo_delay_ms")]
    pub lead_demo_delay_ms: u64,
    #[serde(default = "default_notification_timeout_secs")]
    pub notification_timeout_secs: u64,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
}

fn default_lead_demo() -> bool {
    true
}

fn default_lead_demo_delay_ms() -> u64 {
    2000
}

fn default_notification_timeout_secs() -> u64 {
    5
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the default settings.
    ///
    pub fn new() -> Config {
        Config {
            case_action_url: None,
            lead_action_url: None,
            lead_demo: default_lead_demo(),
            lead_demo_delay_ms: default_lead_demo_delay_ms(),
            notification_timeout_secs: default_notification_timeout_secs(),
            theme_name: default_theme_name(),
            dir_path: None,
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// path if provided. A missing file leaves the defaults in place.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        // Try to create dir path if it doesn't exist
        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.case_action_url = data.case_action_url;
            self.lead_action_url = data.lead_action_url;
            self.lead_demo = data.lead_demo;
            self.lead_demo_delay_ms = data.lead_demo_delay_ms;
            self.notification_timeout_secs = data.notification_timeout_secs;
            self.theme_name = data.theme_name;
        }

        self.dir_path = Some(dir_path);
        self.file_path = Some(file_path);
        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            case_action_url: self.case_action_url.clone(),
            lead_action_url: self.lead_action_url.clone(),
            lead_demo: self.lead_demo,
            lead_demo_delay_ms: self.lead_demo_delay_ms,
            notification_timeout_secs: self.notification_timeout_secs,
            theme_name: self.theme_name.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;
        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Return the directory local storage (drafts) is kept in.
    ///
    pub fn storage_dir(&self) -> Result<PathBuf, AppError> {
        let dir_path = match &self.dir_path {
            Some(path) => path.clone(),
            None => Config::default_path()?,
        };
        Ok(dir_path.join(STORAGE_DIRECTORY))
    }

    /// Return the URL the given form submits to, if configured.
    ///
    pub fn action_url(&self, kind: FormKind) -> Option<&str> {
        match kind {
            FormKind::Case => self.case_action_url.as_deref(),
            FormKind::Lead => self.lead_action_url.as_deref(),
        }
    }

    pub fn lead_demo_delay(&self) -> Duration {
        Duration::from_millis(self.lead_demo_delay_ms)
    }

    pub fn notification_timeout(&self) -> Duration {
        Duration::from_secs(self.notification_timeout_secs)
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("intake-config-{}", rand::random::<u64>()))
    }

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert!(config.lead_demo);
        assert_eq!(config.lead_demo_delay(), Duration::from_millis(2000));
        assert_eq!(config.notification_timeout(), Duration::from_secs(5));
        assert_eq!(config.action_url(FormKind::Case), None);
        assert_eq!(config.theme_name, "tokyo-night");
    }

    #[test]
    fn test_load_without_file_keeps_defaults() {
        let dir = temp_dir();
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert!(config.lead_demo);
        assert_eq!(config.storage_dir().unwrap(), dir.join("storage"));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_partial_file() {
        let dir = temp_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(FILE_NAME),
            "case_action_url: https://support.example.com/cases\nlead_demo: false\n",
        )
        .unwrap();

        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(
            config.action_url(FormKind::Case),
            Some("https://support.example.com/cases")
        );
        assert!(!config.lead_demo);
        assert_eq!(config.lead_demo_delay_ms, 2000);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = temp_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "lead_demo: [not, a, bool]\n").unwrap();

        let mut config = Config::new();
        let result = config.load(dir.to_str());
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::DeserializationFailed(_)))
        ));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_requires_loaded_path() {
        assert!(matches!(
            Config::new().save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }

    #[test]
    fn test_save_then_load() {
        let dir = temp_dir();
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        config.lead_action_url = Some("https://crm.example.com/leads".to_string());
        config.notification_timeout_secs = 8;
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(dir.to_str()).unwrap();
        assert_eq!(
            reloaded.action_url(FormKind::Lead),
            Some("https://crm.example.com/leads")
        );
        assert_eq!(reloaded.notification_timeout_secs, 8);
        fs::remove_dir_all(&dir).unwrap();
    }
}
