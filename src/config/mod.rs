use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::store::Store;
use crate::ui::messages::warning;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Location of the JSON data file holding the schedule.
    pub data_file: String,
    #[serde(default = "default_document_title")]
    pub document_title: String,
    #[serde(default = "default_contact_line")]
    pub contact_line: String,
    #[serde(default = "default_currency_label")]
    pub currency_label: String,
    /// Prefix of the default export filename
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

fn default_document_title() -> String {
    "GMC PAYMENT SCHEDULE".to_string()
}

fn default_contact_line() -> String {
    "Contact: 0701 560 560 | Email: info@funplace.co.ke | Web: www.funplace.co.ke".to_string()
}

fn default_currency_label() -> String {
    "KSh".to_string()
}

fn default_file_prefix() -> String {
    "GMC_Payment_Schedule".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: Self::data_file().to_string_lossy().to_string(),
            document_title: default_document_title(),
            contact_line: default_contact_line(),
            currency_label: default_currency_label(),
            file_prefix: default_file_prefix(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("paysched")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".paysched")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("paysched.conf")
    }

    /// Return the full path of the JSON data file
    pub fn data_file() -> PathBuf {
        Self::config_dir().join("paysched.json")
    }

    /// Load configuration from file, or return defaults. A broken config is
    /// a diagnostic, never a fatal failure; the defaults keep the tool
    /// usable.
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Config::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!(
                        "Failed to parse configuration file {}: {}; using defaults",
                        path.display(),
                        e
                    ));
                    Config::default()
                }
            },
            Err(e) => {
                warning(format!(
                    "Failed to read configuration file {}: {}; using defaults",
                    path.display(),
                    e
                ));
                Config::default()
            }
        }
    }

    /// Initialize configuration and data files.
    ///
    /// The data file is seeded with the bundled default dataset unless it
    /// already exists. In test mode the config file is left untouched.
    pub fn init_all(custom_data: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let data_path = if let Some(name) = custom_data {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::data_file()
        };

        let config = Config {
            data_file: data_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if !data_path.exists() {
            // Opening a missing file yields the seeded first-run dataset.
            Store::open(&data_path).save();
        }

        println!("✅ Data file:   {:?}", data_path);

        Ok(())
    }
}
