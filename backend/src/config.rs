use log::{info, warn};
use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};
use thiserror::Error;

const MENU_FILE: &str = "menu.csv";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Runtime settings, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Folder holding `menu.csv`.
    pub data_folder: PathBuf,
    /// Scratch folder for uploaded and generated menu files.
    pub upload_folder: PathBuf,
    pub max_upload_bytes: usize,
    /// How long a placed order stays available for its receipt.
    pub order_ttl: Duration,
    /// How long a generated menu waits for its download before it is swept.
    pub download_ttl: Duration,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_folder: PathBuf = try_load(&lookup, "MENU_DATA_FOLDER", "data")?;
        let upload_folder = match lookup("MENU_UPLOAD_FOLDER") {
            Some(folder) => PathBuf::from(folder),
            None => data_folder.join("uploads"),
        };

        Ok(Self {
            host: try_load(&lookup, "MENU_HOST", "127.0.0.1")?,
            port: try_load(&lookup, "MENU_PORT", "8080")?,
            data_folder,
            upload_folder,
            max_upload_bytes: try_load(&lookup, "MENU_MAX_UPLOAD_BYTES", "1048576")?,
            order_ttl: try_load_ttl(&lookup, "MENU_ORDER_TTL_SECS")?,
            download_ttl: try_load_ttl(&lookup, "MENU_DOWNLOAD_TTL_SECS")?,
        })
    }

    pub fn menu_file(&self) -> PathBuf {
        self.data_folder.join(MENU_FILE)
    }
}

fn try_load<T, F>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    raw.parse::<T>().map_err(|e| {
        warn!("Invalid {key} value {raw:?}: {e}");
        ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }
    })
}

fn try_load_ttl<F>(lookup: &F, key: &'static str) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let secs: u64 = try_load(lookup, key, "3600")?;
    if secs == 0 {
        return Err(ConfigError::Invalid {
            key,
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(Duration::from_secs(secs))
}
