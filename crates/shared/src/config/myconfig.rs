use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_CATALOG_PATH: &str = "data/catalog.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub catalog_path: PathBuf,
    pub dev_mode: bool,
    pub enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(port_str) => port_str
                .parse::<u16>()
                .context("PORT must be a valid u16 integer")?,
            None => DEFAULT_PORT,
        };

        let catalog_path = lookup("CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH));

        let dev_mode = match lookup("DEV_MODE").as_deref() {
            None | Some("false") | Some("0") => false,
            Some("true") | Some("1") => true,
            Some(other) => {
                return Err(anyhow!(
                    "DEV_MODE must be 'true', 'false', '1' or '0', got '{}'",
                    other
                ));
            }
        };

        let enable_file_log = match lookup("ENABLE_FILE_LOG").as_deref() {
            None | Some("false") => false,
            Some("true") => true,
            Some(other) => {
                return Err(anyhow!(
                    "ENABLE_FILE_LOG must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        Ok(Self {
            port,
            catalog_path,
            dev_mode,
            enable_file_log,
        })
    }
}
