use std::{env, path::PathBuf};

use dotenv::dotenv;
use fitbmi_loader::csv_source::DEFAULT_DATASET_PATH;

pub const DATASET_ENV: &str = "FITBMI_DATASET";
pub const LOG_CONFIG_ENV: &str = "FITBMI_LOG_CONFIG";
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub dataset_path: PathBuf,
    pub log_config: PathBuf,
}

impl Config {
    /// Reads settings from the environment, after loading `.env` if there is one.
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            dataset_path: lookup(DATASET_ENV)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_DATASET_PATH.to_owned())
                .into(),
            log_config: lookup(LOG_CONFIG_ENV)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_owned())
                .into(),
        }
    }

    pub fn with_dataset(self, dataset_path: Option<PathBuf>) -> Self {
        match dataset_path {
            Some(dataset_path) => Self {
                dataset_path,
                ..self
            },
            None => self,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
