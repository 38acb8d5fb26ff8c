use crate::core::catalog::CatalogStore;
use crate::error::Result;
use crate::persistence::{RatingsStore, RequestLogger};
use std::path::PathBuf;

pub const DEFAULT_RATINGS_PATH: &str = "combo_ratings.json";
pub const DEFAULT_LOG_PATH: &str = "custom_requests_log.txt";

/// Where the application reads and writes its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub ratings_path: PathBuf,
    pub log_path: PathBuf,
    /// External catalog; the embedded one is used when unset.
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ratings_path: PathBuf::from(DEFAULT_RATINGS_PATH),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            catalog_path: None,
        }
    }
}

impl Config {
    pub fn load_catalog(&self) -> Result<CatalogStore> {
        match &self.catalog_path {
            Some(path) => CatalogStore::from_json_file(path),
            None => Ok(CatalogStore::builtin()),
        }
    }

    pub fn load_ratings(&self) -> RatingsStore {
        RatingsStore::load_or_empty(&self.ratings_path)
    }

    pub fn request_logger(&self) -> RequestLogger {
        RequestLogger::new(&self.log_path)
    }
}
