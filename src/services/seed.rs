use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::services::memory::Catalog;

pub const CREATORS_FILE: &str = "creators.json";
pub const CAMPAIGNS_FILE: &str = "campaigns.json";
pub const PAST_DEALS_FILE: &str = "past-deals.json";

/// Errors that can occur while loading the seed datasets
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Catalog {
    /// Load creators, campaigns and past deals from a seed directory
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, DataError> {
        let dir = dir.as_ref();

        let creators = read_json(&dir.join(CREATORS_FILE))?;
        let campaigns = read_json(&dir.join(CAMPAIGNS_FILE))?;
        let past_deals = read_json(&dir.join(PAST_DEALS_FILE))?;

        let catalog = Catalog::new(creators, campaigns, past_deals);

        tracing::info!(
            "Loaded catalog from {}: {} creators, {} campaigns, {} past deals",
            dir.display(),
            catalog.creators.len(),
            catalog.campaigns.len(),
            catalog.past_deals.len()
        );

        Ok(catalog)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })
}
