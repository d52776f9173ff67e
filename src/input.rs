use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::model::{PoolIncentiveInfo, PoolRewardsInfo};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error reading `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error in `{}`: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value for `{name}`: {reason}")]
    InvalidArgument { name: String, reason: String },
}

impl InputError {
    pub fn invalid(name: &str, reason: impl Into<String>) -> Self {
        InputError::InvalidArgument {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Read and decode a JSON file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    let contents = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a rewards record. A file holding `null` yields `None`, which the
/// calculators treat as absent info.
pub fn load_rewards(path: &Path) -> Result<Option<PoolRewardsInfo>, InputError> {
    load_json(path)
}

pub fn load_incentive(path: &Path) -> Result<Option<PoolIncentiveInfo>, InputError> {
    load_json(path)
}

/// Decode a rewards record from a JSON string, treating anything
/// undecodable as absent.
pub fn rewards_from_str(json: &str) -> Option<PoolRewardsInfo> {
    serde_json::from_str::<Option<PoolRewardsInfo>>(json)
        .ok()
        .flatten()
}

pub fn incentive_from_str(json: &str) -> Option<PoolIncentiveInfo> {
    serde_json::from_str::<Option<PoolIncentiveInfo>>(json)
        .ok()
        .flatten()
}
