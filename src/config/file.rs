use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Optional TOML config file. Any value present here replaces the
/// corresponding command line flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub airlines: Option<PathBuf>,
    pub typecodes: Option<PathBuf>,
    pub poll_interval_secs: Option<u64>,
    pub batch_size: Option<usize>,
}

impl FileConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config = toml::from_str(&text)?;
        Ok(config)
    }
}
