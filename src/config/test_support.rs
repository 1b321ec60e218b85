use tempfile::TempDir;

use crate::error::{AppResult, ConfigError};

use super::load_config_file;
use super::types::ConfigFile;

pub(crate) fn write_and_load(
    dir: &TempDir,
    name: &str,
    content: &str,
) -> AppResult<ConfigFile> {
    let path = dir.path().join(name);
    std::fs::write(&path, content).map_err(|err| ConfigError::ReadConfig {
        path: path.clone(),
        source: err,
    })?;
    load_config_file(&path)
}
