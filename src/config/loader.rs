use std::path::{Path, PathBuf};

use crate::args::DEFAULT_CONFIG_FILES;
use crate::error::ConfigError;

use super::types::ConfigFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    fn detect(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("toml") {
            Some(Self::Toml)
        } else if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }
}

/// Loads the config named by `--config`, or the first default file present
/// in the working directory.
///
/// # Errors
///
/// Returns an error when the chosen file cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Option<ConfigFile>, ConfigError> {
    let chosen = match path {
        Some(path) => Some(PathBuf::from(path)),
        None => DEFAULT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|candidate| candidate.exists()),
    };

    match chosen {
        Some(path) => {
            let config = load_config_file(&path)?;
            tracing::debug!("Loaded config '{}'", path.display());
            Ok(Some(config))
        }
        None => Ok(None),
    }
}

pub(crate) fn load_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let format = ConfigFormat::detect(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let content = std::fs::read_to_string(path).map_err(|err| ConfigError::Read {
        path: path.to_path_buf(),
        source: err,
    })?;
    match format {
        ConfigFormat::Toml => toml::from_str(&content).map_err(|err| ConfigError::Toml {
            path: path.to_path_buf(),
            source: err,
        }),
        ConfigFormat::Json => serde_json::from_str(&content).map_err(|err| ConfigError::Json {
            path: path.to_path_buf(),
            source: err,
        }),
    }
}
