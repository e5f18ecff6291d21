//! Data directory layout.
//!
//! State lives under a per-user data directory: `SHUNT_DATA_DIR` when set,
//! otherwise the platform data dir plus `shunt/`. Two files live there:
//! `variables.toml` with the persisted statuses and `definitions.toml`
//! with operator-declared definitions.

use std::path::{Path, PathBuf};

use tracing::debug;

use shunt_core::{Result, StoreError};

/// Directory name under the platform data dir.
pub const APP_DIR: &str = "shunt";

/// Environment override for the data directory.
pub const DATA_DIR_ENV: &str = "SHUNT_DATA_DIR";

/// Persisted status variables, one boolean per shunt.
pub const VARIABLES_FILE: &str = "variables.toml";

/// Operator-declared shunt definitions.
pub const DEFINITIONS_FILE: &str = "definitions.toml";

/// Resolved store locations.
#[derive(Debug, Clone)]
pub struct StorePaths {
    data_dir: PathBuf,
}

impl StorePaths {
    /// Resolve the data directory from the environment or the platform
    /// default.
    pub fn new() -> Result<Self> {
        Ok(Self::from_root(data_dir()?))
    }

    /// Use an explicit root directory.
    pub fn from_root(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The root data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Location of the persisted status variables.
    pub fn variables_file(&self) -> PathBuf {
        self.data_dir.join(VARIABLES_FILE)
    }

    /// Location of the operator-declared definitions.
    pub fn definitions_file(&self) -> PathBuf {
        self.data_dir.join(DEFINITIONS_FILE)
    }

    /// Create the data directory if it does not exist.
    pub fn ensure_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        debug!(data_dir = %self.data_dir.display(), "shunt data directory ready");
        Ok(())
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Ok(root) = std::env::var(DATA_DIR_ENV) {
        if !root.is_empty() {
            debug!(path = %root, "using SHUNT_DATA_DIR override");
            return Ok(PathBuf::from(root));
        }
    }
    let base = dirs::data_dir().ok_or(StoreError::DataDirNotFound)?;
    Ok(base.join(APP_DIR))
}
