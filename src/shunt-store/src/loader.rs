//! Definition sources.
//!
//! Deployments declare shunts in a TOML file of `name = "description"`
//! pairs. The file merges over the built-in defaults through the ordinary
//! provider mechanism, so a declared name can restate a built-in one and
//! win.

use std::path::Path;

use tracing::debug;

use shunt_core::{DefinitionMap, Result, StoreError};

/// Name of the built-in default shunt.
pub const DEFAULT_SHUNT: &str = "shunt";

/// Built-in definitions present in every deployment.
///
/// The default shunt has no dedicated behavior of its own; sites treat it
/// as a coarse site-wide switch and check it wherever nothing more
/// specific applies.
pub fn default_definitions() -> DefinitionMap {
    let mut defs = DefinitionMap::new();
    defs.insert(
        DEFAULT_SHUNT.to_string(),
        "Default shunt. Trip it to signal site-wide degradation.".to_string(),
    );
    defs
}

/// Load operator-declared definitions from `path`. An absent file is an
/// empty set.
pub fn load_definitions(path: &Path) -> Result<DefinitionMap> {
    if !path.exists() {
        return Ok(DefinitionMap::new());
    }
    let raw = std::fs::read_to_string(path)?;
    let defs: DefinitionMap = toml::from_str(&raw).map_err(|e| StoreError::Malformed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    debug!(path = %path.display(), count = defs.len(), "definitions loaded");
    Ok(defs)
}
