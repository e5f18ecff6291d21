//! Durable storage for the shunt registry.
//!
//! [`FileStore`] keeps one boolean per shunt in a flat TOML file under a
//! per-user data directory; [`StorePaths`] resolves that directory; the
//! loader reads operator-declared definition files and supplies the
//! built-in defaults.

pub mod file;
pub mod loader;
pub mod paths;

pub use file::FileStore;
pub use loader::{default_definitions, load_definitions, DEFAULT_SHUNT};
pub use paths::{StorePaths, DATA_DIR_ENV, DEFINITIONS_FILE, VARIABLES_FILE};
