//! Shunt - a registry of graceful-degradation switches.
//!
//! A shunt is a named on/off switch standing in front of a piece of site
//! functionality. Operators trip a shunt to shed that functionality during
//! an incident and reset it afterwards; the code guarding the feature only
//! ever asks "is this shunt enabled?".
//!
//! This crate is the in-process core: definition discovery through provider
//! callbacks, the persisted status boundary, status queries, and the
//! status-change protocol (no-op detection, change notifications, per-item
//! operator feedback). Durable storage sits behind the [`VariableStore`]
//! trait so backends are swappable; `shunt-store` ships the file-backed one.

pub mod controller;
pub mod definitions;
pub mod error;
pub mod feedback;
pub mod hooks;
pub mod store;

pub use controller::{ShuntController, ShuntStatus};
pub use definitions::{DefinitionMap, DefinitionRegistry};
pub use error::{Result, StoreError};
pub use feedback::{FeedbackLog, FeedbackMessage, FeedbackSink, Severity};
pub use hooks::StatusHooks;
pub use store::{variable_key, MemoryStore, VariableStore, VARIABLE_PREFIX};
