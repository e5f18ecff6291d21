//! Status queries and the status-change protocol.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::definitions::DefinitionRegistry;
use crate::error::Result;
use crate::feedback::{FeedbackSink, Severity};
use crate::hooks::StatusHooks;
use crate::store::{variable_key, VariableStore};

/// Enabled/disabled partition selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShuntStatus {
    Enabled,
    Disabled,
}

impl ShuntStatus {
    /// Status corresponding to a stored boolean.
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

impl std::fmt::Display for ShuntStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enabled => write!(f, "enabled"),
            Self::Disabled => write!(f, "disabled"),
        }
    }
}

/// The main interface to the shunt system.
///
/// Owns the definition registry, the status store, and the change
/// listeners. Queries answer from registry plus store; changes run the
/// per-item protocol: validate the name, detect no-ops, write through,
/// notify listeners, report the outcome on the feedback sink.
pub struct ShuntController {
    registry: DefinitionRegistry,
    store: Box<dyn VariableStore>,
    hooks: StatusHooks,
}

impl ShuntController {
    /// Create a controller over a definition registry and a store backend.
    pub fn new(registry: DefinitionRegistry, store: Box<dyn VariableStore>) -> Self {
        Self {
            registry,
            store,
            hooks: StatusHooks::new(),
        }
    }

    /// The definition registry.
    pub fn registry(&self) -> &DefinitionRegistry {
        &self.registry
    }

    // ========== Change listeners ==========

    /// Register a listener invoked when a shunt becomes enabled.
    pub fn on_enable<F>(&mut self, listener: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.hooks.on_enable(listener);
    }

    /// Register a listener invoked when a shunt becomes disabled.
    pub fn on_disable<F>(&mut self, listener: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.hooks.on_disable(listener);
    }

    // ========== Status queries ==========

    /// Whether `name` is a defined shunt.
    pub fn exists(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Whether `name` is currently enabled. Unknown names read as
    /// disabled, regardless of any stray key in the store.
    pub fn is_enabled(&self, name: &str) -> Result<bool> {
        if !self.registry.contains(name) {
            return Ok(false);
        }
        self.store.get(&variable_key(name))
    }

    /// Defined names in the requested status, in registry order.
    pub fn list_by_status(&self, status: ShuntStatus) -> Result<Vec<String>> {
        let want = status == ShuntStatus::Enabled;
        let mut names = Vec::new();
        for name in self.registry.names() {
            if self.is_enabled(name)? == want {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    /// All currently enabled shunts, in registry order.
    pub fn enabled(&self) -> Result<Vec<String>> {
        self.list_by_status(ShuntStatus::Enabled)
    }

    /// All currently disabled shunts, in registry order.
    pub fn disabled(&self) -> Result<Vec<String>> {
        self.list_by_status(ShuntStatus::Disabled)
    }

    // ========== Status changes ==========

    /// Set one shunt's status, warning on no-ops.
    pub fn set_status(
        &mut self,
        name: &str,
        desired: bool,
        feedback: &mut dyn FeedbackSink,
    ) -> Result<()> {
        let mut changes = IndexMap::new();
        changes.insert(name.to_string(), desired);
        self.set_status_multiple(&changes, true, feedback)
    }

    /// Apply a batch of status changes, in the iteration order of
    /// `changes`.
    ///
    /// Per item: an unknown name is reported as an error and skipped; a
    /// request matching the current status is a no-op, warned about only
    /// when `warn_on_noop`; a real change writes through the store,
    /// notifies the matching listeners, and reports success. Unknown
    /// names and no-ops never abort the batch. A store fault does, and
    /// leaves earlier items applied.
    pub fn set_status_multiple(
        &mut self,
        changes: &IndexMap<String, bool>,
        warn_on_noop: bool,
        feedback: &mut dyn FeedbackSink,
    ) -> Result<()> {
        for (name, desired) in changes {
            let desired = *desired;
            if !self.registry.contains(name) {
                warn!(shunt = %name, "status change requested for unknown shunt");
                feedback.message(Severity::Error, &format!("No such shunt \"{name}\"."));
                continue;
            }

            let current = self.is_enabled(name)?;
            if desired == current {
                debug!(shunt = %name, enabled = current, "status unchanged");
                if warn_on_noop {
                    feedback.message(
                        Severity::Warning,
                        &format!("Shunt \"{name}\" is already {}.", state_word(desired)),
                    );
                }
                continue;
            }

            self.store.set(&variable_key(name), desired)?;
            if desired {
                self.hooks.notify_enabled(name);
            } else {
                self.hooks.notify_disabled(name);
            }
            info!(shunt = %name, enabled = desired, "shunt status changed");
            feedback.message(
                Severity::Status,
                &format!("Shunt \"{name}\" has been {}.", state_word(desired)),
            );
        }
        Ok(())
    }

    /// Enable one shunt, or every defined shunt when `name` is `None`.
    pub fn enable(&mut self, name: Option<&str>, feedback: &mut dyn FeedbackSink) -> Result<()> {
        match name {
            Some(name) => self.set_status(name, true, feedback),
            None => {
                let changes = self.desired_for_all(true);
                self.set_status_multiple(&changes, true, feedback)
            }
        }
    }

    /// Disable one shunt, or every defined shunt when `name` is `None`.
    pub fn disable(&mut self, name: Option<&str>, feedback: &mut dyn FeedbackSink) -> Result<()> {
        match name {
            Some(name) => self.set_status(name, false, feedback),
            None => {
                let changes = self.desired_for_all(false);
                self.set_status_multiple(&changes, true, feedback)
            }
        }
    }

    fn desired_for_all(&self, desired: bool) -> IndexMap<String, bool> {
        self.registry
            .names()
            .into_iter()
            .map(|name| (name.to_string(), desired))
            .collect()
    }
}

fn state_word(enabled: bool) -> &'static str {
    if enabled {
        "enabled"
    } else {
        "disabled"
    }
}
