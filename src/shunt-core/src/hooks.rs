//! Status-change notifications.
//!
//! Listeners subscribe to enable or disable events and run synchronously,
//! in registration order, with the shunt name as payload. Only real
//! changes notify; no-ops and rejected names never reach the listeners.

type Listener = Box<dyn Fn(&str) + Send + Sync>;

/// Ordered enable/disable listener lists.
#[derive(Default)]
pub struct StatusHooks {
    on_enable: Vec<Listener>,
    on_disable: Vec<Listener>,
}

impl StatusHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for shunts becoming enabled.
    pub fn on_enable<F>(&mut self, listener: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_enable.push(Box::new(listener));
    }

    /// Register a listener for shunts becoming disabled.
    pub fn on_disable<F>(&mut self, listener: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_disable.push(Box::new(listener));
    }

    /// Notify every enable listener, in registration order.
    pub fn notify_enabled(&self, name: &str) {
        for listener in &self.on_enable {
            listener(name);
        }
    }

    /// Notify every disable listener, in registration order.
    pub fn notify_disabled(&self, name: &str) {
        for listener in &self.on_disable {
            listener(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn listeners_fire_in_registration_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut hooks = StatusHooks::new();

        let first = seen.clone();
        hooks.on_enable(move |name| first.lock().unwrap().push(format!("first:{name}")));
        let second = seen.clone();
        hooks.on_enable(move |name| second.lock().unwrap().push(format!("second:{name}")));

        hooks.notify_enabled("search");
        assert_eq!(
            *seen.lock().unwrap(),
            vec!["first:search".to_string(), "second:search".to_string()]
        );
    }

    #[test]
    fn enable_and_disable_lists_are_independent() {
        let enabled = Arc::new(Mutex::new(0));
        let disabled = Arc::new(Mutex::new(0));
        let mut hooks = StatusHooks::new();

        let count = enabled.clone();
        hooks.on_enable(move |_| *count.lock().unwrap() += 1);
        let count = disabled.clone();
        hooks.on_disable(move |_| *count.lock().unwrap() += 1);

        hooks.notify_enabled("a");
        hooks.notify_enabled("b");
        hooks.notify_disabled("c");

        assert_eq!(*enabled.lock().unwrap(), 2);
        assert_eq!(*disabled.lock().unwrap(), 1);
    }

    #[test]
    fn notifying_with_no_listeners_is_fine() {
        let hooks = StatusHooks::new();
        hooks.notify_enabled("search");
        hooks.notify_disabled("search");
    }
}
