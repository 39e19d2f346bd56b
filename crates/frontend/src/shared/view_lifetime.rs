//! Guards async results against views that are already gone.
//!
//! A request started by a view may resolve after the user navigated away.
//! Each view creates a [`ViewLifetime`] and checks it before writing the
//! result into its signals.

use leptos::prelude::on_cleanup;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct ViewLifetime {
    alive: Arc<AtomicBool>,
}

impl ViewLifetime {
    /// Token bound to the current reactive owner; ends on its cleanup
    pub fn new() -> Self {
        let token = Self::detached();
        let alive = token.alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Release));
        token
    }

    /// Token not bound to any owner, ended only by [`ViewLifetime::end`]
    pub fn detached() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    pub fn end(&self) {
        self.alive.store(false, Ordering::Release);
    }

    /// Run `apply` only while the view is still mounted
    pub fn deliver<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_alive() {
            apply(value);
            true
        } else {
            log::debug!("discarding result for a torn-down view");
            false
        }
    }
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::detached()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_after_end_are_discarded() {
        let token = ViewLifetime::detached();
        let mut seen = Vec::new();
        assert!(token.deliver(1, |v| seen.push(v)));
        token.clone().end();
        assert!(!token.deliver(2, |v| seen.push(v)));
        assert_eq!(seen, vec![1]);
    }
}
