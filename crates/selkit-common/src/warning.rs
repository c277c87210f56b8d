//! Editor warnings with colored terminal output.
//!
//! Non-fatal problems (a rename that would change a selector's type, a
//! selector the UI cannot apply) are reported here instead of being raised
//! as errors. Each unique message is printed once and kept until the editor
//! layer drains it with [`take_warnings`].

use std::collections::HashSet;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// A recorded warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// The subsystem that raised the warning (e.g. `"Selector"`).
    pub component: String,
    /// Human-readable message.
    pub message: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.component, self.message)
    }
}

#[derive(Default)]
struct Registry {
    /// Keys already reported, so the same message is never repeated.
    seen: HashSet<String>,
    /// Warnings not yet drained by the editor layer.
    pending: Vec<Warning>,
}

static WARNINGS: Mutex<Option<Registry>> = Mutex::new(None);

fn registry() -> MutexGuard<'static, Option<Registry>> {
    // A panic while holding the lock cannot leave the registry half-written
    WARNINGS.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Report a non-fatal problem (printed and recorded once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("Selector", "cannot rename id `main` to a class");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let warning = Warning {
        component: component.to_string(),
        message: message.to_string(),
    };
    let mut guard = registry();
    let registry = guard.get_or_insert_with(Registry::default);
    if registry.seen.insert(warning.to_string()) {
        eprintln!("{}", format!("[selkit {component}] ⚠ {message}").yellow());
        registry.pending.push(warning);
    }
}

/// Drain every warning recorded since the last call.
///
/// De-duplication keys are kept, so a drained message is not reported again
/// until [`clear_warnings`] is called.
#[must_use]
pub fn take_warnings() -> Vec<Warning> {
    registry()
        .as_mut()
        .map(|registry| std::mem::take(&mut registry.pending))
        .unwrap_or_default()
}

/// Forget all recorded warnings (call when the editor selection changes).
pub fn clear_warnings() {
    if let Some(registry) = registry().as_mut() {
        registry.seen.clear();
        registry.pending.clear();
    }
}
