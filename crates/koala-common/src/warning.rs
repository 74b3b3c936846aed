//! Browser diagnostics routed through `tracing`.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the DOM and CSSOM components to report unsupported features and
//! requests that have no answer in the current engine state.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about an unsupported feature (emitted once per unique message)
///
/// The warning is recorded at `WARN` level with the component as a field, so
/// subscribers can filter on it.
///
/// # Example
/// ```ignore
/// warn_once("CSSOM", "fit-content(<length>) has no resolved value yet");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record(component, message) {
        tracing::warn!(target: "koala", component, "{message}");
    }
}

/// Emit a debug-only diagnostic.
///
/// Unlike [`warn_once`] these are not deduplicated: they describe a single
/// request (e.g. a style query for a custom property) and are only visible
/// when a subscriber enables `DEBUG` for the `koala` target.
pub fn debug(component: &str, message: &str) {
    tracing::debug!(target: "koala", component, "{message}");
}

/// Returns `true` if this is the first time `message` was recorded for
/// `component`.
///
/// A poisoned lock only means another thread panicked while inserting; the
/// set itself is still usable.
fn record(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

/// Returns `true` if `message` has already been warned about for `component`.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key))
}
