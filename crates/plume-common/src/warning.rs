//! Style warnings with colored terminal output.
//!
//! Provides deduplication so a stylesheet that repeats the same bad
//! declaration on every element only reports it once.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about dropped or unsupported input (prints once per unique message)
///
/// # Example
/// ```
/// plume_common::warning::warn_once("Style", "dropping malformed declaration 'margin 4px'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = warned()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        let line = format!("[Plume {component}] ⚠ {message}");
        eprintln!("{}", line.yellow());
    }
}

/// Returns true if `warn_once` has already reported this message.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    warned()
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings (call when reloading a theme)
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_once_records_message() {
        warn_once("Test", "record me");
        assert!(has_warned("Test", "record me"));
        assert!(!has_warned("Test", "never sent"));
    }

    #[test]
    fn test_component_is_part_of_key() {
        warn_once("Alpha", "shared text");
        assert!(has_warned("Alpha", "shared text"));
        assert!(!has_warned("Beta", "shared text"));
    }
}
