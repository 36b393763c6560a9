use crate::error::{Error, Result};
use crate::types::PrefSet;
use glob::Pattern;

/// Query preferences by glob patterns (OR logic)
///
/// Returns the entries whose key matches any of the provided patterns, in the
/// order they appear in `preferences`.
///
/// # Example
///
/// ```rust
/// use perf_prefs::{load_prefs, query_preferences, LoadOptions};
///
/// let prefs = load_prefs(r#"
///     user_pref("toolkit.telemetry.enabled", true);
///     user_pref("toolkit.telemetry.idleTimeout", 10);
///     user_pref("dom.popup_maximum", 0);
/// "#, &LoadOptions::default())?;
///
/// let telemetry = query_preferences(&prefs, &["toolkit.telemetry.*"])?;
/// assert_eq!(telemetry.len(), 2);
/// # Ok::<(), perf_prefs::Error>(())
/// ```
pub fn query_preferences(preferences: &PrefSet, patterns: &[&str]) -> Result<PrefSet> {
    // Compile all patterns first to fail fast on invalid patterns
    let compiled_patterns: Vec<Pattern> = patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| Error::InvalidGlobPattern(format!("'{}': {}", p, e)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(preferences
        .iter()
        .filter(|entry| {
            compiled_patterns
                .iter()
                .any(|pattern| pattern.matches(&entry.key))
        })
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrefEntry;

    fn create_test_prefs() -> PrefSet {
        vec![
            PrefEntry::new("toolkit.telemetry.enabled", true),
            PrefEntry::new("toolkit.telemetry.unified", true),
            PrefEntry::new("browser.startup.homepage", "about:blank"),
            PrefEntry::new("browser.tabs.warnOnClose", false),
            PrefEntry::new("dom.popup_maximum", 0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_query_single_pattern() {
        let queried = query_preferences(&create_test_prefs(), &["toolkit.*"]).unwrap();
        assert_eq!(queried.len(), 2);
        assert!(queried.contains_key("toolkit.telemetry.enabled"));
        assert!(queried.contains_key("toolkit.telemetry.unified"));
    }

    #[test]
    fn test_query_multiple_patterns_or_logic() {
        let queried =
            query_preferences(&create_test_prefs(), &["toolkit.*", "dom.popup_maximum"]).unwrap();
        assert_eq!(queried.len(), 3);
        assert!(queried.contains_key("dom.popup_maximum"));
    }

    #[test]
    fn test_query_preserves_order() {
        let queried = query_preferences(&create_test_prefs(), &["*"]).unwrap();
        let keys: Vec<_> = queried.keys().collect();
        assert_eq!(keys[0], "toolkit.telemetry.enabled");
        assert_eq!(keys[4], "dom.popup_maximum");
    }

    #[test]
    fn test_query_no_matches() {
        let queried = query_preferences(&create_test_prefs(), &["nonexistent.*"]).unwrap();
        assert!(queried.is_empty());
    }

    #[test]
    fn test_query_invalid_pattern() {
        let result = query_preferences(&create_test_prefs(), &["[invalid"]);
        assert!(matches!(result, Err(Error::InvalidGlobPattern(_))));
    }
}
