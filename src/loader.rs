//! Resolving declarations into a [`PrefSet`]
//!
//! Declarations are applied in file order. By default a repeated key silently
//! takes the value of its last occurrence; [`LoadOptions::strict`] turns a
//! repeat into [`Error::DuplicateKey`].

use crate::error::{Error, Result};
use crate::parser::parse_user_js;
use crate::types::PrefSet;
use std::path::Path;
use tracing::debug;

/// Options controlling how declarations are resolved
///
/// # Example
///
/// ```rust
/// use perf_prefs::{load_prefs, LoadOptions};
///
/// let content = r#"
///     user_pref("dom.popup_maximum", 20);
///     user_pref("dom.popup_maximum", 0);
/// "#;
///
/// let prefs = load_prefs(content, &LoadOptions::default())?;
/// assert_eq!(prefs.len(), 1);
///
/// assert!(load_prefs(content, &LoadOptions { strict: true }).is_err());
/// # Ok::<(), perf_prefs::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Fail on the second declaration of a key instead of overriding it
    pub strict: bool,
}

/// Parse user.js content and resolve it into a [`PrefSet`]
pub fn load_prefs(content: &str, options: &LoadOptions) -> Result<PrefSet> {
    let mut set = PrefSet::new();

    for entry in parse_user_js(content)? {
        if let Some(previous) = set.entry(&entry.key) {
            if options.strict {
                return Err(Error::DuplicateKey {
                    key: entry.key,
                    first_line: previous.line,
                    line: entry.line,
                });
            }
            debug!(
                key = %entry.key,
                previous_line = previous.line,
                line = entry.line,
                "preference overridden by later declaration"
            );
        }
        set.insert(entry);
    }

    Ok(set)
}

/// Read and resolve a user.js file
pub fn load_prefs_file(path: &Path, options: &LoadOptions) -> Result<PrefSet> {
    let content = std::fs::read_to_string(path)?;
    let set = load_prefs(&content, options)?;
    debug!(path = %path.display(), count = set.len(), "loaded preferences");
    Ok(set)
}
