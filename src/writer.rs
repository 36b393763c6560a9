//! Serializing a [`PrefSet`] back to user.js syntax
//!
//! Output is one `user_pref(...)` line per entry in set order, with strings
//! double-quoted. Comments and the original quote style are not kept, but
//! loading the output again yields an identical set.

use crate::types::{PrefSet, PrefValue};

/// Render a set as user.js text
///
/// # Example
///
/// ```rust
/// use perf_prefs::{load_prefs, to_user_js, LoadOptions};
///
/// let set = load_prefs("user_pref('browser.startup.homepage', 'about:blank');", &LoadOptions::default())?;
/// assert_eq!(to_user_js(&set), "user_pref(\"browser.startup.homepage\", \"about:blank\");\n");
/// # Ok::<(), perf_prefs::Error>(())
/// ```
pub fn to_user_js(set: &PrefSet) -> String {
    write_user_js(set, None)
}

/// Render a set as user.js text, preceded by `header` as `//` comments
pub fn write_user_js(set: &PrefSet, header: Option<&str>) -> String {
    let mut out = String::new();

    if let Some(header) = header {
        for line in header.lines() {
            if line.is_empty() {
                out.push_str("//\n");
            } else {
                out.push_str("// ");
                out.push_str(line);
                out.push('\n');
            }
        }
        out.push('\n');
    }

    for entry in set {
        out.push_str("user_pref(");
        push_quoted(&mut out, &entry.key);
        out.push_str(", ");
        match &entry.value {
            PrefValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            PrefValue::Integer(n) => out.push_str(&n.to_string()),
            PrefValue::String(s) => push_quoted(&mut out, s),
        }
        out.push_str(");\n");
    }

    out
}

fn push_quoted(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}
