//! # perf-prefs
//!
//! Browser preference presets for performance testing, plus the small loader
//! that reads them.
//!
//! The crate ships two user.js files (`minimum-user.js` and `user.js`) that
//! prepare a browser profile for perf runs: they silence tab and quit
//! warnings, switch extended telemetry on, and turn off timer-precision
//! fuzzing. Each file is a flat list of declarations:
//!
//! ```text
//! user_pref("<dotted.name>", <value>);
//! ```
//!
//! where `<value>` is `true`/`false`, a decimal integer, or a single- or
//! double-quoted string. `//` and `/* */` comments are ignored.
//!
//! ## Loading Preferences
//!
//! ```rust
//! use perf_prefs::{load_prefs, LoadOptions, PrefValue};
//!
//! let content = r#"
//!     // Telemetry
//!     user_pref("toolkit.telemetry.minSubsessionLength", 5);
//!     user_pref("browser.startup.homepage", 'about:blank');
//! "#;
//!
//! let prefs = load_prefs(content, &LoadOptions::default())?;
//! assert_eq!(prefs.get("toolkit.telemetry.minSubsessionLength"), Some(&PrefValue::Integer(5)));
//! assert_eq!(
//!     prefs.get("browser.startup.homepage"),
//!     Some(&PrefValue::String("about:blank".to_string()))
//! );
//! # Ok::<(), perf_prefs::Error>(())
//! ```
//!
//! Later declarations of the same name override earlier ones. Pass
//! `LoadOptions { strict: true }` to reject repeats with
//! [`Error::DuplicateKey`] instead.
//!
//! ## Bundled Presets
//!
//! ```rust
//! use perf_prefs::{Preset, PrefValueExt};
//!
//! let prefs = Preset::Minimum.load()?;
//! let jitter = prefs.get("privacy.resistFingerprinting.reduceTimerPrecision.jitter");
//! assert_eq!(jitter.and_then(|v| v.as_bool()), Some(false));
//! # Ok::<(), perf_prefs::Error>(())
//! ```
//!
//! ## Installing Into a Profile
//!
//! ```rust,no_run
//! use perf_prefs::{find_profile_path, install_preset, Preset};
//!
//! let profile = find_profile_path("perf", None)?;
//! let written = install_preset(Preset::Full, &profile, false)?;
//! println!("wrote {}", written.display());
//! # Ok::<(), perf_prefs::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use perf_prefs::{parse_user_js, Error};
//!
//! match parse_user_js("user_pref(invalid syntax") {
//!     Ok(_) => println!("Parsed successfully"),
//!     Err(Error::Parser { line, column, message }) => {
//!         eprintln!("Parse error at {}:{}: {}", line, column, message);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

pub use types::{PrefEntry, PrefSet, PrefValue, PrefValueExt};

pub use error::{Error, Result};

pub use loader::{load_prefs, load_prefs_file, LoadOptions};
pub use parser::{parse_user_js, parse_user_js_file};
pub use presets::Preset;
pub use profile::{
    find_profile_path, get_profiles_directory, get_user_js_path, install_preset, list_profiles,
    ProfileInfo,
};
pub use query::query_preferences;
pub use writer::{to_user_js, write_user_js};

mod error;
mod explanations;
mod lexer;
mod loader;
mod parser;
mod presets;
mod profile;
mod query;
mod types;
mod writer;
