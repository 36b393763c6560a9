//! Preference presets shipped with the crate
//!
//! Both files under `data/config/` are embedded at compile time. They are
//! independent: nothing here merges them or ranks one above the other.

use crate::error::{Error, Result};
use crate::loader::{load_prefs, LoadOptions};
use crate::types::PrefSet;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const MINIMUM_USER_JS: &str = include_str!("../data/config/minimum-user.js");
const USER_JS: &str = include_str!("../data/config/user.js");

/// A bundled user.js preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// `minimum-user.js`
    Minimum,
    /// `user.js`
    Full,
}

impl Preset {
    pub fn all() -> [Preset; 2] {
        [Preset::Minimum, Preset::Full]
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Minimum => "minimum",
            Preset::Full => "full",
        }
    }

    /// File name of the preset under `data/config/`
    pub fn file_name(self) -> &'static str {
        match self {
            Preset::Minimum => "minimum-user.js",
            Preset::Full => "user.js",
        }
    }

    /// Original file text, comments included
    pub fn source(self) -> &'static str {
        match self {
            Preset::Minimum => MINIMUM_USER_JS,
            Preset::Full => USER_JS,
        }
    }

    /// Parse the preset; the shipped files never repeat a key
    pub fn load(self) -> Result<PrefSet> {
        load_prefs(self.source(), &LoadOptions { strict: true })
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Preset::all()
            .into_iter()
            .find(|p| p.name() == s || p.file_name() == s)
            .ok_or_else(|| Error::UnknownPreset(s.to_string()))
    }
}
