//! Locating browser profiles and dropping a preset into one
//!
//! Profiles are discovered through `profiles.ini` in the profiles directory,
//! falling back to a directory scan. Installing a preset writes its original
//! file text as `user.js` in the profile directory, where the browser applies
//! it at startup.

use crate::error::{Error, Result};
use crate::presets::Preset;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Profile information parsed from profiles.ini
#[derive(Debug, Clone, Serialize)]
pub struct ProfileInfo {
    pub name: String,
    pub path: PathBuf,
    pub is_default: bool,
    pub is_relative: bool,
}

impl ProfileInfo {
    /// Absolute profile directory, resolved against the profiles directory
    pub fn full_path(&self, profiles_dir: &Path) -> PathBuf {
        if self.is_relative {
            profiles_dir.join(&self.path)
        } else {
            self.path.clone()
        }
    }
}

/// Find a profile directory by profile name
///
/// Lookup order:
/// 1. Exact `Name=` match in profiles.ini
/// 2. For `"default"`, the profile marked `Default=1`
/// 3. A directory named `name` or `*.name` in the profiles directory
pub fn find_profile_path(profile_name: &str, profiles_dir_opt: Option<&Path>) -> Result<PathBuf> {
    let profiles_dir = get_profiles_directory(profiles_dir_opt)?;
    let profiles_ini = profiles_dir.join("profiles.ini");

    if profiles_ini.exists() {
        match parse_profiles_ini(&profiles_ini) {
            Ok(profiles) => {
                let by_name = profiles.iter().find(|p| p.name == profile_name);
                let by_default = || {
                    (profile_name == "default")
                        .then(|| profiles.iter().find(|p| p.is_default))
                        .flatten()
                };

                for profile in by_name.into_iter().chain(by_default()) {
                    let full_path = profile.full_path(&profiles_dir);
                    if full_path.is_dir() {
                        debug!(profile = %profile.name, path = %full_path.display(), "resolved profile from profiles.ini");
                        return Ok(full_path);
                    }
                }
            }
            Err(e) => warn!("{}; falling back to directory scan", e),
        }
    }

    scan_profiles_directory(&profiles_dir, profile_name)
}

/// Parse profiles.ini to extract profile information
fn parse_profiles_ini(ini_path: &Path) -> Result<Vec<ProfileInfo>> {
    let content = std::fs::read_to_string(ini_path)?;
    parse_profiles_ini_content(content)
}

fn parse_profiles_ini_content(content: String) -> Result<Vec<ProfileInfo>> {
    use configparser::ini::Ini;

    let mut ini = Ini::new();
    ini.read(content).map_err(Error::ProfilesIniParse)?;

    let mut profiles = Vec::new();

    // configparser lowercases section names and keeps them in a HashMap
    let mut sections: Vec<(u32, String)> = ini
        .sections()
        .into_iter()
        .filter_map(|sec_name| {
            let index = sec_name.strip_prefix("profile")?.parse::<u32>().ok()?;
            Some((index, sec_name))
        })
        .collect();
    sections.sort();

    for (_, sec_name) in sections {
        let name = ini.get(&sec_name, "Name").unwrap_or_default();
        let path_str = ini.get(&sec_name, "Path").unwrap_or_default();
        let is_relative = ini
            .getuint(&sec_name, "IsRelative")
            .ok()
            .flatten()
            .unwrap_or(1)
            == 1;
        let is_default = ini
            .getuint(&sec_name, "Default")
            .ok()
            .flatten()
            .unwrap_or(0)
            == 1;

        if !name.is_empty() && !path_str.is_empty() {
            profiles.push(ProfileInfo {
                name,
                path: PathBuf::from(path_str),
                is_default,
                is_relative,
            });
        }
    }

    Ok(profiles)
}

/// Scan the profiles directory for `name` or the standard `xxxxxxxx.name`
fn scan_profiles_directory(profiles_dir: &Path, profile_name: &str) -> Result<PathBuf> {
    let mut matches: Vec<PathBuf> = Vec::new();
    let suffix = format!(".{}", profile_name);

    for search_dir in [profiles_dir.to_path_buf(), profiles_dir.join("Profiles")] {
        if !search_dir.is_dir() {
            continue;
        }
        for entry in std::fs::read_dir(&search_dir)? {
            let path = entry?.path();
            if !path.is_dir() {
                continue;
            }
            let dir_name = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
            if dir_name == profile_name {
                return Ok(path);
            }
            if dir_name.ends_with(&suffix) {
                matches.push(path);
            }
        }
    }

    match matches.len() {
        0 => Err(Error::ProfileNotFound {
            name: profile_name.to_string(),
            directory: profiles_dir.to_path_buf(),
        }),
        1 => Ok(matches.remove(0)),
        _ => {
            let candidates: Vec<&str> = matches
                .iter()
                .filter_map(|p| p.file_name().and_then(|s| s.to_str()))
                .collect();
            Err(Error::AmbiguousProfile {
                name: profile_name.to_string(),
                candidates: candidates.join(", "),
            })
        }
    }
}

/// List all profiles declared in profiles.ini
pub fn list_profiles(profiles_dir_opt: Option<&Path>) -> Result<Vec<ProfileInfo>> {
    let profiles_dir = get_profiles_directory(profiles_dir_opt)?;
    let profiles_ini = profiles_dir.join("profiles.ini");

    if !profiles_ini.exists() {
        return Err(Error::ProfilesIniParse(format!(
            "profiles.ini not found at {}",
            profiles_ini.display()
        )));
    }

    parse_profiles_ini(&profiles_ini)
}

/// Get the profiles directory path from a manual path, env var, or OS default
///
/// Priority:
/// 1. Manual path provided via CLI or parameter
/// 2. MOZ_PROFILES_DIR environment variable
/// 3. Auto-detection based on OS
pub fn get_profiles_directory(manual_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = manual_path {
        return validate_directory(path);
    }

    if let Ok(env_path) = std::env::var("MOZ_PROFILES_DIR") {
        return validate_directory(Path::new(&env_path));
    }

    validate_directory(&auto_detect_profiles_directory()?)
}

fn validate_directory(path: &Path) -> Result<PathBuf> {
    if !path.is_dir() {
        return Err(Error::InvalidProfileDirectory(path.to_path_buf()));
    }
    Ok(path.to_path_buf())
}

fn auto_detect_profiles_directory() -> Result<PathBuf> {
    #[cfg(target_os = "windows")]
    let (var, relative) = ("APPDATA", "Mozilla/Firefox");
    #[cfg(target_os = "macos")]
    let (var, relative) = ("HOME", "Library/Application Support/Firefox");
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let (var, relative) = ("HOME", ".mozilla/firefox");

    let base = std::env::var(var).map_err(|_| {
        Error::InvalidProfileDirectory(PathBuf::from(format!("${}/{}", var, relative)))
    })?;
    Ok(PathBuf::from(base).join(relative))
}

/// Path of the user.js the browser reads from a profile directory
pub fn get_user_js_path(profile_path: &Path) -> PathBuf {
    profile_path.join("user.js")
}

/// Write `preset` as `user.js` in `profile_dir`
///
/// An existing user.js is only replaced when `overwrite` is set; its contents
/// are never merged with the preset.
pub fn install_preset(preset: Preset, profile_dir: &Path, overwrite: bool) -> Result<PathBuf> {
    let profile_dir = validate_directory(profile_dir)?;
    let target = get_user_js_path(&profile_dir);

    if target.exists() && !overwrite {
        return Err(Error::UserJsExists(target));
    }

    std::fs::write(&target, preset.source())?;
    info!(preset = %preset, path = %target.display(), "installed preset");
    Ok(target)
}
