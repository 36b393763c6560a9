use crate::cli::{InstallTarget, OutputType, SourceArgs};
use anyhow::{anyhow, Context};
use perf_prefs::{
    find_profile_path, install_preset, list_profiles as list_profiles_impl, load_prefs,
    load_prefs_file, query_preferences, to_user_js, LoadOptions, PrefEntry, PrefSet, PrefValue,
    Preset,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

fn load_source(source: &SourceArgs, options: &LoadOptions) -> anyhow::Result<PrefSet> {
    match (&source.preset, &source.file) {
        (Some(preset), _) => {
            debug!(preset = %preset, file = preset.file_name(), "loading bundled preset");
            load_prefs(preset.source(), options)
                .with_context(|| format!("Failed to load preset '{}'", preset))
        }
        (None, Some(path)) => load_prefs_file(path, options).with_context(|| {
            format!(
                "Failed to load {}. The file may be missing or not valid user.js syntax.",
                path.display()
            )
        }),
        (None, None) => Err(anyhow!("Either a preset or --file is required")),
    }
}

/// Print the resolved preferences as JSON
pub fn show(
    source: &SourceArgs,
    queries: &[String],
    output: OutputType,
    strict: bool,
) -> anyhow::Result<()> {
    println!("{}", render_show(source, queries, output, strict)?);
    Ok(())
}

fn render_show(
    source: &SourceArgs,
    queries: &[String],
    output: OutputType,
    strict: bool,
) -> anyhow::Result<String> {
    let preferences = load_source(source, &LoadOptions { strict })?;

    let selected = if queries.is_empty() {
        preferences
    } else {
        let patterns: Vec<&str> = queries.iter().map(String::as_str).collect();
        query_preferences(&preferences, &patterns).context("Failed to apply query")?
    };

    let json = match output {
        OutputType::JsonObject => serde_json::to_string_pretty(&selected)?,
        OutputType::JsonArray => {
            let entries: Vec<&PrefEntry> = selected.iter().collect();
            serde_json::to_string_pretty(&entries)?
        }
    };
    Ok(json)
}

/// Print one preference value in raw form
pub fn get(key: &str, source: &SourceArgs) -> anyhow::Result<()> {
    println!("{}", render_get(key, source)?);
    Ok(())
}

fn render_get(key: &str, source: &SourceArgs) -> anyhow::Result<String> {
    let preferences = load_source(source, &LoadOptions::default())?;
    match preferences.get(key) {
        Some(PrefValue::String(s)) => Ok(s.clone()),
        Some(value) => Ok(value.to_string()),
        None => Err(anyhow!("Preference '{}' not found", key)),
    }
}

/// Parse a file and report how many preferences it resolves to
pub fn check(path: &Path, strict: bool) -> anyhow::Result<()> {
    println!("{}", render_check(path, strict)?);
    Ok(())
}

fn render_check(path: &Path, strict: bool) -> anyhow::Result<String> {
    let preferences = load_prefs_file(path, &LoadOptions { strict })
        .with_context(|| format!("{} is not a valid user.js", path.display()))?;
    Ok(format!("{}: {} preferences", path.display(), preferences.len()))
}

/// Print a file re-serialized in canonical form
pub fn normalize(path: &Path, strict: bool) -> anyhow::Result<()> {
    print!("{}", render_normalize(path, strict)?);
    Ok(())
}

fn render_normalize(path: &Path, strict: bool) -> anyhow::Result<String> {
    let preferences = load_prefs_file(path, &LoadOptions { strict })
        .with_context(|| format!("Failed to load {}", path.display()))?;
    Ok(to_user_js(&preferences))
}

/// List all available browser profiles
pub fn list_profiles(profiles_dir: Option<&Path>) -> anyhow::Result<()> {
    let profiles = list_profiles_impl(profiles_dir)
        .context("Failed to list profiles. Make sure the browser is installed.")?;

    let json = serde_json::to_string_pretty(&profiles)?;
    println!("{}", json);
    Ok(())
}

/// Write a preset into the selected profile directory
pub fn install(
    preset: Preset,
    target: &InstallTarget,
    profiles_dir: Option<&Path>,
    force: bool,
) -> anyhow::Result<()> {
    let written = install_into(preset, target, profiles_dir, force)?;
    info!(path = %written.display(), "done");
    println!("{}", written.display());
    Ok(())
}

fn install_into(
    preset: Preset,
    target: &InstallTarget,
    profiles_dir: Option<&Path>,
    force: bool,
) -> anyhow::Result<PathBuf> {
    let profile_dir = match (&target.profile, &target.dir) {
        (Some(name), _) => find_profile_path(name, profiles_dir).with_context(|| {
            format!(
                "Failed to find profile '{}'. Use 'perf-prefs profiles' to see available profiles.",
                name
            )
        })?,
        (None, Some(dir)) => dir.clone(),
        (None, None) => return Err(anyhow!("Either --profile or --dir is required")),
    };

    match install_preset(preset, &profile_dir, force) {
        Err(perf_prefs::Error::UserJsExists(path)) => Err(anyhow!(
            "{} already exists. Pass --force to replace it.",
            path.display()
        )),
        other => other.with_context(|| format!("Failed to install preset '{}'", preset)),
    }
}
