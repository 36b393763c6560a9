// Tests against the preset files shipped in data/config
use perf_prefs::{load_prefs_file, parse_user_js, LoadOptions, PrefValue, PrefValueExt, Preset};
use std::collections::BTreeSet;
use std::path::Path;

fn keys(preset: Preset) -> BTreeSet<String> {
    preset
        .load()
        .expect("preset should load")
        .keys()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_embedded_presets_match_data_files() {
    for preset in Preset::all() {
        let path = Path::new("data/config").join(preset.file_name());
        let on_disk = std::fs::read_to_string(&path).expect("data file should exist");
        assert_eq!(on_disk, preset.source());

        let from_file = load_prefs_file(&path, &LoadOptions { strict: true }).unwrap();
        assert_eq!(from_file, preset.load().unwrap());
    }
}

#[test]
fn test_preset_sizes() {
    assert_eq!(Preset::Minimum.load().unwrap().len(), 36);
    assert_eq!(Preset::Full.load().unwrap().len(), 20);
}

#[test]
fn test_no_duplicate_declarations_in_presets() {
    for preset in Preset::all() {
        let declarations = parse_user_js(preset.source()).unwrap();
        assert_eq!(declarations.len(), preset.load().unwrap().len());
    }
}

#[test]
fn test_presets_overlap_but_differ() {
    let minimum = keys(Preset::Minimum);
    let full = keys(Preset::Full);

    let shared: Vec<_> = minimum.intersection(&full).collect();
    assert_eq!(shared.len(), 19);

    let only_full: Vec<_> = full.difference(&minimum).collect();
    assert_eq!(only_full, vec!["toolkit.telemetry.server"]);

    for key in [
        "datareporting.policy.dataSubmissionPolicyBypassNotification",
        "toolkit.telemetry.geckoPersistenceTimeout",
        "media.autoplay.default",
        "privacy.reduceTimerPrecision",
    ] {
        assert!(minimum.contains(key), "{} missing from minimum", key);
        assert!(!full.contains(key), "{} unexpected in full", key);
    }
}

#[test]
fn test_commented_out_overrides_are_not_applied() {
    let minimum = Preset::Minimum.load().unwrap();
    assert!(!minimum.contains_key("toolkit.telemetry.server"));
    assert!(!minimum.contains_key("network.dns.disableIPv6"));
    // The active declaration follows a commented-out 60000
    assert_eq!(
        minimum.get("toolkit.telemetry.geckoPersistenceTimeout"),
        Some(&PrefValue::Integer(3000))
    );
}

#[test]
fn test_minimum_values() {
    let prefs = Preset::Minimum.load().unwrap();

    assert_eq!(
        prefs.get("toolkit.telemetry.minSubsessionLength"),
        Some(&PrefValue::Integer(5))
    );
    assert_eq!(
        prefs.get("toolkit.telemetry.idleTimeout").and_then(|v| v.as_i64()),
        Some(10)
    );
    assert_eq!(
        prefs.get("services.sync.telemetry.submissionInterval"),
        Some(&PrefValue::Integer(30))
    );
    assert_eq!(prefs.get("dom.popup_maximum"), Some(&PrefValue::Integer(0)));
    assert_eq!(
        prefs.get("media.allowed-to-play.enabled"),
        Some(&PrefValue::Bool(false))
    );

    for key in [
        "browser.tabs.warnOnClose",
        "browser.tabs.warnOnCloseOtherTabs",
        "browser.tabs.warnOnOpen",
        "browser.warnOnQuit",
        "privacy.reduceTimerPrecision",
        "privacy.resistFingerprinting.reduceTimerPrecision.jitter",
        "privacy.resistFingerprinting.reduceTimerPrecision.microseconds",
    ] {
        assert_eq!(prefs.get(key), Some(&PrefValue::Bool(false)), "{}", key);
    }

    assert!(prefs
        .iter()
        .filter(|e| e.key.starts_with("toolkit.telemetry.") && e.value.is_bool())
        .all(|e| e.value.as_bool() == Some(true)));
}

#[test]
fn test_full_values() {
    let prefs = Preset::Full.load().unwrap();
    assert_eq!(
        prefs.get("toolkit.telemetry.server"),
        Some(&PrefValue::String("https://localhost".to_string()))
    );
    assert_eq!(
        prefs.get("datareporting.policy.dataSubmissionEnabled"),
        Some(&PrefValue::Bool(true))
    );
}

#[test]
fn test_declarations_keep_source_lines() {
    let prefs = Preset::Minimum.load().unwrap();
    let homepage = prefs.entry("browser.startup.homepage").unwrap();
    assert_eq!(homepage.line, 5);
    assert!(homepage.explanation.is_some());
}

#[test]
fn test_every_preset_key_is_explained() {
    for preset in Preset::all() {
        for entry in &preset.load().unwrap() {
            assert!(
                entry.explanation.is_some(),
                "{} has no explanation",
                entry.key
            );
        }
    }
}
