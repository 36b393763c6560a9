//! Explanations for the preferences used by the bundled presets
//!
//! Explanations are stored in a static HashMap for efficient lookup and are
//! attached to entries as they are parsed.

use std::collections::HashMap;
use std::sync::OnceLock;

static PREF_EXPLANATIONS: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

/// Get the explanation for a preference key, if one is documented
pub(crate) fn get_preference_explanation_static(key: &str) -> Option<&'static str> {
    PREF_EXPLANATIONS
        .get_or_init(|| {
            HashMap::from([
                (
                    "browser.startup.homepage",
                    "Page opened at startup. about:blank keeps startup free of network and rendering work.",
                ),
                (
                    "browser.tabs.warnOnClose",
                    "When true, asks for confirmation before closing a window with several tabs.",
                ),
                (
                    "browser.tabs.warnOnCloseOtherTabs",
                    "When true, asks for confirmation before closing all other tabs.",
                ),
                (
                    "browser.tabs.warnOnOpen",
                    "When true, warns before opening a large number of tabs at once.",
                ),
                (
                    "browser.warnOnQuit",
                    "When true, asks for confirmation before quitting the browser.",
                ),
                (
                    "services.sync.prefs.sync.browser.tabs.warnOnClose",
                    "Whether Sync copies browser.tabs.warnOnClose between devices.",
                ),
                (
                    "services.sync.prefs.sync.browser.tabs.warnOnOpen",
                    "Whether Sync copies browser.tabs.warnOnOpen between devices.",
                ),
                (
                    "network.dns.disableIPv6",
                    "When true, DNS lookups skip IPv6 addresses.",
                ),
                (
                    "datareporting.policy.dataSubmissionEnabled",
                    "Master switch for submitting data reporting pings.",
                ),
                (
                    "datareporting.policy.dataSubmissionPolicyBypassNotification",
                    "When true, data submission does not wait for the privacy policy notification.",
                ),
                (
                    "toolkit.telemetry.enabled",
                    "Enables collection of extended (prerelease) telemetry data.",
                ),
                (
                    "toolkit.telemetry.unified",
                    "Enables unified telemetry, where one set of pings carries all measurements.",
                ),
                (
                    "toolkit.telemetry.archive.enabled",
                    "When true, sent pings are archived locally in the profile.",
                ),
                (
                    "toolkit.telemetry.reportingpolicy.firstRun",
                    "Marks the session as the first run for the reporting policy.",
                ),
                (
                    "toolkit.telemetry.shutdownPingSender.enabled",
                    "Sends the shutdown ping through the ping sender process.",
                ),
                (
                    "toolkit.telemetry.shutdownPingSender.enabledFirstSession",
                    "Allows the ping sender to send the shutdown ping in the first session.",
                ),
                (
                    "toolkit.telemetry.firstShutdownPing.enabled",
                    "Sends a dedicated first-shutdown ping at the end of the first session.",
                ),
                (
                    "toolkit.telemetry.healthping.enabled",
                    "Enables the health ping that reports telemetry delivery failures.",
                ),
                (
                    "toolkit.telemetry.prioping.enabled",
                    "Enables the priority ping sent on urgent events.",
                ),
                (
                    "toolkit.telemetry.server",
                    "Base URL that telemetry pings are submitted to.",
                ),
                (
                    "toolkit.telemetry.minSubsessionLength",
                    "Minimum subsession length in seconds before a new subsession may be split.",
                ),
                (
                    "toolkit.telemetry.idleTimeout",
                    "Seconds of user inactivity before telemetry treats the session as idle.",
                ),
                (
                    "services.sync.telemetry.submissionInterval",
                    "Seconds between Sync telemetry submissions.",
                ),
                (
                    "toolkit.telemetry.isGeckoViewMode",
                    "Runs telemetry in GeckoView mode, persisting measurements to disk periodically.",
                ),
                (
                    "toolkit.telemetry.geckoPersistenceTimeout",
                    "Milliseconds between GeckoView telemetry persistence flushes.",
                ),
                (
                    "dom.performance.time_to_non_blank_paint.enabled",
                    "Records the time to first non-blank paint.",
                ),
                (
                    "dom.performance.time_to_dom_content_flushed.enabled",
                    "Records the time until DOMContentLoaded content is flushed.",
                ),
                (
                    "dom.performance.time_to_first_interactive.enabled",
                    "Records the time to first interactive.",
                ),
                (
                    "dom.performance.time_to_contentful_paint.enabled",
                    "Records the time to first contentful paint.",
                ),
                (
                    "dom.enable_performance",
                    "Exposes the window.performance API to pages.",
                ),
                (
                    "dom.enable_performance_navigation_timing",
                    "Exposes Navigation Timing Level 2 entries.",
                ),
                (
                    "dom.enable_resource_timing",
                    "Exposes Resource Timing entries.",
                ),
                (
                    "media.autoplay.default",
                    "Default autoplay policy: 0 allows, 1 blocks audible autoplay, 5 blocks all.",
                ),
                (
                    "media.allowed-to-play.enabled",
                    "Exposes the allowedToPlay attribute on media elements.",
                ),
                (
                    "dom.popup_maximum",
                    "Maximum number of popups a page may open. 0 disables the limit.",
                ),
                (
                    "privacy.reduceTimerPrecision",
                    "When true, clamps timer precision as a fingerprinting defense. Disable for benchmarking.",
                ),
                (
                    "privacy.resistFingerprinting.reduceTimerPrecision.jitter",
                    "When true, adds jitter to clamped timers.",
                ),
                (
                    "privacy.resistFingerprinting.reduceTimerPrecision.microseconds",
                    "Timer clamping granularity in microseconds.",
                ),
            ])
        })
        .get(key)
        .copied()
}
