//! Tags that select hook behavior.

use cucumber::gherkin::{Feature, Scenario};

/// Tag marking scenarios that need a browser session.
pub const LOGIN_TAG: &str = "feature:login";

/// Tag the runner reads to run a scenario alone. A plain WebDriver server
/// hosts a single session, so browser scenarios carry it.
pub const SERIAL_TAG: &str = "serial";

/// Returns `true` if the feature or scenario carries `tag`.
pub fn has_tag(feature: &Feature, scenario: &Scenario, tag: &str) -> bool {
    feature
        .tags
        .iter()
        .chain(&scenario.tags)
        .any(|t| t.trim_start_matches('@') == tag)
}

/// Returns `true` if the before and after hooks manage a browser session
/// for this scenario.
pub fn needs_browser(feature: &Feature, scenario: &Scenario) -> bool {
    has_tag(feature, scenario, LOGIN_TAG)
}
