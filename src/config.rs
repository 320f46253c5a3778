//! Site-wide constants. Server address and asset paths come from the
//! `[package.metadata.leptos]` table instead.

use chrono::{DateTime, Datelike, Utc};

/// Form relay that forwards contact submissions by email.
pub const CONTACT_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Public relay key, set at compile time with `CONTACT_ACCESS_KEY`.
pub const CONTACT_ACCESS_KEY: &str = match option_env!("CONTACT_ACCESS_KEY") {
    Some(key) => key,
    None => "YOUR_ACCESS_KEY_HERE",
};

pub const ROTATION_INTERVAL_MS: u64 = 5_000;

pub const TYPE_SPEED_MS: u64 = 150;
pub const DELETE_SPEED_MS: u64 = 50;
pub const HOLD_MS: u64 = 1_500;

/// Scroll offset after which the navbar turns translucent.
pub const NAV_SCROLL_THRESHOLD: f64 = 0.0;
pub const GO_TO_TOP_THRESHOLD: f64 = 300.0;

/// In-page anchors shown in the navbar, in order.
pub const SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

/// RFC 3339 timestamp written by `build.rs`.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// Year the site was built, for the footer copyright line.
pub fn copyright_year() -> i32 {
    year_of(BUILD_TIME).unwrap_or_else(|| Utc::now().year())
}

fn year_of(timestamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|t| t.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_of() {
        assert_eq!(year_of("2025-03-14T09:26:53.589+00:00"), Some(2025));
        assert_eq!(year_of("not a date"), None);
    }

    #[test]
    fn test_build_time_is_stamped() {
        assert!(year_of(BUILD_TIME).is_some());
        assert!(copyright_year() >= 2024);
    }

    #[test]
    fn test_sections_have_unique_anchors() {
        let mut ids = SECTIONS.iter().map(|(id, _)| *id).collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SECTIONS.len());
        assert_eq!(SECTIONS[0].0, "home");
    }
}
