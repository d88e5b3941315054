use std::time::Duration;

/// Year the bundle was built, captured by build.rs.
pub const BUILD_YEAR: &str = env!("BUILD_YEAR");

pub const DEFAULT_CONSULTATION_ID: &str = "general-consultation";

pub const CALENDLY_SCRIPT_URL: &str = "https://assets.calendly.com/assets/external/widget.js";
pub const CALENDLY_SCRIPT_ID: &str = "calendly-widget-script";
pub const CALENDLY_CONTAINER_ID: &str = "calendly-inline-widget";

/// How long the scheduling script may take before the modal offers a retry.
pub const SCRIPT_LOAD_TIMEOUT: Duration = Duration::from_secs(15);

pub fn build_year() -> Option<i32> {
    BUILD_YEAR.parse().ok()
}
