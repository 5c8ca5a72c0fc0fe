// Tuning knobs for the page. There is no runtime configuration; everything is
// baked in at compile time.

/// Offset added to `scroll_y` when probing which section the viewport is in,
/// so the nav highlight flips slightly before a section's top edge hits y=0.
pub const NAV_SCROLL_OFFSET: f64 = 100.0;

/// Simulated review delay between submitting the application and the modal
/// closing with the confirmation notice.
pub const SUBMIT_REVIEW_DELAY_MS: u32 = 2_000;

pub const LOGO_PATH: &str = "/finstamp-logo.png";

pub const CONTACT_EMAIL: &str = "hello@finstamp.global";
pub const CONTACT_LOCATION: &str = "San Francisco, CA";
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";
