use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose lifecycle logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const LOGO_URL: &str =
    "https://winxmarketingmedia.in/wp-content/uploads/2025/06/cropped-COLLABORATIVE-SENIOR-CARE-2.png";

// Loading screen
pub const LOADER_TICK_MS: u32 = 150;
pub const LOADER_MAX_INCREMENT: f64 = 5.0;
pub const LOADER_HIDE_DELAY_MS: u32 = 800;

// Stat count-up
pub const COUNT_UP_DURATION_MS: u32 = 2000;
pub const COUNT_UP_STEP_MS: u32 = 16;

pub const TESTIMONIAL_INTERVAL_MS: u32 = 5000;

pub const CURSOR_TRAIL_CAPACITY: usize = 8;

/// Pixels of vertical scroll before the navigation bar switches to its solid style.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;
/// Scroll fraction past which the back-to-top button shows.
pub const BACK_TO_TOP_THRESHOLD: f64 = 0.1;
/// Width of the "active" window after each timeline anchor, as a scroll fraction.
pub const TIMELINE_ACTIVE_WINDOW: f64 = 0.15;

pub const SMOOTH_SCROLL_DURATION_MS: f64 = 1200.0;
pub const SMOOTH_SCROLL_FRAME_MS: u32 = 16;
