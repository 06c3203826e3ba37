use log::Level;

/// Element the application mounts into.
pub const MOUNT_ROOT_ID: &str = "app";

/// Height of the fixed header that in-page scrolling has to clear.
pub const HEADER_OFFSET: f64 = 80.0;
/// Scroll offset past which the header switches to its "scrolled" look.
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;

pub const HEADER_BG_TOP: &str = "rgba(255, 255, 255, 0.95)";
pub const HEADER_BG_SCROLLED: &str = "rgba(255, 255, 255, 0.98)";
pub const HEADER_SHADOW_TOP: &str = "0 2px 10px rgba(0, 0, 0, 0.1)";
pub const HEADER_SHADOW_SCROLLED: &str = "0 2px 20px rgba(0, 0, 0, 0.1)";

pub const BORDER_NEUTRAL: &str = "#e0e0e0";
pub const BORDER_ERROR: &str = "#e74c3c";
pub const BORDER_SUCCESS: &str = "#27ae60";

// Timer delays in milliseconds.
pub const PREFILL_DELAY_MS: u32 = 500;
pub const RIPPLE_LIFETIME_MS: u32 = 600;
pub const SUCCESS_HIDE_MS: u32 = 5_000;

// Scroll reveal.
pub const REVEAL_SELECTOR: &str = ".feature-card, .testimonial-card, .product-card";
pub const REVEAL_DURATION_SECS: f64 = 0.6;
pub const REVEAL_STAGGER_SECS: f64 = 0.1;
pub const REVEAL_OFFSET_PX: u32 = 20;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // verbose while running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
