/// Media condition that defines the mobile layout.
pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 768px)";

/// Visual buffer under the header when deciding section activity and when
/// positioning anchor scrolls.
pub const SCROLL_LOOKAHEAD_PX: f64 = 8.0;

/// CSS custom property consulted while the header has no rendered height.
pub const HEADER_HEIGHT_VAR: &str = "--header-h";

pub const SCROLL_THROTTLE_MS: u32 = 100;
pub const HEADER_OFFSET_DEBOUNCE_MS: u32 = 120;
pub const TRACKER_RESIZE_DEBOUNCE_MS: u32 = 150;

/// Fraction of a reveal-flagged element that must intersect the viewport
/// before it shows.
pub const REVEAL_THRESHOLD: f64 = 0.12;

/// Duration of the page loader's fade before it is removed from flow.
pub const LOADER_FADE_MS: u32 = 300;
