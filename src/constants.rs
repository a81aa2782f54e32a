//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Button labels
pub const BUTTON_ARTIST_LINK: &str = "Artist Link";
pub const BUTTON_PHOTO_LINK: &str = "Photo Link";

// Search input
pub const SEARCH_PLACEHOLDER: &str = "Search photos";
pub const SEARCH_TITLE: &str = " Search ";
pub const PHOTOS_TITLE: &str = " Photos ";

// Status line hints
pub const HINT_SEARCH_FOCUSED: &str = "Type to search • Tab: results • ↑/↓: move • Esc: quit";
pub const HINT_LIST_FOCUSED: &str =
    "Enter/Space: details • a: artist link • p: photo link • Tab/Esc: search • q: quit";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const ERROR_NO_API_KEY: &str = "❌ Error: PEXELS_API_KEY environment variable not set";

// Log Messages
pub const LOG_SEARCH_STARTED: &str = "Search: querying";
pub const LOG_SEARCH_SUPERSEDED: &str = "Search: aborting superseded request";
pub const LOG_SEARCH_FAILED: &str = "❌ Search failed";
pub const LOG_OPEN_URI_FAILED: &str = "❌ Failed to open URI";

// Configuration bounds
/// Pexels caps `per_page` at 80
pub const PER_PAGE_MIN: u32 = 1;
pub const PER_PAGE_MAX: u32 = 80;
pub const TICK_RATE_MIN_MS: u64 = 10;
pub const TICK_RATE_MAX_MS: u64 = 1000;
pub const CARD_SPACING_MAX: u16 = 3;

// UI Layout Constants
/// Rows taken by the bordered search input
pub const SEARCH_INPUT_HEIGHT: u16 = 3;
