//! Pexelist - A Terminal User Interface (TUI) for searching Pexels photos
//!
//! One screen: a search input above a scrollable list of photo cards. Each
//! card expands to show the photo's description, its average color and links
//! to the photographer and the photo page.
//!
//! # Modules
//!
//! * [`backend`] - Photo provider trait and the Pexels client
//! * [`config`] - Application configuration management
//! * [`photos`] - Photo records and the feed the UI observes
//! * [`view_model`] - Query state and background searches
//! * [`ui`] - Terminal user interface components
//! * [`uri`] - Opening outbound links

/// Photo provider abstraction and implementations
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// File logging setup
pub mod logger;

/// Photo data model and latest-value feed
pub mod photos;

/// Terminal user interface components and rendering
pub mod ui;

/// Platform link opening
pub mod uri;

/// Utility functions for colors and other helpers
pub mod utils;

/// Search state owner feeding the photos screen
pub mod view_model;

pub use photos::{Photo, PhotoFeed};
