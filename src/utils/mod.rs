//! Utility modules for the Pexelist application.
//!
//! - [`color`] - Theme color parsing and photo average-color handling

pub mod color;
