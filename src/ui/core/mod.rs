//! Core UI functionality for the Pexelist application.
//!
//! This module contains the building blocks every screen and component uses:
//!
//! - [`actions`] - Action definitions returned by components
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling and frame timing
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** describe what an input meant, bubbling up to the screen
//! 3. **Events** are read from the terminal through the [`EventHandler`]

pub mod actions;
pub mod component;
pub mod event_handler;

// Re-export core types for easier access from other modules
pub use actions::{Action, Focus};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
