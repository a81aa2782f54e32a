//! UI module for Pexelist
//!
//! This module handles all user interface components, rendering, and user interactions.

pub mod components;
pub mod core;
pub mod home_screen;
pub mod layout;
pub mod photos_screen;
pub mod renderer;
pub mod theme;

pub use home_screen::HomeScreen;
pub use layout::LayoutManager;
pub use photos_screen::PhotosScreen;
pub use renderer::run_app;
pub use theme::Theme;
