//! Reusable UI components

pub mod avatar;
pub mod detail_panel;
pub mod photo_card;
pub mod photo_list;
pub mod scrollbar_helper;
pub mod search_input;

// Component exports
pub use avatar::Avatar;
pub use detail_panel::{DetailButton, DetailPanel};
pub use photo_card::{CardHit, PhotoCard};
pub use photo_list::PhotoList;
pub use search_input::SearchInput;
