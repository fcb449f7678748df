//! UI Components
//!
//! Reusable Leptos components shared by the views.

pub mod chart;
pub mod loading;
pub mod sidebar;
pub mod tile_map;
pub mod toast;
pub mod typing_text;

pub use chart::BarChart;
pub use loading::{Loading, LoadingOverlay, LoadingText, TypingDots};
pub use sidebar::Sidebar;
pub use tile_map::{default_viewport, TileMap};
pub use toast::Toast;
pub use typing_text::TypingText;
