//! Pages
//!
//! One top-level view per route.

pub mod chatbot;
pub mod dengue_map;
pub mod history;
pub mod overview;
pub mod rainfall_map;
pub mod settings;

pub use chatbot::Chatbot;
pub use dengue_map::DengueMap;
pub use history::History;
pub use overview::Overview;
pub use rainfall_map::RainfallMap;
pub use settings::Settings;
