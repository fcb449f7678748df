//! State Management
//!
//! Shared UI state, the selected route and the chat session model.

pub mod chat;
pub mod global;
pub mod route;

pub use chat::{ChatEntry, ChatRole, ChatSession};
pub use global::{provide_global_state, GlobalState};
pub use route::Route;
