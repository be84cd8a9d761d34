pub mod app;
pub mod config;
pub mod errors;
pub mod io;
pub mod layout;
pub mod model;
pub mod store;
pub mod ui;

// Internal modules
pub mod actions;
pub mod event;

// Re-export commonly used types
pub use app::{AppMode, AppState};
pub use config::AppConfig;
pub use layout::{LayoutMode, Position};
pub use model::{Node, NodeId};
pub use store::TreeStore;
