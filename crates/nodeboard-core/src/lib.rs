// Nodeboard Core Library
// Re-export all modules for external use

pub mod app;
pub mod board;
pub mod composables;
pub mod display;
pub mod project;
pub mod ui;

// Re-export NodeBoardApp from app module
pub use app::NodeBoardApp;
