pub mod event_log;
pub mod grid;

// Re-export the main types for easy access
pub use event_log::{EventEntry, EventLog};
pub use grid::{draw_grid, grid_status, GridSettings, GridStatus};
