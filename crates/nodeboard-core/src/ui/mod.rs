pub mod canvas;
pub mod event_log_panel;
pub mod settings_panel;

pub use canvas::show_canvas;
pub use event_log_panel::show_event_log_panel;
pub use settings_panel::show_settings_panel;
