use egui::ViewportBuilder;

use nodeboard_core::NodeBoardApp;

/// The main function is the entry point of the application.
///
/// It initializes the logger, sets up the native window options,
/// and runs the application using the `eframe` framework.
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_default_env().init();
    log::info!("starting nodeboard v{}", env!("CARGO_PKG_VERSION"));

    eframe::run_native(
        "nodeboard - text nodes on a snapping canvas",
        eframe::NativeOptions {
            viewport: ViewportBuilder::default().with_inner_size([1280.0, 768.0]),
            ..Default::default()
        },
        Box::new(|cc| Ok(Box::new(NodeBoardApp::new(cc)?))),
    )
}
