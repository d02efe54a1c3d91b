use egui::Color32;

use crate::app::NodeBoardApp;
use crate::display::event_log::{LOG_TYPE_GRID, LOG_TYPE_NODE, LOG_TYPE_PROJECT, LOG_TYPE_SNAP};

pub fn show_event_log_panel(ui: &mut egui::Ui, app: &mut NodeBoardApp) {
    ui.horizontal(|ui| {
        ui.heading("Event Log");
        ui.label(
            egui::RichText::new(format!("{} entries", app.event_log.len()))
                .small()
                .color(Color32::from_rgb(150, 150, 150)),
        );
    });

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for entry in app.event_log.entries() {
                ui.horizontal(|ui| {
                    ui.monospace(
                        egui::RichText::new(entry.timestamp.format("%H:%M:%S").to_string())
                            .color(Color32::from_rgb(150, 150, 150)),
                    );
                    ui.colored_label(category_color(entry.category), entry.category);
                    ui.label(&entry.message);
                });
            }
        });
}

fn category_color(category: &str) -> Color32 {
    match category {
        LOG_TYPE_GRID => Color32::from_rgb(100, 200, 100),
        LOG_TYPE_NODE => Color32::from_rgb(120, 170, 255),
        LOG_TYPE_SNAP => Color32::from_rgb(255, 165, 0),
        LOG_TYPE_PROJECT => Color32::from_rgb(200, 150, 255),
        _ => Color32::from_rgb(180, 180, 180),
    }
}
