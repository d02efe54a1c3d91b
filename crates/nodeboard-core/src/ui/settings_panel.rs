use crate::app::NodeBoardApp;
use crate::composables::PositionKind;
use crate::display::event_log::{LOG_TYPE_GRID, LOG_TYPE_NODE, LOG_TYPE_SNAP};
use crate::display::{grid_status, GridStatus};

pub fn show_settings_panel(ui: &mut egui::Ui, app: &mut NodeBoardApp) {
    ui.heading("Board");
    ui.add_space(4.0);

    if ui
        .checkbox(&mut app.settings.grid.enabled, "Enable Grid")
        .changed()
    {
        let state = if app.settings.grid.enabled {
            "enabled"
        } else {
            "disabled"
        };
        app.event_log
            .log(LOG_TYPE_GRID, format!("Grid display {}", state));
    }

    ui.horizontal(|ui| {
        ui.label("Grid Dot Size:");
        let prev_dot_size = app.settings.grid.dot_size;
        if ui
            .add(egui::Slider::new(&mut app.settings.grid.dot_size, 0.5..=5.0))
            .changed()
        {
            app.event_log.log(
                LOG_TYPE_GRID,
                format!(
                    "Grid dot size changed from {:.1} to {:.1}",
                    prev_dot_size, app.settings.grid.dot_size
                ),
            );
        }
    });

    let previous_kind = app.settings.placement_kind;
    egui::ComboBox::from_label("Placement")
        .selected_text(app.settings.placement_kind.label())
        .show_ui(ui, |ui| {
            for kind in PositionKind::ALL {
                ui.selectable_value(&mut app.settings.placement_kind, kind, kind.label());
            }
        });
    if app.settings.placement_kind != previous_kind {
        app.event_log.log(
            LOG_TYPE_SNAP,
            format!("Placement mode set to {}", app.settings.placement_kind),
        );
    }

    ui.label(
        egui::RichText::new(format!(
            "Snap distance: {:.0} px (2 rem @ {:.0} px)",
            app.snap_distance(),
            app.rem_scale().pixels_per_rem()
        ))
        .small(),
    );

    // Show grid visibility status
    if app.settings.grid.enabled {
        match grid_status(app.snap_distance()) {
            GridStatus::TooFine => {
                ui.colored_label(
                    egui::Color32::from_rgb(255, 165, 0),
                    egui::RichText::new("⚠ Grid too fine to display").small(),
                );
            }
            GridStatus::TooCoarse => {
                ui.colored_label(
                    egui::Color32::from_rgb(255, 165, 0),
                    egui::RichText::new("⚠ Grid too coarse to display").small(),
                );
            }
            GridStatus::Visible(spacing_pixels) => {
                ui.colored_label(
                    egui::Color32::from_rgb(0, 255, 0),
                    egui::RichText::new(format!("✓ Grid visible (~{:.0} pixels)", spacing_pixels))
                        .small(),
                );
            }
        }
    }

    ui.separator();
    ui.heading("Nodes");
    ui.add_space(4.0);

    let mut removed: Option<String> = None;
    egui::ScrollArea::vertical()
        .id_salt("node_list")
        .max_height(280.0)
        .show(ui, |ui| {
            for node in app.board.nodes_mut() {
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut node.title).desired_width(140.0),
                    );
                    ui.monospace(format!(
                        "({:.0}, {:.0})",
                        node.coordinates.x, node.coordinates.y
                    ));
                    if ui.small_button("🗑").clicked() {
                        removed = Some(node.id.clone());
                    }
                });
            }
        });

    if let Some(id) = removed {
        if let Some(node) = app.board.remove_node(&id) {
            app.event_log.log(
                LOG_TYPE_NODE,
                format!("removed {} ({:?})", node.id, node.title),
            );
        }
    }
}
