use egui::{Align2, Color32, FontId, Sense};

use crate::app::NodeBoardApp;
use crate::composables::Coordinate;
use crate::display::draw_grid;

const BULLET_RADIUS: f32 = 3.0;
const TITLE_GAP: f32 = 8.0;

/// The canvas: grid, text nodes, and the click/drag interactions that place,
/// move, and remove them. Board coordinates are pixels relative to the
/// viewport's top-left corner.
pub fn show_canvas(ui: &mut egui::Ui, app: &mut NodeBoardApp) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
    let viewport = response.rect;
    let origin = viewport.min;

    let to_board = |pos: egui::Pos2| Coordinate::new(pos.x - origin.x, pos.y - origin.y);
    let to_screen = |c: Coordinate| egui::pos2(origin.x + c.x, origin.y + c.y);

    draw_grid(&painter, &viewport, app.snap_distance(), &app.settings.grid);

    // Interactions before painting, so this frame shows the result.
    if let Some(pointer) = response.interact_pointer_pos() {
        let cursor = to_board(pointer);
        if response.drag_started() {
            app.begin_drag(cursor);
        } else if response.dragged() {
            app.update_drag(cursor);
        } else if response.drag_stopped() {
            app.finish_drag(cursor);
        } else if response.double_clicked() {
            app.remove_node_at(cursor);
        } else if response.clicked() {
            app.place_node_at(cursor);
        }
    }

    for node in app.board.nodes() {
        let dragging = app
            .drag
            .as_ref()
            .filter(|drag| drag.node_id == node.id);

        let (position, bullet_color) = match dragging {
            Some(drag) => (drag.preview, Color32::from_rgb(255, 200, 80)),
            None => (node.coordinates, Color32::from_rgb(120, 170, 255)),
        };

        let anchor = to_screen(position);
        painter.circle_filled(anchor, BULLET_RADIUS, bullet_color);
        painter.text(
            anchor + egui::vec2(BULLET_RADIUS + TITLE_GAP, 0.0),
            Align2::LEFT_CENTER,
            &node.title,
            FontId::proportional(14.0),
            Color32::from_rgb(220, 220, 220),
        );
    }
}
