use egui::{Color32, Rect};
use serde::{Deserialize, Serialize};

// Grid dots below this screen spacing are visual noise.
const MIN_VISIBLE_SPACING: f32 = 5.0;
const MAX_VISIBLE_SPACING: f32 = 300.0;
const MAX_GRID_POINTS: i32 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSettings {
    pub enabled: bool,
    pub dot_size: f32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            dot_size: 1.5,
        }
    }
}

pub enum GridStatus {
    TooFine,
    TooCoarse,
    Visible(f32),
}

/// Grid visibility for the status line in the settings panel.
pub fn grid_status(spacing: f32) -> GridStatus {
    if spacing < MIN_VISIBLE_SPACING {
        GridStatus::TooFine
    } else if spacing > MAX_VISIBLE_SPACING {
        GridStatus::TooCoarse
    } else {
        GridStatus::Visible(spacing)
    }
}

/// Draw grid dots over the viewport. The canvas origin is the viewport's
/// top-left corner, so dots land exactly on snapping points.
pub fn draw_grid(painter: &egui::Painter, viewport: &Rect, spacing: f32, settings: &GridSettings) {
    if !settings.enabled || spacing <= 0.0 {
        return;
    }

    // Skip when the grid would be noise or a single cell.
    if spacing < MIN_VISIBLE_SPACING
        || spacing > viewport.width().min(viewport.height()) * 0.5
    {
        return;
    }

    let columns = (viewport.width() / spacing).ceil() as i32 + 1;
    let rows = (viewport.height() / spacing).ceil() as i32 + 1;
    if columns * rows > MAX_GRID_POINTS {
        return;
    }

    // Denser grids get fainter dots.
    let opacity = if spacing > 50.0 { 120 } else { 60 };
    let grid_color = Color32::from_rgba_premultiplied(100, 100, 100, opacity);

    for grid_x in 0..=columns {
        for grid_y in 0..=rows {
            let position =
                viewport.min + egui::vec2(grid_x as f32 * spacing, grid_y as f32 * spacing);
            if viewport.contains(position) {
                painter.circle_filled(position, settings.dot_size, grid_color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_reflects_spacing_thresholds() {
        assert!(matches!(grid_status(2.0), GridStatus::TooFine));
        assert!(matches!(grid_status(400.0), GridStatus::TooCoarse));
        assert!(matches!(grid_status(32.0), GridStatus::Visible(s) if s == 32.0));
    }
}
