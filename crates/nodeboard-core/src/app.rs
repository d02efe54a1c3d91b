use std::path::PathBuf;

use crate::board::Board;
use crate::composables::{
    Axis, Coordinate, MousePositionUnit, PositionKind, Registry, RegistryError, RemSizeUnit,
};
use crate::display::event_log::{LOG_TYPE_GRID, LOG_TYPE_NODE, LOG_TYPE_PROJECT, LOG_TYPE_SNAP};
use crate::display::EventLog;
use crate::project::{self, BoardFile, BoardSettings, BOARD_FILE_NAME};
use crate::ui;

/// An in-progress node drag: the grabbed node and its live preview position.
pub struct DragState {
    pub node_id: String,
    pub preview: Coordinate,
}

/// The main application struct
pub struct NodeBoardApp {
    // Canvas content
    pub board: Board,

    // User settings (grid display, placement mode)
    pub settings: BoardSettings,

    // Composable registry, populated once at startup
    pub registry: Registry,

    // In-app event log
    pub event_log: EventLog,

    // Drag interaction state
    pub drag: Option<DragState>,

    // Frozen snapping unit and the rem scale it was derived from
    snapper: MousePositionUnit,
    rem_size: RemSizeUnit,

    config_path: PathBuf,
}

impl NodeBoardApp {
    /// Initialize the application state: bootstrap the composable registry,
    /// freeze the snapping metrics from the current rem scale, and restore
    /// the saved board if one exists. A registry failure is fatal; there is
    /// no degraded mode without the composables.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, RegistryError> {
        let registry = Registry::bootstrap(RemSizeUnit::from_egui(&cc.egui_ctx))?;
        let rem_size = *registry.rem_size()?;
        let snapper = *registry.mouse_position()?;

        let config_path = project::config_dir().unwrap_or_default();
        let file = match BoardFile::load_from_file(&config_path) {
            Ok(file) => file,
            Err(err) => {
                log::error!("failed to load saved board: {}", err);
                // Drop the corrupted file so the next save starts clean.
                std::fs::remove_file(config_path.join(BOARD_FILE_NAME)).ok();
                BoardFile::default()
            }
        };

        let mut event_log = EventLog::new();
        event_log.log(
            LOG_TYPE_PROJECT,
            format!(
                "nodeboard v{} — {} composables loaded, snap distance {:.0} px",
                env!("CARGO_PKG_VERSION"),
                registry.len(),
                snapper.metrics().snap_distance
            ),
        );
        if !file.board.is_empty() {
            event_log.log(
                LOG_TYPE_PROJECT,
                format!("restored {} nodes from the saved board", file.board.len()),
            );
        }

        Ok(Self {
            board: file.board,
            settings: file.settings,
            registry,
            event_log,
            drag: None,
            snapper,
            rem_size,
            config_path,
        })
    }

    pub fn snap_distance(&self) -> f32 {
        self.snapper.metrics().snap_distance
    }

    pub fn rem_scale(&self) -> RemSizeUnit {
        self.rem_size
    }

    /// Snap `cursor` along `axis`, always supplying the board's nodes as the
    /// occupancy list. A snapper error is logged and degrades to 0.
    pub fn snap_or_fallback(&mut self, cursor: Coordinate, kind: PositionKind, axis: Axis) -> f32 {
        match self
            .snapper
            .coordinate_from_cursor(cursor, kind, axis, Some(self.board.nodes()))
        {
            Ok(value) => value,
            Err(err) => {
                log::error!("{}", err);
                self.event_log
                    .log(LOG_TYPE_SNAP, format!("{}, using 0", err));
                0.0
            }
        }
    }

    /// Place a new node at the snapped position for `cursor`.
    pub fn place_node_at(&mut self, cursor: Coordinate) {
        let kind = self.settings.placement_kind;
        let x = self.snap_or_fallback(cursor, kind, Axis::X);
        let y = self.snap_or_fallback(cursor, kind, Axis::Y);

        let node = self.board.add_node("Untitled", Coordinate::new(x, y));
        let message = format!("placed {} at ({:.0}, {:.0})", node.id, x, y);
        self.event_log.log(LOG_TYPE_NODE, message);
    }

    /// Grab the node under the cursor, if any.
    pub fn begin_drag(&mut self, cursor: Coordinate) {
        let radius = self.snap_distance() / 2.0;
        if let Some(node) = self.board.node_at(cursor, radius) {
            self.drag = Some(DragState {
                node_id: node.id.clone(),
                preview: node.coordinates,
            });
        }
    }

    /// While dragging, preview with the bullet offset so the glyph tracks
    /// the cursor's visual anchor rather than the pointer tip.
    pub fn update_drag(&mut self, cursor: Coordinate) {
        if self.drag.is_none() {
            return;
        }
        let x = self.snap_or_fallback(cursor, PositionKind::BulletPointOffset, Axis::X);
        let y = self.snap_or_fallback(cursor, PositionKind::BulletPointOffset, Axis::Y);
        if let Some(drag) = &mut self.drag {
            drag.preview = Coordinate::new(x, y);
        }
    }

    /// Drop the dragged node at the snapped position for `cursor`.
    pub fn finish_drag(&mut self, cursor: Coordinate) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let kind = self.settings.placement_kind;
        let x = self.snap_or_fallback(cursor, kind, Axis::X);
        let y = self.snap_or_fallback(cursor, kind, Axis::Y);

        if let Some(node) = self.board.get_mut(&drag.node_id) {
            node.coordinates = Coordinate::new(x, y);
            self.event_log.log(
                LOG_TYPE_NODE,
                format!("moved {} to ({:.0}, {:.0})", drag.node_id, x, y),
            );
        }
    }

    pub fn remove_node_at(&mut self, cursor: Coordinate) {
        let radius = self.snap_distance() / 2.0;
        let id = self.board.node_at(cursor, radius).map(|node| node.id.clone());
        if let Some(id) = id {
            if let Some(node) = self.board.remove_node(&id) {
                self.event_log.log(
                    LOG_TYPE_NODE,
                    format!("removed {} ({:?})", node.id, node.title),
                );
            }
        }
    }

    fn save_board(&self) {
        let file = BoardFile {
            board: self.board.clone(),
            settings: self.settings.clone(),
        };
        if let Err(err) = file.save_to_file(&self.config_path) {
            log::error!("failed to save board: {}", err);
        }
    }
}

impl Drop for NodeBoardApp {
    fn drop(&mut self) {
        // Save the board when the application closes
        self.save_board();
    }
}

impl eframe::App for NodeBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle hotkeys first
        ctx.input(|i| {
            // G key - toggle grid display
            if i.key_pressed(egui::Key::G) {
                self.settings.grid.enabled = !self.settings.grid.enabled;
                let state = if self.settings.grid.enabled {
                    "enabled"
                } else {
                    "disabled"
                };
                self.event_log
                    .log(LOG_TYPE_GRID, format!("Grid display {} (G key)", state));
            }

            // M key - cycle placement mode
            if i.key_pressed(egui::Key::M) {
                self.settings.placement_kind = self.settings.placement_kind.next();
                self.event_log.log(
                    LOG_TYPE_SNAP,
                    format!("Placement mode set to {} (M key)", self.settings.placement_kind),
                );
            }
        });

        egui::SidePanel::left("settings_panel")
            .default_width(260.0)
            .show(ctx, |ui| ui::show_settings_panel(ui, self));

        egui::TopBottomPanel::bottom("event_log_panel")
            .resizable(true)
            .default_height(140.0)
            .show(ctx, |ui| ui::show_event_log_panel(ui, self));

        egui::CentralPanel::default().show(ctx, |ui| ui::show_canvas(ui, self));

        // Save the board to disk periodically
        if ctx.input(|i| i.time) % 30.0 < 0.1 {
            self.save_board();
        }
    }
}
