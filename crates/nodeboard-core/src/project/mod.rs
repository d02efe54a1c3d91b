//! Board persistence under the user config directory, in the same shape the
//! rest of the app holds it: nodes plus display settings, as pretty JSON.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::board::Board;
use crate::composables::PositionKind;
use crate::display::GridSettings;

pub const BOARD_FILE_NAME: &str = "board.json";

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// User-visible editor settings persisted alongside the board.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    pub grid: GridSettings,
    /// How clicks and drops pick their target coordinate.
    #[serde(deserialize_with = "lenient_position_kind")]
    pub placement_kind: PositionKind,
}

/// An unknown kind name in a saved file is downgraded to the default rather
/// than rejecting the whole board.
fn lenient_position_kind<'de, D>(deserializer: D) -> Result<PositionKind, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.parse::<PositionKind>() {
        Ok(kind) => Ok(kind),
        Err(err) => {
            let fallback = PositionKind::default();
            log::warn!("{}, falling back to {}", err, fallback);
            Ok(fallback)
        }
    }
}

/// Everything saved to disk for a board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardFile {
    pub board: Board,
    pub settings: BoardSettings,
}

impl BoardFile {
    pub fn save_to_file(&self, dir: &Path) -> Result<(), ProjectError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::create_dir_all(dir)?;
        std::fs::write(dir.join(BOARD_FILE_NAME), json)?;
        Ok(())
    }

    /// Load the saved board, or defaults when nothing has been saved yet.
    pub fn load_from_file(dir: &Path) -> Result<Self, ProjectError> {
        let json_path = dir.join(BOARD_FILE_NAME);
        if json_path.exists() {
            let json = std::fs::read_to_string(json_path)?;
            let file: BoardFile = serde_json::from_str(&json)?;
            Ok(file)
        } else {
            Ok(BoardFile::default())
        }
    }
}

/// Where board state lives on this machine.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("nodeboard"))
}
