//! Reusable UI logic units ("composables") and the registry that exposes
//! them by name. The registry is populated exactly once at startup from a
//! static table; entry names are derived from each unit's source path.

pub mod mouse_position;
pub mod rem_size;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub use mouse_position::{
    Axis, Coordinate, MousePositionUnit, PositionKind, Positioned, SnapError, SnapMetrics,
    UnknownPositionKind,
};
pub use rem_size::RemSizeUnit;

use mouse_position::SOURCE_PATH as MOUSE_POSITION_PATH;
use rem_size::SOURCE_PATH as REM_SIZE_PATH;

const REM_SIZE: &str = "rem_size";
const MOUSE_POSITION: &str = "mouse_position";

// Anchored: an optional directory prefix ending in a separator, a lazy base
// name, and an optional final extension. First match wins.
static PATH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<dir>.*[/\\])?(?P<name>.*?)(?P<ext>\.[^./\\]*)?$")
        .unwrap_or_else(|err| panic!("invalid path pattern: {}", err))
});

/// A source path split into directory prefix, base name, and extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParts {
    pub directory: String,
    pub name: String,
    pub extension: String,
}

/// Split `path` into its parts. The base name is the file name with the
/// directory prefix and the final extension stripped.
pub fn parse_path(path: &str) -> PathParts {
    let group = |captures: &regex::Captures<'_>, name: &str| {
        captures
            .name(name)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    };

    match PATH_PATTERN.captures(path) {
        Some(captures) => PathParts {
            directory: group(&captures, "dir"),
            name: group(&captures, "name"),
            extension: group(&captures, "ext"),
        },
        // The pattern matches any string; this arm is unreachable in practice.
        None => PathParts {
            directory: String::new(),
            name: String::new(),
            extension: String::new(),
        },
    }
}

/// One registered logic unit with its exported functions.
#[derive(Debug, Clone, Copy)]
pub enum Unit {
    RemSize(RemSizeUnit),
    MousePosition(MousePositionUnit),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("duplicate composable name {0:?}")]
    DuplicateName(String),
    #[error("composable {0:?} missing from the registry")]
    MissingUnit(&'static str),
}

/// Name → unit mapping, built once at startup. A bootstrap failure is fatal:
/// the application has no degraded mode without its composables.
#[derive(Debug, Clone)]
pub struct Registry {
    units: HashMap<String, Unit>,
}

impl Registry {
    /// Enumerate the known units and key each one by the base name of its
    /// source file. Names are unique by construction (distinct paths), so a
    /// duplicate means a registration bug.
    pub fn bootstrap(rem_size: RemSizeUnit) -> Result<Self, RegistryError> {
        let mouse_position = MousePositionUnit::new(SnapMetrics::from_rem(&rem_size));
        let table: [(&str, Unit); 2] = [
            (REM_SIZE_PATH, Unit::RemSize(rem_size)),
            (MOUSE_POSITION_PATH, Unit::MousePosition(mouse_position)),
        ];

        let mut units = HashMap::new();
        for (path, unit) in table {
            let name = parse_path(path).name;
            if units.insert(name.clone(), unit).is_some() {
                return Err(RegistryError::DuplicateName(name));
            }
        }

        let registry = Self { units };
        registry.rem_size()?;
        registry.mouse_position()?;
        Ok(registry)
    }

    pub fn rem_size(&self) -> Result<&RemSizeUnit, RegistryError> {
        match self.units.get(REM_SIZE) {
            Some(Unit::RemSize(unit)) => Ok(unit),
            _ => Err(RegistryError::MissingUnit(REM_SIZE)),
        }
    }

    pub fn mouse_position(&self) -> Result<&MousePositionUnit, RegistryError> {
        match self.units.get(MOUSE_POSITION) {
            Some(Unit::MousePosition(unit)) => Ok(unit),
            _ => Err(RegistryError::MissingUnit(MOUSE_POSITION)),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.units.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_path_strips_directory_and_extension() {
        let parts = parse_path("crates/nodeboard-core/src/composables/rem_size.rs");
        assert_eq!(parts.directory, "crates/nodeboard-core/src/composables/");
        assert_eq!(parts.name, "rem_size");
        assert_eq!(parts.extension, ".rs");
    }

    #[test]
    fn parse_path_handles_backslash_separators() {
        let parts = parse_path(r"src\composables\mouse_position.rs");
        assert_eq!(parts.directory, r"src\composables\");
        assert_eq!(parts.name, "mouse_position");
        assert_eq!(parts.extension, ".rs");
    }

    #[test]
    fn parse_path_without_an_extension() {
        let parts = parse_path("mouse_position");
        assert_eq!(parts.directory, "");
        assert_eq!(parts.name, "mouse_position");
        assert_eq!(parts.extension, "");
    }

    #[test]
    fn parse_path_strips_only_the_final_extension() {
        let parts = parse_path("use.mouse.position.ts");
        assert_eq!(parts.name, "use.mouse.position");
        assert_eq!(parts.extension, ".ts");
    }

    #[test]
    fn bootstrap_registers_the_known_units() {
        let registry = Registry::bootstrap(RemSizeUnit::default()).unwrap();
        assert_eq!(registry.len(), 2);

        let mut names: Vec<&str> = registry.names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["mouse_position", "rem_size"]);

        assert!(registry.rem_size().is_ok());
        assert!(registry.mouse_position().is_ok());
    }

    #[test]
    fn bootstrap_derives_the_snap_distance_from_the_rem_scale() {
        let registry = Registry::bootstrap(RemSizeUnit::default()).unwrap();
        let metrics = registry.mouse_position().unwrap().metrics();
        assert_eq!(metrics.snap_distance, 32.0);
    }
}
