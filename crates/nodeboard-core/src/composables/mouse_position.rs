use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rem_size::RemSizeUnit;

pub(crate) const SOURCE_PATH: &str = file!();

/// The grid is spaced at 2 rem, matching the line height of a text node.
const SNAP_REM: f32 = 2.0;

/// A position on the canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f32,
    pub y: f32,
}

impl Coordinate {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn component(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// The other axis, used for occupancy checks along a line.
    pub fn cross(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// How a cursor position is turned into a target coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionKind {
    /// Compensate for the visual anchor of a node's bullet glyph.
    BulletPointOffset,
    /// Round to the nearest grid multiple, clamped to the canvas.
    #[default]
    ClosestSnappingPoint,
    /// Like `ClosestSnappingPoint`, but walk past occupied grid points.
    ClosestFreeSnappingPoint,
}

impl PositionKind {
    pub const ALL: [PositionKind; 3] = [
        PositionKind::BulletPointOffset,
        PositionKind::ClosestSnappingPoint,
        PositionKind::ClosestFreeSnappingPoint,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PositionKind::BulletPointOffset => "Bullet point offset",
            PositionKind::ClosestSnappingPoint => "Closest snapping point",
            PositionKind::ClosestFreeSnappingPoint => "Closest free snapping point",
        }
    }

    /// Cycle through the kinds, for the hotkey toggle.
    pub fn next(self) -> Self {
        match self {
            PositionKind::BulletPointOffset => PositionKind::ClosestSnappingPoint,
            PositionKind::ClosestSnappingPoint => PositionKind::ClosestFreeSnappingPoint,
            PositionKind::ClosestFreeSnappingPoint => PositionKind::BulletPointOffset,
        }
    }
}

impl fmt::Display for PositionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PositionKind::BulletPointOffset => "BULLET_POINT_OFFSET",
            PositionKind::ClosestSnappingPoint => "CLOSEST_SNAPPING_POINT",
            PositionKind::ClosestFreeSnappingPoint => "CLOSEST_FREE_SNAPPING_POINT",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized position kind {0:?}")]
pub struct UnknownPositionKind(pub String);

impl FromStr for PositionKind {
    type Err = UnknownPositionKind;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "BULLET_POINT_OFFSET" => Ok(PositionKind::BulletPointOffset),
            "CLOSEST_SNAPPING_POINT" => Ok(PositionKind::ClosestSnappingPoint),
            "CLOSEST_FREE_SNAPPING_POINT" => Ok(PositionKind::ClosestFreeSnappingPoint),
            other => Err(UnknownPositionKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapError {
    #[error("a node list is required when computing the closest free snapping point")]
    MissingNodeList,
}

/// Anything with a canvas position. The snapper only ever reads coordinates.
pub trait Positioned {
    fn coordinates(&self) -> Coordinate;
}

/// Snapping constants, computed once from the rem scale and frozen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapMetrics {
    /// Grid pitch in pixels (2 rem).
    pub snap_distance: f32,
    /// Pixel shift compensating for the bullet glyph's visual anchor.
    pub bullet_offset: Coordinate,
}

impl SnapMetrics {
    pub fn from_rem(rem: &RemSizeUnit) -> Self {
        Self::with_distance(rem.rem_in_pixels(SNAP_REM))
    }

    pub fn with_distance(snap_distance: f32) -> Self {
        Self {
            snap_distance,
            bullet_offset: Coordinate::new(snap_distance / 4.0, snap_distance / 2.0),
        }
    }
}

/// Turns cursor positions into target coordinates along one axis.
///
/// Pure: the output depends only on the arguments and the frozen metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MousePositionUnit {
    metrics: SnapMetrics,
}

impl MousePositionUnit {
    pub fn new(metrics: SnapMetrics) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> SnapMetrics {
        self.metrics
    }

    /// Compute one coordinate value along `axis` for the given cursor position.
    ///
    /// `occupied` is required for `ClosestFreeSnappingPoint` and ignored by the
    /// other kinds. Rounding ties break away from zero (`f32::round`); cursor
    /// coordinates are non-negative in practice so this is round-half-up.
    pub fn coordinate_from_cursor<N: Positioned>(
        &self,
        cursor: Coordinate,
        kind: PositionKind,
        axis: Axis,
        occupied: Option<&[N]>,
    ) -> Result<f32, SnapError> {
        match kind {
            PositionKind::BulletPointOffset => {
                Ok(cursor.component(axis) - self.metrics.bullet_offset.component(axis))
            }
            PositionKind::ClosestSnappingPoint => Ok(self.closest_snapping_point(cursor, axis)),
            PositionKind::ClosestFreeSnappingPoint => {
                let occupied = occupied.ok_or(SnapError::MissingNodeList)?;
                let cross = axis.cross();
                let mut candidate = self.closest_snapping_point(cursor, axis);

                // Walk down the line of the cursor's cross-axis coordinate
                // until the grid point is free. Each step rules out at least
                // one node, so this ends within occupied.len() iterations.
                while occupied.iter().any(|node| {
                    let at = node.coordinates();
                    at.component(cross) == cursor.component(cross)
                        && at.component(axis) == candidate
                }) {
                    candidate += self.metrics.snap_distance;
                }

                Ok(candidate)
            }
        }
    }

    fn closest_snapping_point(&self, cursor: Coordinate, axis: Axis) -> f32 {
        let spacing = self.metrics.snap_distance;
        ((cursor.component(axis) / spacing).round() * spacing).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAP: f32 = 32.0;

    struct Marker {
        at: Coordinate,
    }

    impl Positioned for Marker {
        fn coordinates(&self) -> Coordinate {
            self.at
        }
    }

    fn snapper() -> MousePositionUnit {
        MousePositionUnit::new(SnapMetrics::with_distance(SNAP))
    }

    fn markers(points: &[(f32, f32)]) -> Vec<Marker> {
        points
            .iter()
            .map(|&(x, y)| Marker {
                at: Coordinate::new(x, y),
            })
            .collect()
    }

    #[test]
    fn closest_point_rounds_to_the_nearest_grid_multiple() {
        let result = snapper()
            .coordinate_from_cursor::<Marker>(
                Coordinate::new(50.0, 10.0),
                PositionKind::ClosestSnappingPoint,
                Axis::X,
                None,
            )
            .unwrap();
        assert_eq!(result, 64.0);
    }

    #[test]
    fn closest_point_is_always_a_non_negative_multiple() {
        let unit = snapper();
        for x in [0.0, 3.0, 15.9, 16.0, 31.0, 47.0, 50.0, 200.5, 1023.0] {
            let result = unit
                .coordinate_from_cursor::<Marker>(
                    Coordinate::new(x, 0.0),
                    PositionKind::ClosestSnappingPoint,
                    Axis::X,
                    None,
                )
                .unwrap();
            assert!(result >= 0.0);
            assert_eq!(result % SNAP, 0.0, "cursor {} snapped to {}", x, result);
        }
    }

    #[test]
    fn closest_point_clamps_negative_cursors_to_zero() {
        let result = snapper()
            .coordinate_from_cursor::<Marker>(
                Coordinate::new(-40.0, 0.0),
                PositionKind::ClosestSnappingPoint,
                Axis::X,
                None,
            )
            .unwrap();
        assert_eq!(result, 0.0);
    }

    #[test]
    fn closest_point_rounds_halfway_values_up() {
        // 48 / 32 = 1.5 rounds away from zero.
        let result = snapper()
            .coordinate_from_cursor::<Marker>(
                Coordinate::new(48.0, 0.0),
                PositionKind::ClosestSnappingPoint,
                Axis::X,
                None,
            )
            .unwrap();
        assert_eq!(result, 64.0);
    }

    #[test]
    fn bullet_offset_is_a_fixed_shift() {
        let unit = snapper();
        let cursor = Coordinate::new(50.0, 10.0);
        let x = unit
            .coordinate_from_cursor::<Marker>(cursor, PositionKind::BulletPointOffset, Axis::X, None)
            .unwrap();
        let y = unit
            .coordinate_from_cursor::<Marker>(cursor, PositionKind::BulletPointOffset, Axis::Y, None)
            .unwrap();
        assert_eq!(x, 50.0 - SNAP / 4.0);
        assert_eq!(y, 10.0 - SNAP / 2.0);

        // The shift ignores occupancy entirely.
        let crowded = markers(&[(42.0, 10.0), (50.0, 10.0)]);
        let with_nodes = unit
            .coordinate_from_cursor(cursor, PositionKind::BulletPointOffset, Axis::X, Some(&crowded))
            .unwrap();
        assert_eq!(with_nodes, x);
    }

    #[test]
    fn free_point_advances_past_an_occupied_point() {
        let occupied = markers(&[(64.0, 10.0)]);
        let result = snapper()
            .coordinate_from_cursor(
                Coordinate::new(50.0, 10.0),
                PositionKind::ClosestFreeSnappingPoint,
                Axis::X,
                Some(&occupied),
            )
            .unwrap();
        assert_eq!(result, 96.0);
    }

    #[test]
    fn free_point_skips_a_dense_run_of_nodes() {
        let occupied = markers(&[(64.0, 10.0), (96.0, 10.0), (128.0, 10.0)]);
        let result = snapper()
            .coordinate_from_cursor(
                Coordinate::new(50.0, 10.0),
                PositionKind::ClosestFreeSnappingPoint,
                Axis::X,
                Some(&occupied),
            )
            .unwrap();
        assert_eq!(result, 160.0);
    }

    #[test]
    fn free_point_ignores_nodes_on_other_lines() {
        // Same target-axis coordinate but a different cross-axis line.
        let occupied = markers(&[(64.0, 42.0)]);
        let result = snapper()
            .coordinate_from_cursor(
                Coordinate::new(50.0, 10.0),
                PositionKind::ClosestFreeSnappingPoint,
                Axis::X,
                Some(&occupied),
            )
            .unwrap();
        assert_eq!(result, 64.0);
    }

    #[test]
    fn free_point_never_collides_with_occupied_nodes() {
        let occupied = markers(&[(32.0, 0.0), (64.0, 0.0), (96.0, 32.0)]);
        let unit = snapper();
        for x in [10.0, 40.0, 70.0, 100.0] {
            let cursor = Coordinate::new(x, 0.0);
            let result = unit
                .coordinate_from_cursor(
                    cursor,
                    PositionKind::ClosestFreeSnappingPoint,
                    Axis::X,
                    Some(&occupied),
                )
                .unwrap();
            assert!(!occupied
                .iter()
                .any(|m| m.at.y == cursor.y && m.at.x == result));
        }
    }

    #[test]
    fn free_point_requires_a_node_list() {
        let result = snapper().coordinate_from_cursor::<Marker>(
            Coordinate::new(50.0, 10.0),
            PositionKind::ClosestFreeSnappingPoint,
            Axis::X,
            None,
        );
        assert_eq!(result, Err(SnapError::MissingNodeList));
    }

    #[test]
    fn snapping_is_idempotent_across_calls() {
        let unit = snapper();
        let occupied = markers(&[(64.0, 10.0)]);
        let cursor = Coordinate::new(50.0, 10.0);
        for kind in PositionKind::ALL {
            let first = unit.coordinate_from_cursor(cursor, kind, Axis::X, Some(&occupied));
            let second = unit.coordinate_from_cursor(cursor, kind, Axis::X, Some(&occupied));
            assert_eq!(first, second);
        }
    }

    #[test]
    fn metrics_derive_bullet_offset_from_the_snap_distance() {
        let metrics = SnapMetrics::with_distance(SNAP);
        assert_eq!(metrics.bullet_offset, Coordinate::new(8.0, 16.0));
    }

    #[test]
    fn position_kind_names_round_trip() {
        for kind in PositionKind::ALL {
            assert_eq!(kind.to_string().parse::<PositionKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_kind_names_are_rejected() {
        let err = "BOGUS".parse::<PositionKind>().unwrap_err();
        assert_eq!(err, UnknownPositionKind("BOGUS".to_string()));
    }
}
