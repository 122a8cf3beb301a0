//! Euclidean distance on the continuous plane

use crate::spatial::Coord;

/// Euclidean norm of the difference between two coordinates
pub fn distance(p1: Coord, p2: Coord) -> f64 {
    (p1.col - p2.col).hypot(p1.row - p2.row)
}
