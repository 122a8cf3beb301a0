//! Real-valued coordinate pairs

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A point on the unbounded plane
///
/// Columns grow to the right and rows grow downward, matching pixel layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coord {
    /// Horizontal position
    pub col: f64,
    /// Vertical position
    pub row: f64,
}

impl Coord {
    /// The origin of the plane
    pub const ORIGIN: Self = Self { col: 0.0, row: 0.0 };

    /// Create a coordinate from column and row
    pub const fn new(col: f64, row: f64) -> Self {
        Self { col, row }
    }

    /// Distance from the origin
    pub fn length(self) -> f64 {
        self.col.hypot(self.row)
    }

    /// Rotate about the origin by `angle` radians using the standard matrix
    pub fn rotated(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            col: self.col.mul_add(cos, -(self.row * sin)),
            row: self.col.mul_add(sin, self.row * cos),
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl Add for Coord {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.col + rhs.col, self.row + rhs.row)
    }
}

impl Sub for Coord {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.col - rhs.col, self.row - rhs.row)
    }
}

impl Neg for Coord {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.col, -self.row)
    }
}

impl Mul<f64> for Coord {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.col * rhs, self.row * rhs)
    }
}

impl Div<f64> for Coord {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.col / rhs, self.row / rhs)
    }
}
