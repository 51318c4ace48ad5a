//! 2D geometric utilities for keypoint positions.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Number of decimal digits kept for coordinates and displacements
pub const COORD_DECIMALS: u32 = 4;

/// 2D position in video pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_nalgebra(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    pub fn from_nalgebra(p: Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Self) -> f64 {
        (self.to_nalgebra() - other.to_nalgebra()).norm()
    }

    /// Copy with both coordinates rounded to `COORD_DECIMALS` digits
    pub fn rounded(&self) -> Self {
        Self::new(round_coord(self.x), round_coord(self.y))
    }
}

/// Round a value to a fixed number of decimal digits
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

/// Round a value to the coordinate precision used throughout a session
pub fn round_coord(value: f64) -> f64 {
    round_to(value, COORD_DECIMALS)
}
