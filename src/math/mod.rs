//! Math utilities and types for placing maze geometry in world space.
//!
//! This module provides small vector and matrix types plus helpers for angle
//! conversions. The types are `bytemuck::Pod` so wall transforms can be uploaded
//! to a GPU buffer without copying into another layout.
//!
//! # Module Organization
//!
//! - [`vec`] contains [`Vec3`] and [`Vec4`]
//! - [`mat`] contains the column-major [`Mat4`]
//! - [`coordinates`] maps between grid cells and world positions

pub mod coordinates;
pub mod mat;
pub mod vec;

pub use mat::Mat4;
pub use vec::{Vec3, Vec4};

/// Converts degrees to radians.
///
/// The input is wrapped into `(-360, 360)` first, so `deg_to_rad(450.0)`
/// equals `deg_to_rad(90.0)`.
///
/// # Example
/// ```
/// use maze_carver::math::deg_to_rad;
///
/// assert!((deg_to_rad(180.0) - std::f32::consts::PI).abs() < 1e-6);
/// assert!((deg_to_rad(540.0) - std::f32::consts::PI).abs() < 1e-6);
/// ```
pub fn deg_to_rad(degrees: f32) -> f32 {
    (degrees % 360.0) * (std::f32::consts::PI / 180.0)
}

/// Converts radians to degrees, wrapping the input into `(-2π, 2π)` first.
pub fn rad_to_deg(radians: f32) -> f32 {
    (radians % std::f32::consts::TAU) * (180.0 / std::f32::consts::PI)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_quarter_turn() {
        let rad = deg_to_rad(90.0);
        assert!((rad - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((rad_to_deg(rad) - 90.0).abs() < 1e-4);
    }
}
