//! Unit conversion into PDF points, the unit every geometry value is stored in.

/// Points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Points per millimeter (1 inch = 25.4 mm).
pub const POINTS_PER_MM: f64 = POINTS_PER_INCH / 25.4;

/// Converts inches to points.
#[inline]
pub fn inch(value: f64) -> f64 {
    value * POINTS_PER_INCH
}

/// Converts millimeters to points.
#[inline]
pub fn mm(value: f64) -> f64 {
    value * POINTS_PER_MM
}
