//! Unit conversion utilities.
//!
//! WordprocessingML measures font sizes in half-points and page geometry in
//! twips (twentieths of a point).

pub const HALF_POINTS_PER_PT: u32 = 2;
pub const TWIPS_PER_INCH: u32 = 1440;

#[inline]
pub fn pt_to_half_points(pt: f64) -> u32 {
    (pt * HALF_POINTS_PER_PT as f64).round() as u32
}

#[inline]
pub fn inches_to_twips(inches: f64) -> u32 {
    (inches * TWIPS_PER_INCH as f64).round() as u32
}
