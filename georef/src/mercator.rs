//! Project the lat/lon coordinates into a 2D x/y using the Web Mercator.
//! <https://en.wikipedia.org/wiki/Web_Mercator_projection>

use crate::position::{Pixels, Position, lon_lat};
use std::f64::consts::PI;

/// Size of the whole world at zoom 0.
const TILE_SIZE: f64 = 256.;

/// Zoom specifies how many pixels are in the whole map. Zoom 0 means that the world is a single
/// 256x256 bitmap, zoom 1 makes it 512x512, and so on.
pub fn total_pixels(zoom: f64) -> f64 {
    2f64.powf(zoom) * TILE_SIZE
}

/// Project the position into the Mercator projection and normalize it to 0-1 range.
fn mercator_normalized(position: Position) -> (f64, f64) {
    let x = position.x().to_radians();
    let y = position.y().to_radians().tan().asinh();

    let x = (1. + (x / PI)) / 2.;
    let y = (1. - (y / PI)) / 2.;

    (x, y)
}

/// Project geographical position onto the world bitmap at the given zoom.
pub fn project(position: Position, zoom: f64) -> Pixels {
    let total_pixels = total_pixels(zoom);
    let (x, y) = mercator_normalized(position);
    Pixels::new(x * total_pixels, y * total_pixels)
}

/// Inverse of [`project`].
pub fn unproject(pixels: Pixels, zoom: f64) -> Position {
    let total_pixels = total_pixels(zoom);

    let lon = (pixels.x() / total_pixels * 2. - 1.) * PI;
    let lat = ((-pixels.y() / total_pixels * 2. + 1.) * PI).sinh().atan();

    lon_lat(lon.to_degrees(), lat.to_degrees())
}
