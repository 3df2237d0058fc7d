//! Types and functions for working with positions.

use crate::mercator::{project, unproject};
use egui::Vec2;

/// Geographical position with latitude and longitude.
pub type Position = geo_types::Point;

/// Construct `Position` from latitude and longitude, in the order they are usually written down
/// (e.g. `18.5314, 73.870999`).
pub fn lat_lon(lat: f64, lon: f64) -> Position {
    Position::new(lon, lat)
}

/// Construct `Position` from longitude and latitude.
pub fn lon_lat(lon: f64, lat: f64) -> Position {
    Position::new(lon, lat)
}

/// Location projected on the screen or on the Mercator world bitmap.
pub type Pixels = geo_types::Point;

pub trait PixelsExt {
    fn to_vec2(&self) -> Vec2;
    fn from_vec2(_: Vec2) -> Self;
}

impl PixelsExt for Pixels {
    fn to_vec2(&self) -> Vec2 {
        Vec2::new(self.x() as f32, self.y() as f32)
    }

    fn from_vec2(vec2: Vec2) -> Self {
        Self::new(vec2.x as f64, vec2.y as f64)
    }
}

/// Geographical [`Position`] shifted by a number of screen pixels. Dragging the map accumulates
/// the offset here instead of re-projecting the position on every frame, which would lose
/// precision at high zoom levels.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct AdjustedPosition {
    /// Base geographical position.
    pub position: Position,
    /// Offset in pixels.
    pub offset: Pixels,
    /// Zoom level at which the offset was measured.
    pub zoom: f64,
}

impl AdjustedPosition {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            offset: Pixels::new(0.0, 0.0),
            zoom: 1.0, // Irrelevant while the offset is zero.
        }
    }

    /// The real position, i.e. including the offset.
    pub fn position(&self) -> Position {
        unproject(project(self.position, self.zoom) - self.offset, self.zoom)
    }

    /// Add `offset` measured at `zoom`. The offset collected so far is rescaled to the new zoom.
    pub fn shift(self, offset: Vec2, zoom: f64) -> Self {
        let changed_zoom_factor = 2.0_f64.powf(zoom - self.zoom);
        Self {
            position: self.position,
            offset: self.offset * changed_zoom_factor + Pixels::from_vec2(offset),
            zoom,
        }
    }

    /// Fold the offset into the base position.
    pub fn zero_offset(self) -> Self {
        Self::new(self.position())
    }
}

impl From<Position> for AdjustedPosition {
    fn from(position: Position) -> Self {
        Self::new(position)
    }
}
