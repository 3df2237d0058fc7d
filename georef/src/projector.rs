use egui::{Pos2, Rect, Vec2};

use crate::{
    MapMemory, Position,
    mercator::{project, total_pixels, unproject},
    position::{Pixels, PixelsExt as _},
};

/// Converts between geographical positions and pixels for the viewport of the current frame.
///
/// Pixel positions are expressed in the same coordinates egui paints in, so projected positions
/// can be handed to [`egui::Painter`] directly. The map container, i.e. the rect allocated by the
/// [`crate::Map`] widget, is available separately for code dealing with pixels relative to the
/// widget, such as pointer events.
pub trait Projection {
    /// Project `position` into pixels.
    fn project(&self, position: Position) -> Pos2;

    /// Get the geographical position under the given pixel. Inverse of [`Projection::project`].
    fn unproject(&self, pixel: Pos2) -> Position;

    /// Rect occupied by the map widget.
    fn container(&self) -> Rect;

    /// Like [`Projection::project`], but relative to the top-left corner of the map container.
    fn position_to_container_pixel(&self, position: Position) -> Vec2 {
        self.project(position) - self.container().min
    }

    /// Like [`Projection::unproject`], but taking pixels relative to the top-left corner of the
    /// map container.
    fn container_pixel_to_position(&self, pixel: Vec2) -> Position {
        self.unproject(self.container().min + pixel)
    }
}

/// Snapshot of everything which affects the outcome of a projection. Two frames with equal
/// viewports project every position onto the same pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub rect: Rect,
    pub zoom: f64,
    pub center: Position,
}

/// Web Mercator [`Projection`] of the [`crate::Map`] widget.
#[derive(Clone)]
pub struct Projector {
    clip_rect: Rect,
    memory: MapMemory,
    my_position: Position,
}

impl Projector {
    pub fn new(clip_rect: Rect, map_memory: &MapMemory, my_position: Position) -> Self {
        Self {
            clip_rect,
            memory: map_memory.to_owned(),
            my_position,
        }
    }

    fn center(&self) -> Position {
        self.memory.center_mode.position(self.my_position)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport {
            rect: self.clip_rect,
            zoom: self.memory.zoom(),
            center: self.center(),
        }
    }

    /// What is the local scale of the map at the provided position and given the current zoom
    /// level?
    pub fn scale_pixel_per_meter(&self, position: Position) -> f32 {
        calculate_pixels_per_meter(position.y(), self.memory.zoom()) as f32
    }
}

impl Projection for Projector {
    fn project(&self, position: Position) -> Pos2 {
        let zoom = self.memory.zoom();

        // Both are huge numbers at high zoom levels, so the subtraction must happen in f64.
        let projected_position = project(position, zoom);
        let map_center_projected_position = project(self.center(), zoom);

        self.clip_rect.center() + (projected_position - map_center_projected_position).to_vec2()
    }

    fn unproject(&self, pixel: Pos2) -> Position {
        let zoom = self.memory.zoom();
        let map_center_projected_position = project(self.center(), zoom);
        let clip_center = self.clip_rect.center();

        let x = map_center_projected_position.x() + (pixel.x as f64) - (clip_center.x as f64);
        let y = map_center_projected_position.y() + (pixel.y as f64) - (clip_center.y as f64);

        unproject(Pixels::new(x, y), zoom)
    }

    fn container(&self) -> Rect {
        self.clip_rect
    }
}

fn calculate_pixels_per_meter(latitude: f64, zoom: f64) -> f64 {
    const EARTH_CIRCUMFERENCE: f64 = 40_075_016.686;

    let pixel_per_meter_equator = total_pixels(zoom) / EARTH_CIRCUMFERENCE;
    pixel_per_meter_equator / latitude.abs().to_radians().cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lat_lon;
    use approx::assert_relative_eq;

    fn pune_projector(zoom: f64) -> Projector {
        let mut memory = MapMemory::default();
        memory.set_zoom(zoom).unwrap();
        Projector::new(
            Rect::from_min_size(Pos2::new(20., 40.), Vec2::new(800., 600.)),
            &memory,
            lat_lon(18.5314, 73.870999),
        )
    }

    #[test]
    fn center_is_projected_onto_the_middle_of_the_widget() {
        let projector = pune_projector(19.);
        let projected = projector.project(lat_lon(18.5314, 73.870999));
        assert_relative_eq!(projected.x, 420.);
        assert_relative_eq!(projected.y, 340.);
    }

    #[test]
    fn container_pixels_are_relative_to_the_widget() {
        let projector = pune_projector(19.);
        let pixel = projector.position_to_container_pixel(lat_lon(18.5314, 73.870999));
        assert_relative_eq!(pixel.x, 400.);
        assert_relative_eq!(pixel.y, 300.);
    }

    #[test]
    fn unproject_is_inverse_of_project() {
        let projector = pune_projector(19.);
        let original = lat_lon(18.53080033434548, 73.87040607842121);
        let unprojected = projector.unproject(projector.project(original));

        // One f32 pixel at zoom 19 is roughly 30 cm.
        assert_relative_eq!(original.x(), unprojected.x(), epsilon = 1e-5);
        assert_relative_eq!(original.y(), unprojected.y(), epsilon = 1e-5);
    }

    #[test]
    fn container_pixel_round_trip() {
        let projector = pune_projector(19.);
        let pixel = Vec2::new(123., 456.);
        let position = projector.container_pixel_to_position(pixel);
        let back = projector.position_to_container_pixel(position);

        assert_relative_eq!(back.x, pixel.x, epsilon = 0.01);
        assert_relative_eq!(back.y, pixel.y, epsilon = 0.01);
    }

    #[test]
    fn unprojecting_neighbouring_pixels_gives_different_positions() {
        let projector = pune_projector(21.);
        let a = projector.container_pixel_to_position(Vec2::new(100., 100.));
        let b = projector.container_pixel_to_position(Vec2::new(101., 100.));
        assert_ne!(a.x(), b.x());
        assert_relative_eq!(a.y(), b.y());
    }

    #[test]
    fn viewport_changes_with_zoom() {
        assert_eq!(pune_projector(19.).viewport(), pune_projector(19.).viewport());
        assert_ne!(pune_projector(19.).viewport(), pune_projector(18.).viewport());
    }

    #[test]
    fn scale_at_the_equator() {
        // At zoom 19, a pixel is about 0.3 m on the equator.
        let scale = calculate_pixels_per_meter(0., 19.);
        assert_relative_eq!(scale, 1. / 0.298, epsilon = 0.01);
    }
}
