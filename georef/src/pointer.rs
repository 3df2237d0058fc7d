//! Turning pointer events into geographical positions.

use egui::{PointerButton, Response, Vec2};

use crate::{Position, projector::Projection};

/// Geographical position under `pixel`, given relative to the top-left corner of the map
/// container, e.g. as reported by a click handler.
pub fn pointer_to_position(projection: &dyn Projection, pixel: Vec2) -> Position {
    projection.container_pixel_to_position(pixel)
}

/// Position clicked with the primary button in this frame, if any. Releasing the button after
/// dragging the map does not count as a click.
pub fn clicked_position(response: &Response, projection: &dyn Projection) -> Option<Position> {
    if response.changed() || !response.clicked_by(PointerButton::Primary) {
        return None;
    }

    response
        .interact_pointer_pos()
        .map(|pos| pointer_to_position(projection, pos - projection.container().min))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MapMemory, Projector, lat_lon};
    use approx::assert_relative_eq;
    use egui::{Pos2, Rect};

    #[test]
    fn pointer_conversion_is_inverse_of_projection() {
        let mut memory = MapMemory::default();
        memory.set_zoom(19.).unwrap();
        let projector = Projector::new(
            Rect::from_min_size(Pos2::new(0., 30.), Vec2::new(1024., 768.)),
            &memory,
            lat_lon(18.5314, 73.870999),
        );

        for pixel in [Vec2::new(0., 0.), Vec2::new(512., 384.), Vec2::new(1000., 17.5)] {
            let position = pointer_to_position(&projector, pixel);
            let back = projector.position_to_container_pixel(position);
            assert_relative_eq!(back.x, pixel.x, epsilon = 0.01);
            assert_relative_eq!(back.y, pixel.y, epsilon = 0.01);
        }
    }

    #[test]
    fn middle_of_the_container_is_the_center() {
        let memory = MapMemory::default();
        let projector = Projector::new(
            Rect::from_min_size(Pos2::ZERO, Vec2::new(200., 100.)),
            &memory,
            lat_lon(18.5314, 73.870999),
        );

        let position = pointer_to_position(&projector, Vec2::new(100., 50.));
        assert_relative_eq!(position.y(), 18.5314, epsilon = 1e-9);
        assert_relative_eq!(position.x(), 73.870999, epsilon = 1e-9);
    }
}
