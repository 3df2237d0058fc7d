//! Ready-made [`Plugin`]s.

use egui::{Align2, Color32, FontId, Response, Stroke, Ui, vec2};

use crate::{Plugin, Position, Projector, projector::Projection as _};

/// Point of interest with a title.
#[derive(Debug, Clone)]
pub struct Marker {
    pub position: Position,
    pub title: String,
}

impl Marker {
    pub fn new(position: Position, title: impl Into<String>) -> Self {
        Self {
            position,
            title: title.into(),
        }
    }
}

/// [`Plugin`] which draws markers with their titles.
pub struct Markers {
    markers: Vec<Marker>,
}

impl Markers {
    /// Markers are drawn in the given order, so the last one ends up on top.
    pub fn new(markers: Vec<Marker>) -> Self {
        Self { markers }
    }
}

impl Plugin for Markers {
    fn run(self: Box<Self>, ui: &mut Ui, _response: &Response, projector: &Projector) {
        let painter = ui.painter();

        for marker in &self.markers {
            let screen_position = projector.project(marker.position);

            if !painter.clip_rect().expand(50.).contains(screen_position) {
                continue;
            }

            let galley = painter.layout_no_wrap(
                marker.title.to_owned(),
                FontId::default(),
                Color32::WHITE,
            );

            let offset = vec2(8., 8.);

            painter.rect_filled(
                galley
                    .rect
                    .translate(screen_position.to_vec2() + offset)
                    .expand(4.),
                4.,
                Color32::BLACK.gamma_multiply(0.8),
            );

            painter.galley(screen_position + offset, galley, Color32::WHITE);

            painter.circle(
                screen_position,
                6.,
                Color32::from_rgb(0xea, 0x43, 0x35),
                Stroke::new(2., Color32::WHITE),
            );
        }
    }
}

/// [`Plugin`] which writes the position under the pointer in the bottom-left corner of the map.
pub struct PointerPosition;

impl Plugin for PointerPosition {
    fn run(self: Box<Self>, ui: &mut Ui, response: &Response, projector: &Projector) {
        if let Some(hover) = response.hover_pos() {
            let position = projector.unproject(hover);
            ui.painter().text(
                response.rect.left_bottom() + vec2(8., -8.),
                Align2::LEFT_BOTTOM,
                format!("{:.6}, {:.6}", position.y(), position.x()),
                FontId::monospace(12.),
                ui.visuals().strong_text_color(),
            );
        }
    }
}
