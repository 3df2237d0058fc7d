use egui::{Color32, Response, Ui};
use georef::{
    Plugin, Position, Projection as _, Projector,
    extras::{Marker, Markers},
    pointer::clicked_position,
};

use crate::places;

/// Markers at the corners of the photograph and at the reference points.
pub fn markers() -> impl Plugin {
    let [first, second] = places::reference_points();

    Markers::new(vec![
        Marker::new(places::north_east(), "North East"),
        Marker::new(places::south_west(), "South West"),
        Marker::new(first, "Reference A"),
        Marker::new(second, "Reference B"),
    ])
}

/// Remembers where the map was clicked last.
#[derive(Default, Clone)]
pub struct ClickWatcher {
    pub clicked_at: Option<Position>,
}

impl ClickWatcher {
    pub fn show_position(&self, ui: &Ui) {
        if let Some(clicked_at) = self.clicked_at {
            egui::Window::new("Clicked Position")
                .collapsible(false)
                .resizable(false)
                .title_bar(false)
                .anchor(egui::Align2::CENTER_BOTTOM, [0., -10.])
                .show(ui.ctx(), |ui| {
                    ui.label(format!("{:.08} {:.08}", clicked_at.y(), clicked_at.x()))
                        .on_hover_text("last clicked position");
                });
        }
    }
}

impl Plugin for &mut ClickWatcher {
    fn run(self: Box<Self>, ui: &mut Ui, response: &Response, projector: &Projector) {
        if let Some(position) = clicked_position(response, projector) {
            log::info!(
                "Container setting marker at Lat: {}, Lng: {}",
                position.y(),
                position.x()
            );
            self.clicked_at = Some(position);
        }

        if let Some(position) = self.clicked_at {
            ui.painter()
                .circle_filled(projector.project(position), 5.0, Color32::BLUE);
        }
    }
}
