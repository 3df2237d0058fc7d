use egui::{Align2, RichText, Ui, Window};
use georef::{GroundOverlay, MapMemory, MapSurface, Overlay as _, Visibility};

/// Buttons toggling the overlay's visibility and its attachment to the map.
pub fn controls(ui: &Ui, overlay: &mut GroundOverlay, surface: &mut MapSurface) {
    Window::new("Controls")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::RIGHT_TOP, [-10., 10.])
        .show(ui.ctx(), |ui| {
            ui.horizontal(|ui| {
                if ui.button("Toggle").clicked() {
                    overlay.toggle_visibility();
                }

                if ui.button("Toggle attachment").clicked() {
                    overlay.toggle_attachment(surface);
                }
            });

            let state = match (surface.contains(overlay.id()), overlay.visibility()) {
                (false, _) => "detached",
                (true, Some(Visibility::Hidden)) => "attached, hidden",
                (true, _) => "attached, visible",
            };
            ui.label(format!("overlay {state}"));
        });
}

/// Simple GUI to zoom in and out.
pub fn zoom(ui: &Ui, map_memory: &mut MapMemory) {
    Window::new("Map")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::LEFT_BOTTOM, [10., -10.])
        .show(ui.ctx(), |ui| {
            ui.horizontal(|ui| {
                if ui.button(RichText::new("➕").heading()).clicked() {
                    let _ = map_memory.zoom_in();
                }

                if ui.button(RichText::new("➖").heading()).clicked() {
                    let _ = map_memory.zoom_out();
                }
            });
        });
}

/// When map is "detached", show a window with an option to go back to the site.
pub fn go_to_site(ui: &Ui, map_memory: &mut MapMemory) {
    if let Some(position) = map_memory.detached() {
        Window::new("Center")
            .collapsible(false)
            .resizable(false)
            .title_bar(false)
            .anchor(Align2::RIGHT_BOTTOM, [-10., -10.])
            .show(ui.ctx(), |ui| {
                ui.label(format!(
                    "center at {:.06} {:.06}",
                    position.y(),
                    position.x()
                ));
                if ui.button(RichText::new("back to the site").heading()).clicked() {
                    map_memory.follow_my_position();
                }
            });
    }
}
