use egui::{PointerButton, Response, Sense, Ui, UiBuilder, Vec2, Widget};

use crate::{
    MapMemory, Position,
    overlay::{MapSurface, Overlay},
    projector::Projector,
};

/// Plugins allow drawing custom shapes on the map. They are recreated in every frame, which makes
/// them suitable for things derived from the application's state. Use [`Overlay`] for objects
/// which need to persist and react to being attached and detached.
pub trait Plugin {
    /// Function called at each frame.
    ///
    /// The provided [`Ui`] has its [`Ui::max_rect`] set to the full rect that was allocated
    /// by the map widget. Implementations should typically use the provided [`Projector`] to
    /// compute target screen coordinates and use one of the various egui methods to draw at these
    /// coordinates instead of relying on [`Ui`] layout system.
    ///
    /// The provided [`Response`] is the response of the map widget itself and can be used to test
    /// if the mouse is hovering or clicking on the map.
    fn run(self: Box<Self>, ui: &mut Ui, response: &Response, projector: &Projector);
}

/// The actual map widget. Instances are to be created on each frame, as all necessary state is
/// stored in [`MapSurface`] and [`MapMemory`].
///
/// # Examples
///
/// ```
/// # use georef::{GroundOverlay, Map, MapMemory, MapSurface, lat_lon};
/// fn update(
///     ui: &mut egui::Ui,
///     surface: &mut MapSurface,
///     map_memory: &mut MapMemory,
///     overlay: &mut GroundOverlay,
/// ) {
///     ui.add(
///         Map::new(surface, map_memory, lat_lon(18.5314, 73.870999)).with_overlay(overlay),
///     );
/// }
/// ```
pub struct Map<'a, 'b> {
    surface: &'a mut MapSurface,
    memory: &'a mut MapMemory,
    my_position: Position,

    overlays: Vec<&'b mut dyn Overlay>,
    plugins: Vec<Box<dyn Plugin + 'b>>,

    zoom_gesture_enabled: bool,
    drag_gesture_enabled: bool,
    zoom_speed: f64,
    double_click_to_zoom: bool,
    zoom_with_ctrl: bool,
}

impl<'a, 'b> Map<'a, 'b> {
    pub fn new(surface: &'a mut MapSurface, memory: &'a mut MapMemory, my_position: Position) -> Self {
        Self {
            surface,
            memory,
            my_position,
            overlays: Vec::default(),
            plugins: Vec::default(),
            zoom_gesture_enabled: true,
            drag_gesture_enabled: true,
            zoom_speed: 2.0,
            double_click_to_zoom: false,
            zoom_with_ctrl: true,
        }
    }

    /// Make the overlay available to the map in this frame. It is drawn and painted only if it is
    /// attached to the [`MapSurface`].
    pub fn with_overlay(mut self, overlay: &'b mut dyn Overlay) -> Self {
        self.overlays.push(overlay);
        self
    }

    /// Add plugin to the drawing pipeline. Plugins are run after overlays are painted.
    pub fn with_plugin(mut self, plugin: impl Plugin + 'b) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Set whether map should perform zoom gesture.
    ///
    /// Zoom is typically triggered by the mouse wheel while holding <kbd>ctrl</kbd> key on native
    /// and web, and by pinch gesture on touch screens.
    pub fn zoom_gesture(mut self, enabled: bool) -> Self {
        self.zoom_gesture_enabled = enabled;
        self
    }

    /// Set whether map should perform drag gesture.
    pub fn drag_gesture(mut self, enabled: bool) -> Self {
        self.drag_gesture_enabled = enabled;
        self
    }

    /// Change how far to zoom in/out. Default value is 2.0.
    pub fn zoom_speed(mut self, speed: f64) -> Self {
        self.zoom_speed = speed;
        self
    }

    /// Set whether double click with the primary button zooms in.
    pub fn double_click_to_zoom(mut self, enabled: bool) -> Self {
        self.double_click_to_zoom = enabled;
        self
    }

    /// When enabled (the default), zooming with the mouse wheel requires holding <kbd>ctrl</kbd>,
    /// and the wheel alone pans the map. When disabled, the wheel zooms.
    pub fn zoom_with_ctrl(mut self, enabled: bool) -> Self {
        self.zoom_with_ctrl = enabled;
        self
    }
}

impl Map<'_, '_> {
    /// Handle zoom and drag inputs. Returns whether the viewport moved.
    fn handle_gestures(&mut self, ui: &Ui, response: &Response) -> bool {
        let zoom = self.memory.zoom();
        let mut zoom_delta = ui.input(|input| input.zoom_delta()) as f64;

        if self.double_click_to_zoom
            && ui.ui_contains_pointer()
            && response.double_clicked_by(PointerButton::Primary)
        {
            zoom_delta = 2.0;
        }

        if !self.zoom_with_ctrl && zoom_delta == 1.0 {
            // Raw scroll values are on a similar scale to what `zoom_delta()` reports.
            zoom_delta = ui.input(|input| 1.0 + input.smooth_scroll_delta.y / 200.0) as f64;
        }

        // Zooming and dragging need to be exclusive, otherwise the map will get dragged when
        // pinch gesture is used.
        if !(0.99..=1.01).contains(&zoom_delta)
            && ui.ui_contains_pointer()
            && self.zoom_gesture_enabled
        {
            // Displacement of mouse pointer relative to widget center.
            let offset = response.hover_pos().map(|p| p - response.rect.center());

            // Keep the location under the pointer fixed: move it to the widget's center, zoom,
            // then move it back.
            if let Some(offset) = offset {
                self.memory.center_mode = self
                    .memory
                    .center_mode
                    .clone()
                    .shift(self.my_position, -offset, zoom)
                    .zero_offset();
            }

            self.memory.zoom.zoom_by((zoom_delta - 1.) * self.zoom_speed);
            let zoom = self.memory.zoom();

            if let Some(offset) = offset {
                self.memory.center_mode =
                    self.memory
                        .center_mode
                        .clone()
                        .shift(self.my_position, offset, zoom);
            }

            return true;
        }

        let mut moved = self.drag_gesture_enabled
            && self
                .memory
                .center_mode
                .recalculate_drag(response, self.my_position, zoom);

        // With ctrl-zoom, the wheel (or two-finger drag on a touchpad) pans the map.
        if self.zoom_with_ctrl && self.drag_gesture_enabled && ui.ui_contains_pointer() {
            let scroll_delta = ui.input(|input| input.smooth_scroll_delta);
            if scroll_delta != Vec2::ZERO {
                self.memory.center_mode =
                    self.memory
                        .center_mode
                        .clone()
                        .shift(self.my_position, scroll_delta, zoom);
                moved = true;
            }
        }

        moved
    }
}

impl Widget for Map<'_, '_> {
    fn ui(mut self, ui: &mut Ui) -> Response {
        let (rect, mut response) =
            ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());

        if self.handle_gestures(ui, &response) {
            response.mark_changed();
        }

        let projector = Projector::new(rect, self.memory, self.my_position);

        let drawn = self
            .surface
            .redraw(&mut self.overlays, &projector, projector.viewport());
        if drawn > 0 {
            log::trace!("Redrawn {drawn} overlay(s).");
        }

        ui.painter()
            .with_clip_rect(rect)
            .rect_filled(rect, 0., ui.visuals().extreme_bg_color);

        let mut layer_ui = ui.new_child(UiBuilder::new().max_rect(rect).id_salt("overlays"));
        layer_ui.set_clip_rect(rect);
        for node in self.surface.nodes(&self.overlays) {
            node.paint(&layer_ui);
        }

        for (idx, plugin) in self.plugins.into_iter().enumerate() {
            let mut child_ui = ui.new_child(UiBuilder::new().max_rect(rect).id_salt(idx));
            child_ui.set_clip_rect(rect);
            plugin.run(&mut child_ui, &response, &projector);
        }

        response
    }
}
