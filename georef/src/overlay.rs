//! Retained overlays and their registration with the map.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{
    node::VisualNode,
    projector::{Projection, Viewport},
};

/// Identifies an overlay within [`MapSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(u64);

impl OverlayId {
    /// Allocate an id which was not handed out before in this process.
    pub fn unique() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Custom object which is attached to the map and keeps a [`VisualNode`] positioned over it.
///
/// Unlike [`crate::Plugin`]s, which are rebuilt in every frame, overlays persist between frames
/// and follow a lifecycle driven by the [`MapSurface`] they are registered with:
///
/// 1. [`Overlay::on_add`] once, when registered,
/// 2. [`Overlay::draw`] on the first frame afterwards and whenever the viewport changes,
/// 3. [`Overlay::on_remove`] once, when unregistered.
///
/// These methods are meant to be called by the surface and the map widget only.
pub trait Overlay {
    fn id(&self) -> OverlayId;

    /// Create the visual node. The map is ready, but the projection is not yet known.
    fn on_add(&mut self);

    /// Lay out the node for the current viewport.
    fn draw(&mut self, projection: &dyn Projection);

    /// Release the visual node.
    fn on_remove(&mut self);

    /// Node to be painted, if there is one.
    fn node(&self) -> Option<&VisualNode>;
}

/// Registry of overlays attached to a map. Must persist between frames, together with
/// [`crate::MapMemory`].
///
/// The surface knows overlays only by their [`OverlayId`], so it cannot tell when one is dropped.
/// Remove an attached overlay before dropping it, otherwise its id stays registered.
#[derive(Debug, Default)]
pub struct MapSurface {
    /// Attached overlays, in the order they were added.
    attached: Vec<OverlayId>,

    /// Viewport each attached overlay was drawn for. Missing until the first draw.
    drawn: HashMap<OverlayId, Viewport>,
}

impl MapSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the overlay with given id is attached to this surface.
    pub fn contains(&self, id: OverlayId) -> bool {
        self.attached.contains(&id)
    }

    /// Number of attached overlays.
    pub fn len(&self) -> usize {
        self.attached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }

    /// Attach the overlay, calling its [`Overlay::on_add`]. Does nothing if already attached.
    pub fn add(&mut self, overlay: &mut dyn Overlay) {
        let id = overlay.id();

        if self.contains(id) {
            log::debug!("{id:?} is already attached.");
            return;
        }

        log::debug!("Attaching {id:?}.");
        self.attached.push(id);
        overlay.on_add();
    }

    /// Detach the overlay, calling its [`Overlay::on_remove`]. Does nothing if not attached.
    pub fn remove(&mut self, overlay: &mut dyn Overlay) {
        let id = overlay.id();

        let Some(index) = self.attached.iter().position(|attached| *attached == id) else {
            log::debug!("{id:?} is not attached.");
            return;
        };

        log::debug!("Detaching {id:?}.");
        self.attached.remove(index);
        self.drawn.remove(&id);
        overlay.on_remove();
    }

    /// Attach or detach the overlay.
    pub fn set_map(&mut self, overlay: &mut dyn Overlay, attached: bool) {
        if attached {
            self.add(overlay);
        } else {
            self.remove(overlay);
        }
    }

    /// Call [`Overlay::draw`] on attached overlays which were not drawn for `viewport` yet, either
    /// because they were attached recently or because the map moved since. Overlays left out of
    /// some frames catch up once they are passed again. Returns the number of overlays drawn.
    pub(crate) fn redraw(
        &mut self,
        overlays: &mut [&mut dyn Overlay],
        projection: &dyn Projection,
        viewport: Viewport,
    ) -> usize {
        let mut drawn = 0;

        for overlay in overlays.iter_mut() {
            let id = overlay.id();

            if !self.contains(id) || self.drawn.get(&id) == Some(&viewport) {
                continue;
            }

            overlay.draw(projection);
            self.drawn.insert(id, viewport);
            drawn += 1;
        }

        drawn
    }

    /// Nodes of the attached overlays, ordered by their pane.
    pub(crate) fn nodes<'o>(&self, overlays: &'o [&mut dyn Overlay]) -> Vec<&'o VisualNode> {
        let mut nodes: Vec<_> = overlays
            .iter()
            .filter(|overlay| self.contains(overlay.id()))
            .filter_map(|overlay| overlay.node())
            .collect();

        // Stable, so the overlays added later are painted on top within a pane.
        nodes.sort_by_key(|node| node.pane());
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, lon_lat, node::Pane};
    use egui::{Pos2, Rect, vec2};

    /// Overlay which counts calls of its hooks.
    #[derive(Default)]
    pub struct Recorder {
        id: Option<OverlayId>,
        pub added: usize,
        pub drawn: usize,
        pub removed: usize,
        node: Option<VisualNode>,
    }

    impl Recorder {
        pub fn new() -> Self {
            Self {
                id: Some(OverlayId::unique()),
                ..Default::default()
            }
        }
    }

    impl Overlay for Recorder {
        fn id(&self) -> OverlayId {
            self.id.unwrap()
        }

        fn on_add(&mut self) {
            self.added += 1;
            self.node = Some(VisualNode::new(Pane::OverlayLayer, "bytes://a.png".into()));
        }

        fn draw(&mut self, _projection: &dyn Projection) {
            self.drawn += 1;
        }

        fn on_remove(&mut self) {
            self.removed += 1;
            self.node = None;
        }

        fn node(&self) -> Option<&VisualNode> {
            self.node.as_ref()
        }
    }

    /// Projection which maps degrees onto pixels linearly.
    pub struct Linear;

    impl Projection for Linear {
        fn project(&self, position: Position) -> Pos2 {
            Pos2::new(position.x() as f32, -position.y() as f32)
        }

        fn unproject(&self, pixel: Pos2) -> Position {
            lon_lat(pixel.x as f64, -pixel.y as f64)
        }

        fn container(&self) -> Rect {
            Rect::from_min_size(Pos2::ZERO, vec2(100., 100.))
        }
    }

    fn viewport(zoom: f64) -> Viewport {
        Viewport {
            rect: Linear.container(),
            zoom,
            center: lon_lat(0., 0.),
        }
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(OverlayId::unique(), OverlayId::unique());
    }

    #[test]
    fn adding_calls_on_add_once() {
        let _ = env_logger::try_init();

        let mut surface = MapSurface::new();
        let mut overlay = Recorder::new();

        surface.add(&mut overlay);
        surface.add(&mut overlay);

        assert_eq!(overlay.added, 1);
        assert_eq!(surface.len(), 1);
        assert!(surface.contains(overlay.id()));
    }

    #[test]
    fn removing_calls_on_remove_once() {
        let mut surface = MapSurface::new();
        let mut overlay = Recorder::new();

        surface.remove(&mut overlay);
        assert_eq!(overlay.removed, 0);

        surface.add(&mut overlay);
        surface.remove(&mut overlay);
        surface.remove(&mut overlay);

        assert_eq!(overlay.removed, 1);
        assert!(surface.is_empty());
    }

    #[test]
    fn set_map_attaches_and_detaches() {
        let mut surface = MapSurface::new();
        let mut overlay = Recorder::new();

        surface.set_map(&mut overlay, true);
        assert!(surface.contains(overlay.id()));

        surface.set_map(&mut overlay, false);
        assert!(!surface.contains(overlay.id()));
        assert_eq!((overlay.added, overlay.removed), (1, 1));
    }

    #[test]
    fn fresh_overlays_are_drawn_even_if_viewport_did_not_change() {
        let mut surface = MapSurface::new();
        let mut first = Recorder::new();
        let mut second = Recorder::new();

        surface.add(&mut first);
        assert_eq!(surface.redraw(&mut [&mut first], &Linear, viewport(1.)), 1);

        surface.add(&mut second);
        assert_eq!(
            surface.redraw(&mut [&mut first, &mut second], &Linear, viewport(1.)),
            1
        );

        assert_eq!((first.drawn, second.drawn), (1, 1));
    }

    #[test]
    fn overlays_are_drawn_when_viewport_changes() {
        let mut surface = MapSurface::new();
        let mut overlay = Recorder::new();
        surface.add(&mut overlay);

        surface.redraw(&mut [&mut overlay], &Linear, viewport(1.));
        surface.redraw(&mut [&mut overlay], &Linear, viewport(1.));
        surface.redraw(&mut [&mut overlay], &Linear, viewport(2.));

        assert_eq!(overlay.drawn, 2);
    }

    #[test]
    fn overlay_left_out_of_a_frame_catches_up() {
        let mut surface = MapSurface::new();
        let mut overlay = Recorder::new();
        surface.add(&mut overlay);

        surface.redraw(&mut [&mut overlay], &Linear, viewport(1.));
        assert_eq!(surface.redraw(&mut [], &Linear, viewport(2.)), 0);
        assert_eq!(surface.redraw(&mut [&mut overlay], &Linear, viewport(2.)), 1);

        assert_eq!(overlay.drawn, 2);
    }

    #[test]
    fn reattached_overlay_is_drawn_again() {
        let mut surface = MapSurface::new();
        let mut overlay = Recorder::new();

        surface.add(&mut overlay);
        surface.redraw(&mut [&mut overlay], &Linear, viewport(1.));
        surface.remove(&mut overlay);
        surface.add(&mut overlay);

        assert_eq!(surface.redraw(&mut [&mut overlay], &Linear, viewport(1.)), 1);
        assert_eq!(overlay.drawn, 2);
    }

    #[test]
    fn detached_overlays_are_not_drawn() {
        let mut surface = MapSurface::new();
        let mut overlay = Recorder::new();

        assert_eq!(surface.redraw(&mut [&mut overlay], &Linear, viewport(1.)), 0);

        surface.add(&mut overlay);
        surface.remove(&mut overlay);
        assert_eq!(surface.redraw(&mut [&mut overlay], &Linear, viewport(2.)), 0);
        assert_eq!(overlay.drawn, 0);
    }

    #[test]
    fn nodes_of_attached_overlays_only() {
        let mut surface = MapSurface::new();
        let mut attached = Recorder::new();
        let mut stray = Recorder::new();

        surface.add(&mut attached);
        // Hooks called behind the surface's back do not make the overlay attached.
        stray.on_add();

        let overlays: [&mut dyn Overlay; 2] = [&mut attached, &mut stray];
        assert_eq!(surface.nodes(&overlays).len(), 1);
    }
}
