use egui::{Pos2, Rect, vec2};

use crate::{
    bounds::GeoBounds,
    node::{ImageResource, Pane, Visibility, VisualNode},
    overlay::{MapSurface, Overlay, OverlayId},
    projector::Projection,
};

enum Attachment {
    Detached,
    Attached(VisualNode),
}

/// Image stretched over a geographical area, e.g. an aerial photograph or a floor plan of a
/// site. The image is laid out in [`Pane::OverlayLayer`], so it follows the map when it is
/// dragged or zoomed.
///
/// ```
/// # use georef::{GeoBounds, GroundOverlay, MapSurface, lat_lon};
/// let bounds = GeoBounds::new(lat_lon(18.53080, 73.87041), lat_lon(18.53180, 73.87135))?;
/// let mut overlay = GroundOverlay::new(bounds, "bytes://site.png");
/// let mut surface = MapSurface::new();
///
/// overlay.toggle_attachment(&mut surface);
/// assert!(overlay.is_attached());
/// # Ok::<(), georef::InvalidBounds>(())
/// ```
pub struct GroundOverlay {
    id: OverlayId,
    bounds: GeoBounds,
    image: ImageResource,
    attachment: Attachment,
}

impl GroundOverlay {
    /// Create a detached overlay stretching `image` over `bounds`. It gets its node once added
    /// to a [`MapSurface`].
    pub fn new(bounds: GeoBounds, image: impl Into<ImageResource>) -> Self {
        Self {
            id: OverlayId::unique(),
            bounds,
            image: image.into(),
            attachment: Attachment::Detached,
        }
    }

    /// Area covered by the image.
    pub fn bounds(&self) -> GeoBounds {
        self.bounds
    }

    /// Image this overlay was created with. The node keeps its own copy.
    pub fn image(&self) -> &ImageResource {
        &self.image
    }

    /// Whether the overlay currently has a visual node, i.e. was added to a map and not removed
    /// since.
    pub fn is_attached(&self) -> bool {
        matches!(self.attachment, Attachment::Attached(_))
    }

    /// Visibility of the node, `None` while detached.
    pub fn visibility(&self) -> Option<Visibility> {
        self.node().map(VisualNode::visibility)
    }

    fn node_mut(&mut self) -> Option<&mut VisualNode> {
        match &mut self.attachment {
            Attachment::Detached => None,
            Attachment::Attached(node) => Some(node),
        }
    }

    /// Hide the image. Does nothing while detached.
    pub fn hide(&mut self) {
        if let Some(node) = self.node_mut() {
            node.set_visibility(Visibility::Hidden);
        }
    }

    /// Show the image. Does nothing while detached.
    pub fn show(&mut self) {
        if let Some(node) = self.node_mut() {
            node.set_visibility(Visibility::Visible);
        }
    }

    /// Show the image if it is hidden, hide it otherwise. Does nothing while detached.
    pub fn toggle_visibility(&mut self) {
        match self.visibility() {
            Some(Visibility::Hidden) => self.show(),
            Some(Visibility::Visible) => self.hide(),
            None => log::trace!("{:?} is detached, nothing to toggle.", self.id),
        }
    }

    /// Remove the overlay from `surface` if it is attached to it, add it otherwise.
    ///
    /// An attached overlay must be removed before it is dropped, see [`MapSurface`].
    pub fn toggle_attachment(&mut self, surface: &mut MapSurface) {
        let attached = surface.contains(self.id);
        surface.set_map(self, !attached);
    }
}

impl Overlay for GroundOverlay {
    fn id(&self) -> OverlayId {
        self.id
    }

    fn on_add(&mut self) {
        if self.is_attached() {
            log::debug!("{:?} already has a node, keeping it.", self.id);
            return;
        }

        self.attachment =
            Attachment::Attached(VisualNode::new(Pane::OverlayLayer, self.image.clone()));
    }

    fn draw(&mut self, projection: &dyn Projection) {
        let Attachment::Attached(node) = &mut self.attachment else {
            log::trace!("{:?} is detached, nothing to draw.", self.id);
            return;
        };

        // Screen's y axis points south, so the top edge comes from the north-east corner.
        let south_west = projection.project(self.bounds.south_west());
        let north_east = projection.project(self.bounds.north_east());

        let width = (north_east.x - south_west.x).max(0.);
        let height = (south_west.y - north_east.y).max(0.);

        node.set_rect(Rect::from_min_size(
            Pos2::new(south_west.x, north_east.y),
            vec2(width, height),
        ));
    }

    fn on_remove(&mut self) {
        if let Attachment::Attached(_) = std::mem::replace(&mut self.attachment, Attachment::Detached)
        {
            log::trace!("{:?} released its node.", self.id);
        }
    }

    fn node(&self) -> Option<&VisualNode> {
        match &self.attachment {
            Attachment::Detached => None,
            Attachment::Attached(node) => Some(node),
        }
    }
}
