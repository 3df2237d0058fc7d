use egui::{Rect, Ui};

/// Layers of the map, painted bottom to top in the order of declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pane {
    /// Lowest layer, right above the map background.
    MapPane,
    /// Layer for ground overlays and other shapes glued to the map.
    OverlayLayer,
    /// Layer for markers.
    MarkerLayer,
    /// Topmost layer, e.g. for info windows.
    FloatPane,
}

/// Whether a [`VisualNode`] gets painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

/// Reference to a raster image, in a form understood by egui's image loaders, e.g.
/// `bytes://overlay.png`, `file://photos/site.jpg` or `https://example.com/site.png`.
///
/// The image is resolved lazily while painting, so the loaders matching the scheme must be
/// installed (see `egui_extras::install_image_loaders`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct ImageResource(String);

impl ImageResource {
    /// Wrap the URI as is. It is not validated until the image is loaded.
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// URI to pass to [`egui::Image::new`].
    pub fn uri(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageResource {
    fn from(uri: &str) -> Self {
        Self::new(uri)
    }
}

impl From<String> for ImageResource {
    fn from(uri: String) -> Self {
        Self(uri)
    }
}

/// Absolutely positioned rectangle holding an image stretched to fill it. Nodes are owned by
/// overlays and painted by the [`crate::Map`] on their [`Pane`].
#[derive(Debug, Clone, PartialEq)]
pub struct VisualNode {
    pane: Pane,
    image: ImageResource,
    rect: Option<Rect>,
    visibility: Visibility,
}

impl VisualNode {
    /// Node which is visible, but has no geometry until [`VisualNode::set_rect`] is called.
    pub fn new(pane: Pane, image: ImageResource) -> Self {
        Self {
            pane,
            image,
            rect: None,
            visibility: Visibility::Visible,
        }
    }

    /// Layer the node is painted in.
    pub fn pane(&self) -> Pane {
        self.pane
    }

    pub fn image(&self) -> &ImageResource {
        &self.image
    }

    /// Position and size in painter coordinates, `None` if never laid out.
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    /// Lay out the node, replacing its previous geometry.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = Some(rect);
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    pub(crate) fn paint(&self, ui: &Ui) {
        if self.visibility == Visibility::Hidden {
            return;
        }

        let Some(rect) = self.rect else {
            return;
        };

        if rect.is_positive() && ui.clip_rect().intersects(rect) {
            egui::Image::new(self.image.uri()).paint_at(ui, rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Pos2, Vec2};

    #[test]
    fn panes_are_ordered_bottom_to_top() {
        let mut panes = vec![Pane::FloatPane, Pane::MapPane, Pane::MarkerLayer, Pane::OverlayLayer];
        panes.sort();
        assert_eq!(
            panes,
            [Pane::MapPane, Pane::OverlayLayer, Pane::MarkerLayer, Pane::FloatPane]
        );
    }

    #[test]
    fn new_node_is_visible_and_not_laid_out() {
        let node = VisualNode::new(Pane::OverlayLayer, "bytes://overlay.png".into());
        assert_eq!(node.visibility(), Visibility::Visible);
        assert_eq!(node.rect(), None);
        assert_eq!(node.image().uri(), "bytes://overlay.png");
    }

    #[test]
    fn node_keeps_its_geometry_and_visibility() {
        let mut node = VisualNode::new(Pane::OverlayLayer, "bytes://overlay.png".into());
        let rect = Rect::from_min_size(Pos2::new(1., 2.), Vec2::new(3., 4.));

        node.set_rect(rect);
        node.set_visibility(Visibility::Hidden);

        assert_eq!(node.rect(), Some(rect));
        assert_eq!(node.visibility(), Visibility::Hidden);
    }
}
