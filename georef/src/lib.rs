//! Georeferenced image overlays for an [egui](https://github.com/emilk/egui) slippy map.
//!
//! A [`GroundOverlay`] stretches an image over a [`GeoBounds`] area. Once attached to a
//! [`MapSurface`], the [`Map`] widget keeps the image aligned with the map while it is dragged
//! and zoomed.
//!
//! ```
//! # use georef::{GeoBounds, GroundOverlay, Map, MapMemory, MapSurface, lat_lon};
//! struct MyApp {
//!     surface: MapSurface,
//!     memory: MapMemory,
//!     overlay: GroundOverlay,
//! }
//!
//! impl MyApp {
//!     fn update(&mut self, ui: &mut egui::Ui) {
//!         if ui.button("Toggle").clicked() {
//!             self.overlay.toggle_visibility();
//!         }
//!
//!         ui.add(
//!             Map::new(&mut self.surface, &mut self.memory, lat_lon(18.5314, 73.870999))
//!                 .with_overlay(&mut self.overlay),
//!         );
//!     }
//! }
//! ```
#![deny(clippy::unwrap_used, rustdoc::broken_intra_doc_links)]

mod bounds;
mod center;
pub mod extras;
mod ground_overlay;
mod map;
mod memory;
pub mod mercator;
mod node;
mod overlay;
pub mod pointer;
mod position;
mod projector;
mod zoom;

pub use bounds::{GeoBounds, InvalidBounds};
pub use ground_overlay::GroundOverlay;
pub use map::{Map, Plugin};
pub use memory::MapMemory;
pub use node::{ImageResource, Pane, Visibility, VisualNode};
pub use overlay::{MapSurface, Overlay, OverlayId};
pub use position::{Pixels, Position, lat_lon, lon_lat};
pub use projector::{Projection, Projector, Viewport};
pub use zoom::InvalidZoom;
