mod places;
mod plugins;
mod windows;

use egui::Context;
use georef::{
    GroundOverlay, ImageResource, InvalidBounds, Map, MapMemory, MapSurface, extras::PointerPosition,
};

use crate::plugins::ClickWatcher;

const SITE_IMAGE_URI: &str = "bytes://site.png";

pub struct MyApp {
    surface: MapSurface,
    map_memory: MapMemory,
    overlay: GroundOverlay,
    click_watcher: ClickWatcher,
}

impl MyApp {
    /// Create the app showing the bundled photograph, or `image` if given.
    ///
    /// # Errors
    ///
    /// [`InvalidBounds`] if the site's corners do not delimit an area.
    pub fn new(egui_ctx: &Context, image: Option<ImageResource>) -> Result<Self, InvalidBounds> {
        egui_extras::install_image_loaders(egui_ctx);
        egui_ctx.include_bytes(SITE_IMAGE_URI, include_bytes!("../assets/site.png").as_slice());

        let image = image.unwrap_or_else(|| ImageResource::new(SITE_IMAGE_URI));
        log::info!("Overlaying {}.", image.uri());

        let mut overlay = GroundOverlay::new(places::site_bounds()?, image);
        let mut surface = MapSurface::new();
        surface.add(&mut overlay);

        let mut map_memory = MapMemory::default();
        if map_memory.set_zoom(19.).is_err() {
            log::warn!("Zoom 19 is not supported, staying at {}.", map_memory.zoom());
        }

        Ok(Self {
            surface,
            map_memory,
            overlay,
            click_watcher: ClickWatcher::default(),
        })
    }
}

impl eframe::App for MyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| {
                let map = Map::new(&mut self.surface, &mut self.map_memory, places::site_center())
                    .with_overlay(&mut self.overlay)
                    .with_plugin(plugins::markers())
                    .with_plugin(&mut self.click_watcher)
                    .with_plugin(PointerPosition);

                ui.add(map);

                {
                    use windows::{controls, go_to_site, zoom};

                    controls(ui, &mut self.overlay, &mut self.surface);
                    zoom(ui, &mut self.map_memory);
                    go_to_site(ui, &mut self.map_memory);
                    self.click_watcher.show_position(ui);
                }
            });
    }
}
