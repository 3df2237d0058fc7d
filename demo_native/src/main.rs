use demo::MyApp;
use georef::ImageResource;

/// Optional first argument is a path to an image to use instead of the bundled photograph.
fn image_from_args() -> Option<ImageResource> {
    let path = std::env::args().nth(1)?;
    let path = std::fs::canonicalize(&path).unwrap_or_else(|err| {
        log::warn!("Cannot resolve {path}: {err}.");
        path.into()
    });
    Some(ImageResource::new(format!("file://{}", path.display())))
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let image = image_from_args();

    eframe::run_native(
        "Ground overlay",
        Default::default(),
        Box::new(|cc| Ok(Box::new(MyApp::new(&cc.egui_ctx, image)?))),
    )
}
