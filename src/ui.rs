mod app;

use std::path::PathBuf;

use eframe::egui;

pub use app::ImageControlApp;

pub fn run(inputs: Vec<PathBuf>) -> Result<(), String> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1180.0, 820.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Image Control",
        options,
        Box::new(move |cc| Ok(Box::new(ImageControlApp::new(cc, inputs)))),
    )
    .map_err(|error| error.to_string())
}
