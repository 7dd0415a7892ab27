//! inkread — an article reading view with adjustable typography
//!
//! A side panel customizes font family, size, colors, and column width;
//! applied settings drive the article's appearance.

mod app;
mod article;
mod panel;
mod params;
mod style;

use app::ReaderApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("inkread"),
        ..Default::default()
    };

    eframe::run_native(
        "inkread",
        options,
        Box::new(|cc| Box::new(ReaderApp::new(cc))),
    )
}
