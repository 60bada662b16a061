#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use eframe::egui;

use tinycanvas::app::TinyCanvasApp;
use tinycanvas::cli::{CONTROLS, CliArgs};
use tinycanvas::{log_info, logger};

fn main() -> Result<(), eframe::Error> {
    let config = CliArgs::parse().config();

    // Session log (overwrites the previous session)
    logger::init();

    println!("TinyCanvas: {}x{}", config.width, config.height);
    println!("{}", CONTROLS);
    log_info!("Starting with a {}x{} canvas", config.width, config.height);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([480.0, 360.0])
            .with_title("TinyCanvas"),
        ..Default::default()
    };

    eframe::run_native(
        "TinyCanvas",
        options,
        Box::new(move |cc| Box::new(TinyCanvasApp::new(cc, config))),
    )
}
