// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use cbb_scrape::{
    config::{credentials::load_dotenv, state::AppState},
    gui,
    log::{self, LogTarget},
};
use eframe::egui::ViewportBuilder;

fn main() {
    log::init(LogTarget::FileOnly);
    load_dotenv();

    let state = AppState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(state.gui.inner_size())
            .with_title("College Basketball Scraper"),
        ..Default::default()
    };

    if let Err(e) = gui::run(state, options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
