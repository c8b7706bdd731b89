// src/gui/actions/copy.rs
use eframe::egui;

use crate::{config::consts::SNAPSHOT_SEP, csv, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let data = app.current_table();
    if data.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let txt = csv::to_string(&data, SNAPSHOT_SEP);
    logf!("Copy: source={:?}, rows={}", app.current(), data.row_count());

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
