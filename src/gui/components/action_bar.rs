// src/gui/components/action_bar.rs

use eframe::egui;

use crate::{config::options::SourceKind, gui::{actions, app::App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let ctx = ui.ctx().clone();
    let has_data = app.current_report().is_some();
    let live = app.current_report().is_some_and(|r| !r.is_fallback());

    ui.horizontal(|ui| {
        if ui.button("Scrape").on_hover_text("Fetch this source now").clicked() {
            actions::scrape(app);
        }

        if ui.add_enabled(live, egui::Button::new("Save snapshot"))
            .on_hover_text("Write <source>_<date>.csv into the output folder")
            .on_disabled_hover_text(if has_data {
                "Showing default data; only a successful scrape can be saved"
            } else {
                "Scrape first"
            })
            .clicked()
        {
            actions::snapshot(app);
        }

        if ui.add_enabled(has_data, egui::Button::new("Copy"))
            .on_hover_text("Copy the table as CSV")
            .clicked()
        {
            actions::copy(app, &ctx);
        }

        ui.separator();

        ui.label("Output:");
        let edit = ui.add(
            egui::TextEdit::singleline(&mut app.out_dir_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(260.0),
        );
        if edit.lost_focus() {
            let text = app.out_dir_text.clone();
            app.state.options.export.set_dir(&text);
            app.out_dir_text = app.state.options.export.out_dir.to_string_lossy().into_owned();
            logd!("UI: out_dir → {}", app.out_dir_text);
        }

        if app.current() == SourceKind::Efficiency {
            ui.separator();
            ui.checkbox(&mut app.state.gui.show_chart, "Chart");
        }
    });
}
