// src/gui/components/tabs.rs
//
// Renders the source tabs and performs the tab switch itself.
// Switching never scrapes; a tab shows its last report until Scrape is pressed.

use eframe::egui;

use crate::{config::options::SourceKind, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.current();

        for kind in SourceKind::ALL {
            let selected = kind == cur;
            let title = if app.reports.get(&kind).is_some_and(|r| r.is_fallback()) {
                join!(kind.title(), " ⚠")
            } else {
                s!(kind.title())
            };

            if ui.selectable_label(selected, title).clicked() && !selected {
                logf!("UI: Tab switch {:?} → {:?}", cur, kind);
                app.set_current(kind);
                match app.reports.get(&kind) {
                    Some(r) => app.status(r.summary()),
                    None => app.status(format!("{}: not scraped yet", kind.title())),
                }
            }
        }
    });
}
