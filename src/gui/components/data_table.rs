// src/gui/components/data_table.rs
//
// Draws the table for the active source. Purely a view.

use eframe::egui::{self, Align, Layout};
use egui_extras::{Column, TableBuilder};

use crate::{config::options::SourceKind, data::DataSet};

fn is_numeric(cell: &str) -> bool {
    !cell.is_empty() && cell.parse::<f64>().is_ok()
}

fn width_for(kind: SourceKind, ci: usize) -> f32 {
    match (kind, ci) {
        (SourceKind::Efficiency, 0) | (SourceKind::Ranking, 1) => 200.0,
        (SourceKind::Odds | SourceKind::OddsPortal, 0 | 1) => 180.0,
        _ => 90.0,
    }
}

pub fn draw(ui: &mut egui::Ui, kind: SourceKind, data: &DataSet) {
    if data.is_empty() {
        ui.weak("No rows. Press Scrape to fetch this source.");
    }

    let cols = data.header_count();

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt(("table_state", kind));
    for ci in 0..cols {
        table = table.column(Column::initial(width_for(kind, ci)).resizable(true).clip(true).at_least(40.0));
    }

    table
        .header(24.0, |mut header| {
            for h in &data.headers {
                header.col(|ui| {
                    ui.strong(h.as_str());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, data.row_count(), |mut row| {
                let Some(cells) = data.rows.get(row.index()) else { return };
                for cell in cells {
                    row.col(|ui| {
                        // numbers right-aligned
                        if is_numeric(cell) {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(cell.as_str());
                            });
                        } else {
                            ui.label(cell.as_str());
                        }
                    });
                }
            });
        });
}
