// src/gui/actions/snapshot.rs
use crate::{error::SnapshotError, file, gui::app::App};

pub fn snapshot(app: &mut App) {
    // Apply whatever is in the text field first.
    let text = app.out_dir_text.clone();
    app.state.options.export.set_dir(&text);

    let Some(report) = app.current_report() else {
        app.status("Nothing to save yet, scrape first");
        logd!("Snapshot: Clicked, but {:?} has no data", app.current());
        return;
    };
    let dir = app.state.options.export.out_dir.clone();

    match file::save_report_today(&dir, report) {
        Ok(path) => {
            let rows = app.current_table().row_count();
            app.status(format!("Saved {} rows to {}", rows, path.display()));
        }
        Err(e @ SnapshotError::NotLive(_)) => app.status(e.to_string()),
        Err(e) => {
            loge!("Snapshot: {e}");
            app.status(format!("Save failed: {e}"));
        }
    }
}
