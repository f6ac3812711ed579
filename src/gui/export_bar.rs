// src/gui/export_bar.rs
//
// Controls above the table: qualifier highlighting, format/headers
// toggles, output path, Copy and Export. Copy/Export always work on the
// current view (filters + sort applied).

use eframe::egui;

use crate::config::options::ExportFormat;
use crate::csv::to_export_string;
use crate::file;

use super::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.heading(app.event_name.as_deref().unwrap_or("Race results"));
        if let Some((m, w)) = app.quotas {
            ui.label(format!("Men's slots: {m} — Women's slots: {w}"));
        }
    });

    ui.horizontal(|ui| {
        let highlight_label = if app.state.gui.highlight {
            "Clear qualifier highlight"
        } else {
            "Highlight qualifiers"
        };
        if ui.button(highlight_label).clicked() {
            app.toggle_highlight();
        }

        ui.separator();

        ui.label("Format:");
        ui.selectable_value(&mut app.state.options.export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut app.state.options.export.format, ExportFormat::Tsv, "TSV");
        ui.checkbox(&mut app.state.options.export.include_headers, "Headers");
        ui.checkbox(&mut app.state.options.export.mark_qualifiers, "Qualifier column");
    });

    ui.horizontal(|ui| {
        ui.label("Output:");
        ui.text_edit_singleline(&mut app.state.options.export.path);

        if ui.button("Copy").clicked() {
            let txt = export_text(app);
            ui.ctx().copy_text(txt);
            app.status("Copied to clipboard");
        }

        if ui.button("Export").clicked() {
            let export = app.state.options.export.clone();
            let headers = Some(app.headers.clone());
            let (rows, marks) = app.view_rows();
            let q = export.mark_qualifiers.then_some(marks.as_slice());
            match file::write_export(&export, &headers, &rows, q) {
                Ok(path) => app.status(format!("Wrote {}", path.display())),
                Err(e) => {
                    loge!("Export: {}", e);
                    app.status(format!("Export error: {}", e));
                }
            }
        }
    });

    // Status line
    let status = app.status.lock().unwrap().clone();
    ui.label(format!("Status: {}", status));
}

fn export_text(app: &App) -> String {
    let export = &app.state.options.export;
    let headers = Some(app.headers.clone());
    let (rows, marks) = app.view_rows();
    let q = export.mark_qualifiers.then_some(marks.as_slice());
    to_export_string(
        &headers,
        &rows,
        q,
        export.include_headers,
        export.format.delimiter(),
    )
}
