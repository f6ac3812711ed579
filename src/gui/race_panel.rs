// src/gui/race_panel.rs
//
// Left panel: the race documents found under results/. Selecting one
// loads it into the table.

use eframe::egui;

use super::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Races");
    ui.separator();

    if app.races.is_empty() {
        ui.label("No JSON files in results/");
        return;
    }

    let names: Vec<String> = app
        .races
        .iter()
        .map(|p| {
            p.file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| p.display().to_string())
        })
        .collect();

    let mut clicked: Option<usize> = None;
    egui::ScrollArea::vertical().show(ui, |ui| {
        for (ix, name) in names.iter().enumerate() {
            let is_selected = app.state.gui.selected_race == Some(ix);
            if ui.selectable_label(is_selected, name).clicked() {
                clicked = Some(ix);
            }
        }
    });

    if let Some(ix) = clicked {
        app.load_race(ix);
    }
}
