// src/gui/table.rs
//
// Draws the roster table. Header cells are clickable (sort toggle); the
// age-group and finisher columns carry filter combo boxes; qualifying
// rows are painted green while highlighting is on.

use eframe::egui::{self, Color32, RichText};
use egui_extras::{Column, TableBuilder};

use crate::roster::{COL_AGE_GROUP, COL_FINISHER};

use super::app::App;

const QUALIFIER_GREEN: Color32 = Color32::from_rgb(0x6f, 0xcb, 0x9f);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    draw_filter_row(ui, app);

    let cols = app.headers.len();
    let sort = app.state.gui.sort;

    let mut clicked_col: Option<usize> = None;

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().resizable(true).at_least(140.0));
    for _ in 1..cols {
        table = table.column(Column::auto().resizable(true));
    }

    table
        .header(20.0, |mut header| {
            for (ci, h) in app.headers.iter().enumerate() {
                header.col(|ui| {
                    let label = match sort {
                        Some((c, false)) if c == ci => format!("{h} ▲"),
                        Some((c, true)) if c == ci => format!("{h} ▼"),
                        _ => h.clone(),
                    };
                    if ui.button(label).clicked() {
                        clicked_col = Some(ci);
                    }
                });
            }
        })
        .body(|body| {
            let view = &app.view_ix;
            body.rows(18.0, view.len(), |mut row| {
                let Some(&data_ix) = view.get(row.index()) else { return };
                let is_q = app.is_qualifier(data_ix);
                if let Some(data) = app.rows.get(data_ix) {
                    for cell in data {
                        row.col(|ui| {
                            if is_q {
                                ui.label(
                                    RichText::new(cell.as_str()).strong().color(QUALIFIER_GREEN),
                                );
                            } else {
                                ui.label(cell);
                            }
                        });
                    }
                }
            });
        });

    if let Some(ci) = clicked_col {
        app.toggle_sort(ci);
    }
}

fn draw_filter_row(ui: &mut egui::Ui, app: &mut App) {
    let mut changed = false;

    ui.horizontal(|ui| {
        for (col, label) in [(COL_AGE_GROUP, "Age group"), (COL_FINISHER, "Finisher")] {
            let current = app
                .state
                .gui
                .filters
                .get(&col)
                .cloned()
                .unwrap_or_else(|| s!("(all)"));

            egui::ComboBox::from_label(label)
                .selected_text(&current)
                .show_ui(ui, |ui| {
                    if ui.selectable_label(current == "(all)", "(all)").clicked() {
                        app.state.gui.filters.remove(&col);
                        changed = true;
                    }
                    for v in app.column_values(col) {
                        if ui.selectable_label(current == v, &v).clicked() {
                            app.state.gui.filters.insert(col, v);
                            changed = true;
                        }
                    }
                });
        }

        if ui.button("Reset").clicked() {
            app.reset_view();
        }
    });

    if changed {
        app.rebuild_view();
    }
}
