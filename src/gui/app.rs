// src/gui/app.rs
use std::{
    cmp::Ordering,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    qualify, results, roster,
    store::{self, SlotBook},
};

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // race files in results/, shown in the left panel
    pub races: Vec<PathBuf>,

    // loaded race
    pub event_name: Option<String>,
    pub roster: Vec<crate::roster::Competitor>,
    pub quotas: Option<(u32, u32)>,

    // display table: headers + one row per roster entry (same indexing)
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Row indexes of the current view, after filters and sort.
    pub view_ix: Vec<usize>,

    /// Roster indexes of the current qualifiers (empty when highlight off).
    pub qualifier_rows: Vec<usize>,

    // scraped slot quotas, if the book exists on disk
    pub slot_book: Option<SlotBook>,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let races = store::list_races();

        let mut status = s!("Idle");
        let slot_book = match store::load_slot_book() {
            Ok(book) => {
                logf!("Init: slot book with {} races", book.slots.len());
                Some(book)
            }
            Err(e) => {
                logd!("Init: no slot book ({})", e);
                status = s!("No qualifying_slots.json — scrape slots first");
                None
            }
        };
        if races.is_empty() {
            status = s!("No JSON files in results/");
        }
        logf!("Init: {} race file(s)", races.len());

        Self {
            state,
            races,
            event_name: None,
            roster: Vec::new(),
            quotas: None,
            headers: roster::headers_owned(),
            rows: Vec::new(),
            view_ix: Vec::new(),
            qualifier_rows: Vec::new(),
            slot_book,
            status: Arc::new(Mutex::new(status)),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /* ---------- race loading ---------- */

    pub fn load_race(&mut self, ix: usize) {
        let Some(path) = self.races.get(ix).cloned() else { return };

        match results::load_race_data(&path) {
            Ok(data) => {
                let file = path.file_name().map(|s| s.to_string_lossy().into_owned());
                self.quotas = data
                    .event_name
                    .as_deref()
                    .and_then(|name| self.slot_book.as_ref()?.quotas(name));
                self.event_name = data.event_name;
                self.rows = data.roster.iter().map(|c| c.display_row()).collect();
                self.roster = data.roster;
                self.state.gui.selected_race = Some(ix);
                self.state.gui.sort = None;
                self.state.gui.filters.clear();
                self.state.gui.highlight = false;
                self.qualifier_rows.clear();
                self.rebuild_view();

                match self.quotas {
                    Some((m, w)) => self.status(format!(
                        "Loaded {} — Men's slots: {}, Women's slots: {}",
                        file.as_deref().unwrap_or("?"), m, w
                    )),
                    None => self.status(format!(
                        "Loaded {} — no slot quotas for this race",
                        file.as_deref().unwrap_or("?")
                    )),
                }
            }
            Err(e) => {
                loge!("Load race: {}", e);
                self.status(format!("Error: {}", e));
            }
        }
    }

    /* ---------- view (filters + sort) ---------- */

    pub fn rebuild_view(&mut self) {
        let filters = &self.state.gui.filters;
        self.view_ix = (0..self.rows.len())
            .filter(|&ix| {
                filters
                    .iter()
                    .all(|(&col, want)| self.rows[ix].get(col).is_some_and(|c| c == want))
            })
            .collect();

        if let Some((col, descending)) = self.state.gui.sort {
            let rows = &self.rows;
            self.view_ix.sort_by(|&ia, &ib| {
                let a = rows[ia].get(col).map(String::as_str).unwrap_or("");
                let b = rows[ib].get(col).map(String::as_str).unwrap_or("");
                // blanks stay last in either direction
                match (a.is_empty(), b.is_empty()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    (false, false) => {
                        let ord = cmp_cells(a, b);
                        if descending { ord.reverse() } else { ord }
                    }
                }
            });
        }
    }

    pub fn toggle_sort(&mut self, col: usize) {
        self.state.gui.sort = match self.state.gui.sort {
            Some((c, desc)) if c == col => Some((col, !desc)),
            _ => Some((col, false)),
        };
        self.rebuild_view();
    }

    pub fn reset_view(&mut self) {
        self.state.gui.sort = None;
        self.state.gui.filters.clear();
        self.state.gui.highlight = false;
        self.qualifier_rows.clear();
        self.rebuild_view();
        self.status("View reset");
    }

    /// Distinct values of one column, for the filter combo boxes.
    pub fn column_values(&self, col: usize) -> Vec<String> {
        let mut vals: Vec<String> = self
            .rows
            .iter()
            .filter_map(|r| r.get(col).cloned())
            .collect();
        vals.sort();
        vals.dedup();
        vals
    }

    /* ---------- qualifiers ---------- */

    pub fn toggle_highlight(&mut self) {
        if self.state.gui.highlight {
            self.state.gui.highlight = false;
            self.qualifier_rows.clear();
            self.status("Highlight off");
            return;
        }

        let Some((mens, womens)) = self.quotas else {
            self.status("No qualifying slot information for this race");
            return;
        };

        let age_groups = match store::load_age_groups() {
            Ok(v) => v,
            Err(e) => {
                loge!("Highlight: {}", e);
                self.status(format!("Error: {}", e));
                return;
            }
        };

        match qualify::allocate(&self.roster, mens, womens, &age_groups) {
            Ok(allocation) => {
                let mens_used: u32 = allocation
                    .iter()
                    .filter(|(g, _)| g.starts_with('M'))
                    .map(|(_, n)| *n)
                    .sum();
                let womens_used: u32 = allocation
                    .iter()
                    .filter(|(g, _)| !g.starts_with('M'))
                    .map(|(_, n)| *n)
                    .sum();

                self.qualifier_rows = qualify::select(&self.roster, &allocation);
                self.state.gui.highlight = true;
                self.status(format!(
                    "Allocated {} men's / {} women's slots — {} qualifiers highlighted",
                    mens_used, womens_used, self.qualifier_rows.len()
                ));
            }
            Err(e) => {
                loge!("Allocate: {}", e);
                self.status(format!("Error: {}", e));
            }
        }
    }

    pub fn is_qualifier(&self, row_ix: usize) -> bool {
        self.state.gui.highlight && self.qualifier_rows.contains(&row_ix)
    }

    /// Current view as owned rows, plus the view positions of qualifiers
    /// (for the Copy/Export paths).
    pub fn view_rows(&self) -> (Vec<Vec<String>>, Vec<usize>) {
        let rows: Vec<Vec<String>> = self.view_ix.iter().map(|&ix| self.rows[ix].clone()).collect();
        let marks: Vec<usize> = self
            .view_ix
            .iter()
            .enumerate()
            .filter(|&(_, &ix)| self.qualifier_rows.contains(&ix))
            .map(|(pos, _)| pos)
            .collect();
        (rows, marks)
    }
}

/// Compare two cells: numerically when both parse (plain numbers or
/// H:MM:SS times), lexically otherwise.
fn cmp_cells(a: &str, b: &str) -> Ordering {
    match (cell_key(a), cell_key(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}

fn cell_key(s: &str) -> Option<f64> {
    if let Ok(n) = s.parse::<f64>() {
        return Some(n);
    }
    // H:MM:SS → seconds
    let mut parts = s.split(':');
    let h: u64 = parts.next()?.parse().ok()?;
    let m: u64 = parts.next()?.parse().ok()?;
    let sec: u64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((h * 3600 + m * 60 + sec) as f64)
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("races")
            .resizable(false)
            .show(ctx, |ui| {
                super::race_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::export_bar::draw(ui, self);

            ui.separator();

            super::table::draw(ui, self);
        });
    }
}
