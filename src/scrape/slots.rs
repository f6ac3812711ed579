// src/scrape/slots.rs
// Scraping the qualifying-slot tables from the championship pages.
//
// Each page carries one table: race | date | location | women's slots |
// men's slots. Row one is the header. Anything that doesn't parse as a
// number in the slot cells counts as zero (TBD rows, dashes).

use std::{error::Error, thread, time::Duration};

use crate::config::consts::{REQUEST_PAUSE_MS, SLOT_PAGES};
use crate::core::html::{element_inner, strip_tags};
use crate::core::net::http_get;
use crate::core::sanitize::normalize_entities;
use crate::progress::Progress;
use crate::store::{RaceSlots, SlotBook};

/// Fetch every configured qualifying page and merge the rows into one
/// slot book. A page without a table is skipped with a log line; a fetch
/// error aborts.
pub fn collect_slots(
    mut progress: Option<&mut dyn Progress>,
) -> Result<SlotBook, Box<dyn Error>> {
    let mut book = SlotBook::default();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(SLOT_PAGES.len());
    }

    for (ix, path) in SLOT_PAGES.iter().enumerate() {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Fetching {path}…"));
        }
        let html = http_get(path)?;

        match parse_slot_table(&html) {
            Some(rows) => {
                logf!("Scrape: {} races from {}", rows.len(), path);
                for (name, slots) in rows {
                    book.slots.insert(name, slots);
                }
            }
            None => loge!("Scrape: no table found at {}", path),
        }

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(ix);
        }
        thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS)); // be polite
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(book)
}

/// Extract (race name, slots) rows from the first table of a page.
/// Returns None when the page has no table at all.
pub fn parse_slot_table(html: &str) -> Option<Vec<(String, RaceSlots)>> {
    let (table, _) = element_inner(html, "table", 0)?;

    let mut out = Vec::new();
    let mut pos = 0usize;
    let mut first_row = true;

    while let Some((tr, row_end)) = element_inner(table, "tr", pos) {
        pos = row_end;

        if first_row {
            // header row
            first_row = false;
            continue;
        }

        let mut cells = Vec::new();
        let mut td_pos = 0usize;
        while let Some((td, td_end)) = element_inner(tr, "td", td_pos) {
            cells.push(strip_tags(normalize_entities(td)));
            td_pos = td_end;
        }
        if cells.len() < 5 {
            continue;
        }

        let name = cells[0].clone();
        let slots = RaceSlots {
            date: cells[1].clone(),
            location: cells[2].clone(),
            women_slots: parse_slot_count(&cells[3]),
            men_slots: parse_slot_count(&cells[4]),
        };
        out.push((name, slots));
    }

    Some(out)
}

fn parse_slot_count(cell: &str) -> u32 {
    if cell.chars().all(|c| c.is_ascii_digit()) && !cell.is_empty() {
        cell.parse().unwrap_or(0)
    } else {
        0
    }
}
