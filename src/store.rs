// src/store.rs
//
// Local JSON files: the slot book (scraped qualifying quotas keyed by
// race name), the selector config (ground-truth age groups), and the
// results/ directory holding one downloaded results document per race.

use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::consts::{RESULTS_DIR, SELECTOR_FILE, SLOT_BOOK_FILE};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotBook {
    pub slots: BTreeMap<String, RaceSlots>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceSlots {
    pub date: String,
    pub location: String,
    pub men_slots: u32,
    pub women_slots: u32,
}

impl SlotBook {
    /// Quotas for a race, by the event name from its results document.
    pub fn quotas(&self, race_name: &str) -> Option<(u32, u32)> {
        self.slots
            .get(race_name)
            .map(|r| (r.men_slots, r.women_slots))
    }
}

pub fn save_slot_book(book: &SlotBook) -> Result<PathBuf, Box<dyn Error>> {
    let path = PathBuf::from(SLOT_BOOK_FILE);
    let text = serde_json::to_string_pretty(book)?;
    fs::write(&path, text)?;
    Ok(path)
}

pub fn load_slot_book() -> Result<SlotBook, Box<dyn Error>> {
    let text = fs::read_to_string(SLOT_BOOK_FILE)
        .map_err(|e| format!("Read {}: {}", SLOT_BOOK_FILE, e))?;
    let book = serde_json::from_str(&text)
        .map_err(|e| format!("Decode {}: {}", SLOT_BOOK_FILE, e))?;
    Ok(book)
}

#[derive(Debug, Deserialize)]
struct SelectorFile {
    agegroups: Vec<String>,
}

/// Ground-truth age groups for the race series.
pub fn load_age_groups() -> Result<Vec<String>, Box<dyn Error>> {
    let text = fs::read_to_string(SELECTOR_FILE)
        .map_err(|e| format!("Read {}: {}", SELECTOR_FILE, e))?;
    let sel: SelectorFile = serde_json::from_str(&text)
        .map_err(|e| format!("Decode {}: {}", SELECTOR_FILE, e))?;
    Ok(sel.agegroups)
}

/// Downloaded race documents, sorted by file name.
pub fn list_races() -> Vec<PathBuf> {
    let mut races: Vec<PathBuf> = match fs::read_dir(RESULTS_DIR) {
        Ok(rd) => rd
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.is_file() && p.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect(),
        Err(_) => Vec::new(),
    };
    races.sort();
    races
}
