// src/scrape/mod.rs
mod slots;

pub use slots::collect_slots;
pub use slots::parse_slot_table;
