// src/config/consts.rs

// Net config
pub const HOST: &str = "www.ironman.com";

/// Pages carrying the qualifying-slot tables (full distance + 70.3).
pub const SLOT_PAGES: &[&str] = &[
    "/races/im-world-championship-kona/qualifying-events-2025",
    "/races/im703-world-championship-2025/qualfying-events-2025",
];

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";
pub const RESULTS_DIR: &str = "results";
pub const SLOT_BOOK_FILE: &str = "qualifying_slots.json";
pub const SELECTOR_FILE: &str = "selector.json";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_EXPORT_STEM: &str = "qualifiers";

// Scrape
pub const REQUEST_PAUSE_MS: u64 = 250; // be polite
