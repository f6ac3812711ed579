// src/config/state.rs
use std::collections::HashMap;

use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Which race file is selected in the left panel (index into App::races).
    pub selected_race: Option<usize>,

    /// Active sort: (column index, descending).
    pub sort: Option<(usize, bool)>,

    /// Active equality filters: column index → required cell value.
    pub filters: HashMap<usize, String>,

    /// Qualifier highlighting on/off.
    pub highlight: bool,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selected_race: None,
            sort: None,
            filters: HashMap::new(),
            highlight: false,
            window_w: 1100,
            window_h: 700,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
