// src/gui.rs
use std::error::Error;

use eframe::egui::ViewportBuilder;

use crate::config::state::AppState;

pub mod app;
mod export_bar;
mod race_panel;
mod table;

pub fn run() -> Result<(), Box<dyn Error>> {
    let state = AppState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };
    eframe::run_native(
        "Qualifying Slots",
        options,
        Box::new(|_cc| Ok(Box::new(app::App::new(state)))),
    )?;
    Ok(())
}
