// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use tri_slots::gui;

fn main() {
    if let Err(e) = gui::run() {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
