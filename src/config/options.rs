// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub export: ExportOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }

    pub fn delimiter(&self) -> char {
        match self {
            ExportFormat::Csv => ',',
            ExportFormat::Tsv => '\t',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    /// Append a Qualifier yes/no column to exported rows.
    pub mark_qualifiers: bool,
    /// User-supplied output path; empty means "use the default".
    pub path: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            mark_qualifiers: true,
            path: s!(),
        }
    }
}

impl ExportOptions {
    pub fn set_path(&mut self, p: &str) {
        self.path = s!(p);
    }

    /// Resolve the output path. An empty or directory-like path gets the
    /// default file name appended; an explicit file name is kept as-is,
    /// extension included.
    pub fn out_path(&self) -> PathBuf {
        let default_name = format!("{}.{}", DEFAULT_EXPORT_STEM, self.format.ext());
        if self.path.is_empty() {
            return PathBuf::from(DEFAULT_OUT_DIR).join(default_name);
        }
        let p = PathBuf::from(&self.path);
        if self.path.ends_with('/') || self.path.ends_with('\\') || p.is_dir() {
            p.join(default_name)
        } else {
            p
        }
    }
}
