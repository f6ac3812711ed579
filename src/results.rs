// src/results.rs
//
// Race-results ingestion. The tracker's export wraps everything in
// resultsJson.value; field names are the raw wtc_* columns. This module
// normalizes one document into a roster plus the event name used to look
// up slot quotas in the slot book.

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::roster::{Competitor, fmt_hms};

#[derive(Debug, Deserialize)]
struct ResultsDoc {
    #[serde(rename = "resultsJson")]
    results_json: ResultsJson,
}

#[derive(Debug, Deserialize)]
struct ResultsJson {
    value: Vec<RawRow>,
}

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(default)]
    athlete: String,
    #[serde(rename = "_wtc_agegroupid_value_formatted", default)]
    age_group: String,
    #[serde(rename = "wtc_finishtimeformatted", default)]
    overall_time: Option<String>,
    #[serde(rename = "wtc_finishrankgroup", default)]
    rank: Option<f64>,
    #[serde(rename = "wtc_swimtime", default)]
    swim_secs: Option<f64>,
    #[serde(rename = "wtc_biketime", default)]
    bike_secs: Option<f64>,
    #[serde(rename = "wtc_runtime", default)]
    run_secs: Option<f64>,
    #[serde(rename = "wtc_finisher", default)]
    finisher: bool,
    #[serde(rename = "_wtc_eventid_value_formatted", default)]
    event: Option<String>,
}

#[derive(Debug)]
pub struct RaceData {
    /// Event name with the leading year token dropped, e.g.
    /// "2025 IRONMAN Kalmar" → "IRONMAN Kalmar". Keys the slot book.
    pub event_name: Option<String>,
    pub roster: Vec<Competitor>,
}

fn fmt_secs(v: Option<f64>) -> String {
    match v {
        Some(secs) if secs >= 0.0 => fmt_hms(secs as u64),
        _ => s!(),
    }
}

/// Drop the leading token (the year) from the formatted event id.
fn event_display_name(raw: &str) -> Option<String> {
    let mut it = raw.split_whitespace();
    it.next()?;
    let rest = it.collect::<Vec<_>>().join(" ");
    if rest.is_empty() { None } else { Some(rest) }
}

pub fn load_race_data(path: &Path) -> Result<RaceData, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Read {}: {}", path.display(), e))?;

    let doc: ResultsDoc = serde_json::from_str(&text)
        .map_err(|e| format!("Decode {}: {}", path.display(), e))?;

    let event_name = doc
        .results_json
        .value
        .first()
        .and_then(|r| r.event.as_deref())
        .and_then(event_display_name);

    let roster = doc
        .results_json
        .value
        .into_iter()
        .map(|r| Competitor {
            name: r.athlete,
            age_group: r.age_group,
            finisher: r.finisher,
            rank: r.rank.map(|v| v as u32),
            overall_time: r.overall_time.unwrap_or_default(),
            swim_time: fmt_secs(r.swim_secs),
            bike_time: fmt_secs(r.bike_secs),
            run_time: fmt_secs(r.run_secs),
        })
        .collect();

    Ok(RaceData { event_name, roster })
}
