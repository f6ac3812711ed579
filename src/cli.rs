// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::config::options::{AppOptions, ExportFormat};
use crate::progress::Progress;
use crate::{file, qualify, results, scrape, store};

#[derive(Default)]
pub struct Params {
    pub scrape_slots: bool,
    pub list_races: bool,
    pub race: Option<PathBuf>,
    /// Override for the slot book lookup: (men, women).
    pub slots_override: Option<(u32, u32)>,
    pub options: AppOptions,
    pub out: Option<String>,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_cli()?;

    if params.scrape_slots {
        let book = scrape::collect_slots(Some(&mut StderrProgress))?;
        let path = store::save_slot_book(&book)?;
        println!("Saved {} races to {}", book.slots.len(), path.display());
        return Ok(());
    }

    if params.list_races {
        for p in store::list_races() {
            println!("{}", p.display());
        }
        return Ok(());
    }

    match &params.race {
        Some(race) => report(&params, race),
        None => Err("Nothing to do; see --help".into()),
    }
}

/// Batch report: allocation table plus qualifier list for one race.
fn report(params: &Params, race: &std::path::Path) -> Result<(), Box<dyn Error>> {
    let data = results::load_race_data(race)?;

    let (mens_slots, womens_slots) = match params.slots_override {
        Some(q) => q,
        None => {
            let book = store::load_slot_book()?;
            let name = data
                .event_name
                .as_deref()
                .ok_or("Results carry no event name; use --slots M,W")?;
            book.quotas(name)
                .ok_or_else(|| format!("No slot quotas for {:?}; use --slots M,W", name))?
        }
    };

    let age_groups = store::load_age_groups()?;
    let allocation = qualify::allocate(&data.roster, mens_slots, womens_slots, &age_groups)?;
    let qualifiers = qualify::select(&data.roster, &allocation);

    println!("Race: {}", data.event_name.as_deref().unwrap_or("?"));
    println!("Quotas: {} men, {} women", mens_slots, womens_slots);
    for (group, slots) in &allocation {
        if *slots > 0 {
            println!("  {:8} {}", group, slots);
        }
    }
    println!("Qualifiers ({}):", qualifiers.len());
    for &ix in &qualifiers {
        let c = &data.roster[ix];
        let rank = c.rank.map(|r| r.to_string()).unwrap_or_default();
        println!("  {:8} #{:<3} {}", c.age_group, rank, c.name);
    }

    if let Some(out) = &params.out {
        let mut export = params.options.export.clone();
        export.set_path(out);
        let headers = Some(crate::roster::headers_owned());
        let rows: Vec<Vec<String>> = data.roster.iter().map(|c| c.display_row()).collect();
        let q = export.mark_qualifiers.then_some(qualifiers.as_slice());
        let path = file::write_export(&export, &headers, &rows, q)?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

fn parse_cli() -> Result<Params, Box<dyn Error>> {
    let mut params = Params::default();
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--scrape-slots" => params.scrape_slots = true,
            "--list-races" => params.list_races = true,
            "-r" | "--race" => {
                let v = args.next().ok_or("Missing value for --race")?;
                params.race = Some(PathBuf::from(v)); }
            "--slots" => {
                let v = args.next().ok_or("Missing value for --slots")?;
                params.slots_override = Some(parse_slots_pair(&v)?); }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.options.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--no-headers" => params.options.export.include_headers = false,
            "--plain" => params.options.export.mark_qualifiers = false,
            "-o" | "--out" => {
                params.out = Some(args.next().ok_or("Missing output path")?); }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(params)
}

/// "40,35" → (men, women)
fn parse_slots_pair(s: &str) -> Result<(u32, u32), Box<dyn Error>> {
    let mut it = s.split(',');
    let men: u32 = it.next().unwrap_or("").trim().parse()?;
    let women: u32 = it
        .next()
        .ok_or("Expected --slots MEN,WOMEN")?
        .trim()
        .parse()?;
    if it.next().is_some() {
        return Err("Expected --slots MEN,WOMEN".into());
    }
    Ok((men, women))
}

struct StderrProgress;
impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) { eprintln!("Scraping {} page(s)…", total); }
    fn log(&mut self, msg: &str) { eprintln!("{}", msg); }
}
