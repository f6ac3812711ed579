// src/roster.rs
//
// In-memory roster model for one race. A competitor's position in the
// roster vector is its stable row identifier; allocation and selection
// both hand indexes around instead of cloning rows.

/// Column order used by the GUI table and the exports.
pub const HEADERS: &[&str] = &[
    "Name", "Age group", "Overall", "AG rank", "Swim", "Bike", "Run", "Finisher",
];

/// Column index of the age-group cell (filterable).
pub const COL_AGE_GROUP: usize = 1;
/// Column index of the finisher cell (filterable).
pub const COL_FINISHER: usize = 7;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Competitor {
    pub name: String,
    /// Age-group label, `<Gender><AgeRange>` (e.g. "M35-39"). First char is
    /// the gender; labels outside the selector's list take no part in
    /// allocation.
    pub age_group: String,
    pub finisher: bool,
    /// Finish rank within the age group, 1 = fastest. Absent for most
    /// non-finishers.
    pub rank: Option<u32>,
    pub overall_time: String,
    pub swim_time: String,
    pub bike_time: String,
    pub run_time: String,
}

impl Competitor {
    /// Gender prefix of the age group, if any.
    pub fn gender(&self) -> Option<char> {
        self.age_group.chars().next()
    }

    pub fn display_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.age_group.clone(),
            self.overall_time.clone(),
            self.rank.map(|r| r.to_string()).unwrap_or_default(),
            self.swim_time.clone(),
            self.bike_time.clone(),
            self.run_time.clone(),
            s!(if self.finisher { "yes" } else { "no" }),
        ]
    }
}

pub fn headers_owned() -> Vec<String> {
    HEADERS.iter().map(|h| s!(*h)).collect()
}

/// Seconds → "H:MM:SS". Sub-hour times keep a zero hour field so the
/// column sorts lexically.
pub fn fmt_hms(total_secs: u64) -> String {
    let h = total_secs / 3600;
    let m = (total_secs % 3600) / 60;
    let s = total_secs % 60;
    format!("{h}:{m:02}:{s:02}")
}
