// src/qualify/mod.rs
//
// The actual point of this program: turn a race roster plus the race's
// men's/women's slot quotas into a per-age-group slot allocation, then
// pick the qualifying athletes by age-group rank.

mod allocate;
mod select;

pub use allocate::{
    GroupTally, allocate, apportion, base_allocation, guarantee_minimums,
    reallocate_unfinished, tally_groups,
};
pub use select::select;
