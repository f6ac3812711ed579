// src/qualify/allocate.rs
//
// Slot allocation, phase by phase. Each phase takes the allocation map by
// value and hands back the updated snapshot with the remaining budget; no
// counter is shared across phases behind the scenes. Gender budgets are
// independent: the men's pool is spent on M-prefixed groups, everything
// else draws from the women's pool.
//
// Every ordering that can influence the result is explicit. Groups are
// tallied in age-group label order, and label order is the documented
// secondary key wherever groups are ranked (fractional remainders,
// reallocation ratios).

use std::collections::{BTreeMap, HashSet};
use std::error::Error;

use crate::roster::Competitor;

/// Per-age-group starter/finisher counts, restricted to the selector's
/// valid age groups. Groups nobody started never appear here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupTally {
    pub label: String,
    pub gender: char,
    pub starters: u32,
    pub finishers: u32,
}

impl GroupTally {
    fn draws_mens_pool(&self) -> bool {
        self.gender == 'M'
    }
}

/// Compute the allocation for one race.
///
/// `valid_age_groups` is the ground truth: output keys are exactly this
/// set, roster rows outside it are ignored entirely.
pub fn allocate(
    roster: &[Competitor],
    mens_slots: u32,
    womens_slots: u32,
    valid_age_groups: &[String],
) -> Result<BTreeMap<String, u32>, Box<dyn Error>> {
    if valid_age_groups.is_empty() {
        return Err("No valid age groups configured (empty selector list)".into());
    }

    let groups = tally_groups(roster, valid_age_groups);

    let alloc = base_allocation(valid_age_groups);
    let (alloc, men_left, women_left) =
        guarantee_minimums(&groups, alloc, mens_slots as i64, womens_slots as i64);
    let alloc = apportion(&groups, alloc, 'M', men_left);
    let alloc = apportion(&groups, alloc, 'F', women_left);
    let alloc = reallocate_unfinished(&groups, alloc);

    Ok(alloc)
}

/// Aggregation: count starters and finishers per valid age group, emitted
/// in label order.
pub fn tally_groups(roster: &[Competitor], valid_age_groups: &[String]) -> Vec<GroupTally> {
    let valid: HashSet<&str> = valid_age_groups.iter().map(|s| s.as_str()).collect();

    let mut counts: BTreeMap<&str, (u32, u32)> = BTreeMap::new();
    for c in roster {
        if !valid.contains(c.age_group.as_str()) {
            continue;
        }
        let e = counts.entry(c.age_group.as_str()).or_insert((0, 0));
        e.0 += 1;
        if c.finisher {
            e.1 += 1;
        }
    }

    counts
        .into_iter()
        .map(|(label, (starters, finishers))| GroupTally {
            label: s!(label),
            gender: label.chars().next().unwrap_or('?'),
            starters,
            finishers,
        })
        .collect()
}

/// Every valid age group starts at zero, raced or not.
pub fn base_allocation(valid_age_groups: &[String]) -> BTreeMap<String, u32> {
    valid_age_groups.iter().map(|g| (g.clone(), 0)).collect()
}

/// Minimum guarantee: any group that fielded a starter gets one slot off
/// its gender's budget. With more non-empty groups than slots the budget
/// goes negative; later phases treat that as exhausted, not as an error.
pub fn guarantee_minimums(
    groups: &[GroupTally],
    mut alloc: BTreeMap<String, u32>,
    mut mens_budget: i64,
    mut womens_budget: i64,
) -> (BTreeMap<String, u32>, i64, i64) {
    for g in groups {
        alloc.insert(g.label.clone(), 1);
        if g.draws_mens_pool() {
            mens_budget -= 1;
        } else {
            womens_budget -= 1;
        }
    }
    (alloc, mens_budget, womens_budget)
}

/// Proportional apportionment for one gender: floor of each group's
/// starter share first, then largest-remainder correction for whatever
/// the floors left over. Remainder ties break on label order.
pub fn apportion(
    groups: &[GroupTally],
    mut alloc: BTreeMap<String, u32>,
    gender: char,
    mut budget: i64,
) -> BTreeMap<String, u32> {
    let pool: Vec<&GroupTally> = groups.iter().filter(|g| g.gender == gender).collect();
    if budget <= 0 || pool.is_empty() {
        return alloc;
    }

    let total_starters: u32 = pool.iter().map(|g| g.starters).sum();
    if total_starters == 0 {
        return alloc;
    }

    let shares: Vec<(&str, f64)> = pool
        .iter()
        .map(|g| {
            let share = g.starters as f64 / total_starters as f64 * budget as f64;
            (g.label.as_str(), share)
        })
        .collect();

    for (label, share) in &shares {
        let whole = share.floor() as u32;
        if let Some(n) = alloc.get_mut(*label) {
            *n += whole;
        }
        budget -= whole as i64;
    }

    if budget > 0 {
        let mut remainders: Vec<(&str, f64)> = shares
            .iter()
            .map(|(label, share)| (*label, share - share.floor()))
            .collect();
        remainders.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(b.0)));

        for (label, _) in remainders.into_iter().take(budget as usize) {
            if let Some(n) = alloc.get_mut(label) {
                *n += 1;
            }
        }
    }

    alloc
}

/// Zero-finisher reallocation: a group with starters but no finishers
/// keeps no slots. Its slots move, one each, to that gender's groups with
/// finishers, largest starters-to-current-allocation ratio first (label
/// order on ties). Groups are processed in label order, so each
/// withdrawal sees the allocations left by the previous one.
///
/// When a withdrawal frees more slots than there are eligible targets
/// the surplus is dropped, not re-spread. Matches the established
/// allocation results; revisit before changing.
pub fn reallocate_unfinished(
    groups: &[GroupTally],
    mut alloc: BTreeMap<String, u32>,
) -> BTreeMap<String, u32> {
    for g in groups {
        if g.finishers > 0 {
            continue;
        }
        let withdrawn = alloc.get(&g.label).copied().unwrap_or(0);
        if withdrawn == 0 {
            continue;
        }
        alloc.insert(g.label.clone(), 0);

        // Non-M data-quality prefixes fall in with the women's groups,
        // same as the budget they drew from.
        let target_gender = if g.draws_mens_pool() { 'M' } else { 'F' };

        let mut ranked: Vec<(&str, f64)> = groups
            .iter()
            .filter(|t| t.gender == target_gender && t.finishers > 0)
            .map(|t| {
                let current = alloc.get(&t.label).copied().unwrap_or(1).max(1);
                (t.label.as_str(), t.starters as f64 / current as f64)
            })
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(b.0)));

        for (label, _) in ranked.into_iter().take(withdrawn as usize) {
            if let Some(n) = alloc.get_mut(label) {
                *n += 1;
            }
        }
    }
    alloc
}
