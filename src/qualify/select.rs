// src/qualify/select.rs

use std::collections::BTreeMap;

use crate::roster::Competitor;

/// Pick the qualifying athletes for an allocation: per age group, the
/// `slots` finishers with the lowest age-group rank. Returns roster row
/// indexes, grouped by age group (map key order) and ascending rank
/// within each group; rank ties and missing ranks fall back to row order.
///
/// A group with fewer finishers than slots simply yields fewer
/// qualifiers. That is slot non-fill, not an error.
pub fn select(roster: &[Competitor], allocation: &BTreeMap<String, u32>) -> Vec<usize> {
    let mut qualifiers = Vec::new();

    for (age_group, &slots) in allocation {
        if slots == 0 {
            continue;
        }

        let mut finishers: Vec<(u32, usize)> = roster
            .iter()
            .enumerate()
            .filter(|(_, c)| c.finisher && c.age_group == *age_group)
            .map(|(ix, c)| (c.rank.unwrap_or(u32::MAX), ix))
            .collect();
        finishers.sort_unstable();

        qualifiers.extend(finishers.into_iter().take(slots as usize).map(|(_, ix)| ix));
    }

    qualifiers
}
