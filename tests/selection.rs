// tests/selection.rs
//
// Selector behavior: lowest ranks win, under-filled groups yield what
// they have, output order is deterministic.

use std::collections::BTreeMap;

use tri_slots::qualify::select;
use tri_slots::roster::Competitor;

fn athlete(name: &str, group: &str, finisher: bool, rank: Option<u32>) -> Competitor {
    Competitor {
        name: name.into(),
        age_group: group.into(),
        finisher,
        rank,
        overall_time: String::new(),
        swim_time: String::new(),
        bike_time: String::new(),
        run_time: String::new(),
    }
}

fn alloc(entries: &[(&str, u32)]) -> BTreeMap<String, u32> {
    entries.iter().map(|(g, n)| (g.to_string(), *n)).collect()
}

#[test]
fn takes_lowest_ranks_ascending() {
    // Roster order is scrambled on purpose; selection must follow rank.
    let roster = vec![
        athlete("d", "M35-39", true, Some(4)),
        athlete("b", "M35-39", true, Some(2)),
        athlete("e", "M35-39", true, Some(5)),
        athlete("a", "M35-39", true, Some(1)),
        athlete("c", "M35-39", true, Some(3)),
    ];

    let picked = select(&roster, &alloc(&[("M35-39", 3)]));

    assert_eq!(picked, vec![3, 1, 4]); // ranks 1, 2, 3 in that order
}

#[test]
fn underfilled_group_yields_all_its_finishers() {
    let roster = vec![
        athlete("a", "F60-64", true, Some(1)),
        athlete("b", "F60-64", true, Some(2)),
        athlete("c", "F60-64", false, None),
    ];

    let picked = select(&roster, &alloc(&[("F60-64", 4)]));

    assert_eq!(picked, vec![0, 1], "no fabricated qualifiers");
}

#[test]
fn nonfinishers_and_zero_allocations_contribute_nothing() {
    let roster = vec![
        athlete("dnf", "M35-39", false, None),
        athlete("fin", "M35-39", true, Some(1)),
        athlete("other", "M40-44", true, Some(1)),
    ];

    let picked = select(&roster, &alloc(&[("M35-39", 1), ("M40-44", 0)]));

    assert_eq!(picked, vec![1]);
}

#[test]
fn groups_come_out_in_label_order() {
    let roster = vec![
        athlete("m1", "M35-39", true, Some(1)),
        athlete("f1", "F35-39", true, Some(1)),
        athlete("m2", "M35-39", true, Some(2)),
    ];

    let picked = select(&roster, &alloc(&[("M35-39", 2), ("F35-39", 1)]));

    // F-group first (map key order), then the M-group by rank.
    assert_eq!(picked, vec![1, 0, 2]);
}

#[test]
fn missing_ranks_sort_behind_ranked_finishers() {
    let roster = vec![
        athlete("unranked", "M35-39", true, None),
        athlete("ranked", "M35-39", true, Some(7)),
    ];

    let picked = select(&roster, &alloc(&[("M35-39", 1)]));

    assert_eq!(picked, vec![1]);
}
