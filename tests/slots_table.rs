// tests/slots_table.rs
//
// Parsing the qualifying-events table out of page HTML.

use tri_slots::scrape::parse_slot_table;

const PAGE: &str = r#"
<html><body>
<h1>Qualifying events</h1>
<table class="views-table">
  <tr>
    <th>Race</th><th>Date</th><th>Location</th><th>Women</th><th>Men</th>
  </tr>
  <tr>
    <td><a href="/kalmar">IRONMAN&nbsp;Kalmar</a></td>
    <td>Aug 16, 2025</td>
    <td>Kalmar,&nbsp;Sweden</td>
    <td>20</td>
    <td><strong>40</strong></td>
  </tr>
  <tr>
    <td>IRONMAN Wales</td>
    <td>Sep 21, 2025</td>
    <td>Tenby, Wales</td>
    <td>TBD</td>
    <td>35</td>
  </tr>
  <tr>
    <td colspan="5">Footnote row, too few cells</td>
  </tr>
</table>
</body></html>
"#;

#[test]
fn parses_rows_and_skips_header() {
    let rows = parse_slot_table(PAGE).expect("table present");
    assert_eq!(rows.len(), 2);

    let (name, slots) = &rows[0];
    assert_eq!(name, "IRONMAN Kalmar"); // nbsp + nested tags cleaned
    assert_eq!(slots.date, "Aug 16, 2025");
    assert_eq!(slots.location, "Kalmar, Sweden");
    assert_eq!(slots.women_slots, 20);
    assert_eq!(slots.men_slots, 40);
}

#[test]
fn non_numeric_slot_cells_count_as_zero() {
    let rows = parse_slot_table(PAGE).unwrap();
    let (name, slots) = &rows[1];
    assert_eq!(name, "IRONMAN Wales");
    assert_eq!(slots.women_slots, 0, "TBD is not a quota");
    assert_eq!(slots.men_slots, 35);
}

#[test]
fn page_without_table_is_none() {
    assert!(parse_slot_table("<html><body><p>maintenance</p></body></html>").is_none());
}
