// tests/results_load.rs
//
// Loading a race-results document into a roster.

use std::fs;
use std::path::PathBuf;

use serde_json::json;
use tri_slots::results::load_race_data;

fn tmp_file(name: &str, contents: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("tri_slots_{}.json", name));
    fs::write(&p, contents).unwrap();
    p
}

fn sample_doc() -> String {
    json!({
        "resultsJson": {
            "value": [
                {
                    "athlete": "Anna Ahl",
                    "_wtc_agegroupid_value_formatted": "F30-34",
                    "_wtc_eventid_value_formatted": "2025 IRONMAN Kalmar",
                    "wtc_finishtimeformatted": "09:41:12",
                    "wtc_finishrankgroup": 1,
                    "wtc_swimtime": 3723,
                    "wtc_biketime": 18000,
                    "wtc_runtime": 11000,
                    "wtc_finisher": true
                },
                {
                    "athlete": "Bo Berg",
                    "_wtc_agegroupid_value_formatted": "M45-49",
                    "_wtc_eventid_value_formatted": "2025 IRONMAN Kalmar",
                    "wtc_finishtimeformatted": null,
                    "wtc_finishrankgroup": null,
                    "wtc_swimtime": 4100,
                    "wtc_biketime": null,
                    "wtc_runtime": null,
                    "wtc_finisher": false
                }
            ]
        }
    })
    .to_string()
}

#[test]
fn loads_roster_and_event_name() {
    let path = tmp_file("ok", &sample_doc());
    let data = load_race_data(&path).unwrap();

    // Leading year token is dropped from the event id.
    assert_eq!(data.event_name.as_deref(), Some("IRONMAN Kalmar"));
    assert_eq!(data.roster.len(), 2);

    let anna = &data.roster[0];
    assert_eq!(anna.name, "Anna Ahl");
    assert_eq!(anna.age_group, "F30-34");
    assert!(anna.finisher);
    assert_eq!(anna.rank, Some(1));
    assert_eq!(anna.overall_time, "09:41:12");
    assert_eq!(anna.swim_time, "1:02:03"); // 3723 s
    assert_eq!(anna.bike_time, "5:00:00");
    assert_eq!(anna.run_time, "3:03:20");
}

#[test]
fn nonfinisher_fields_stay_blank() {
    let path = tmp_file("dnf", &sample_doc());
    let data = load_race_data(&path).unwrap();

    let bo = &data.roster[1];
    assert!(!bo.finisher);
    assert_eq!(bo.rank, None);
    assert_eq!(bo.overall_time, "");
    assert_eq!(bo.swim_time, "1:08:20");
    assert_eq!(bo.bike_time, "");
    assert_eq!(bo.run_time, "");
}

#[test]
fn missing_results_json_key_is_an_error() {
    let path = tmp_file("bad", r#"{"values": []}"#);
    let err = load_race_data(&path).unwrap_err();
    assert!(err.to_string().contains("Decode"));
}

#[test]
fn missing_file_is_an_error() {
    let err = load_race_data(std::path::Path::new("no/such/file.json")).unwrap_err();
    assert!(err.to_string().contains("Read"));
}
