//! File-backed tests for the CSV writer.

use std::fs;

use tempfile::TempDir;

use tsc_core::{IntersectionId, Phase, unix_now_secs};
use tsc_cycle::PhaseEvent;
use tsc_divert::DiversionEvent;
use tsc_model::{IntersectionRecord, load_records_csv};

use crate::{CsvWriter, OutputWriter};

fn rec(id: &str, density: f64, green: f64, yellow: f64, red: f64) -> IntersectionRecord {
    IntersectionRecord::new(id, density, green, yellow, red)
}

#[test]
fn record_file_round_trips_through_the_loader() {
    let dir = TempDir::new().unwrap();
    let records = vec![
        rec("A", 430.0, 54.0, 5.0, 66.0),
        rec("B", 120.5, 30.0, 4.0, 90.0),
    ];

    let mut writer = CsvWriter::new(dir.path()).unwrap();
    writer.write_records(&records).unwrap();
    writer.finish().unwrap();

    let reloaded = load_records_csv(&dir.path().join("final_traffic_density.csv")).unwrap();
    assert_eq!(reloaded.len(), 2);
    for (orig, back) in records.iter().zip(&reloaded) {
        assert_eq!(back.id, orig.id);
        assert_eq!(back.traffic_density, orig.traffic_density);
        assert_eq!(back.green_secs, orig.green_secs);
        assert_eq!(back.yellow_secs, orig.yellow_secs);
        assert_eq!(back.red_secs, orig.red_secs);
    }
}

#[test]
fn record_header_uses_ingestion_field_names() {
    let dir = TempDir::new().unwrap();
    let mut writer = CsvWriter::new(dir.path()).unwrap();
    writer.write_records(&[rec("A", 1.0, 30.0, 5.0, 90.0)]).unwrap();
    writer.finish().unwrap();

    let contents = fs::read_to_string(dir.path().join("final_traffic_density.csv")).unwrap();
    let header = contents.lines().next().unwrap();
    assert_eq!(
        header,
        "intersection_id,traffic_density,green_light_duration,yellow_light_duration,red_light_duration"
    );
}

#[test]
fn event_files_receive_one_row_per_event() {
    let dir = TempDir::new().unwrap();
    let mut writer = CsvWriter::new(dir.path()).unwrap();

    writer
        .write_diversion(&DiversionEvent {
            source: IntersectionId::new("A"),
            target: IntersectionId::new("B"),
            amount: 35.0,
            unix_time_secs: unix_now_secs(),
        })
        .unwrap();
    writer
        .write_phase(&PhaseEvent {
            intersection: IntersectionId::new("A"),
            phase: Phase::Green,
            unix_time_secs: unix_now_secs(),
        })
        .unwrap();
    writer
        .write_phase(&PhaseEvent {
            intersection: IntersectionId::new("A"),
            phase: Phase::Yellow,
            unix_time_secs: unix_now_secs(),
        })
        .unwrap();
    writer.finish().unwrap();

    let diversions = fs::read_to_string(dir.path().join("diversion_events.csv")).unwrap();
    assert_eq!(diversions.lines().count(), 2, "header + 1 event");
    assert!(diversions.lines().nth(1).unwrap().starts_with("A,B,35,"));

    let phases = fs::read_to_string(dir.path().join("phase_transitions.csv")).unwrap();
    assert_eq!(phases.lines().count(), 3, "header + 2 events");
    assert!(phases.lines().nth(1).unwrap().starts_with("A,green,"));
    assert!(phases.lines().nth(2).unwrap().starts_with("A,yellow,"));
}

#[test]
fn finish_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let mut writer = CsvWriter::new(dir.path()).unwrap();
    writer.finish().unwrap();
    writer.finish().unwrap();
}
