//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `final_traffic_density.csv`
//! - `diversion_events.csv`
//! - `phase_transitions.csv`
//!
//! The record file carries exactly the ingestion field names, so its output
//! can be fed straight back into `tsc_model::load_records_csv`.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use tsc_cycle::PhaseEvent;
use tsc_divert::DiversionEvent;
use tsc_model::IntersectionRecord;

use crate::OutputResult;
use crate::writer::OutputWriter;

/// Writes controller output to three CSV files.
pub struct CsvWriter {
    records: Writer<File>,
    diversions: Writer<File>,
    phases: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut records = Writer::from_path(dir.join("final_traffic_density.csv"))?;
        records.write_record([
            "intersection_id",
            "traffic_density",
            "green_light_duration",
            "yellow_light_duration",
            "red_light_duration",
        ])?;

        let mut diversions = Writer::from_path(dir.join("diversion_events.csv"))?;
        diversions.write_record(["source_id", "target_id", "amount", "unix_time_secs"])?;

        let mut phases = Writer::from_path(dir.join("phase_transitions.csv"))?;
        phases.write_record(["intersection_id", "state", "unix_time_secs"])?;

        Ok(Self {
            records,
            diversions,
            phases,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_records(&mut self, records: &[IntersectionRecord]) -> OutputResult<()> {
        for rec in records {
            self.records.write_record(&[
                rec.id.as_str().to_string(),
                rec.traffic_density.to_string(),
                rec.green_secs.to_string(),
                rec.yellow_secs.to_string(),
                rec.red_secs.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_diversion(&mut self, event: &DiversionEvent) -> OutputResult<()> {
        self.diversions.write_record(&[
            event.source.as_str().to_string(),
            event.target.as_str().to_string(),
            event.amount.to_string(),
            event.unix_time_secs.to_string(),
        ])?;
        Ok(())
    }

    fn write_phase(&mut self, event: &PhaseEvent) -> OutputResult<()> {
        self.phases.write_record(&[
            event.intersection.as_str().to_string(),
            event.phase.to_string(),
            event.unix_time_secs.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.records.flush()?;
        self.diversions.flush()?;
        self.phases.flush()?;
        Ok(())
    }
}
