//! The `Controller` struct and its run sequence.

use std::sync::mpsc;

use tracing::{info, warn};

use tsc_core::ControlRng;
use tsc_cycle::{CancelToken, PhaseTimings};
use tsc_divert::{DiversionEngine, DiversionEvent};
use tsc_model::{IntersectionRecord, screen_records};
use tsc_output::OutputWriter;
use tsc_policy::TimingPolicy;

use crate::config::{ControlConfig, RunMode};
use crate::error::{ControlError, ControlResult, RejectedRecord};
use crate::schedulers::SchedulerSet;

// ── Run report ────────────────────────────────────────────────────────────────

/// Everything one run produced.
#[derive(Debug)]
pub struct RunReport {
    /// The working set after policy and diversion, in ingestion order.
    pub records: Vec<IntersectionRecord>,

    /// Diversion events, in transfer order.  Already written to the output
    /// writer.
    pub diversions: Vec<DiversionEvent>,

    /// Records dropped by validation or the policy, with reasons.
    pub rejected: Vec<RejectedRecord>,

    /// Running schedulers under [`RunMode::Schedule`]; `None` otherwise.
    pub schedulers: Option<SchedulerSet>,
}

// ── Controller ────────────────────────────────────────────────────────────────

/// The control-loop orchestrator.
///
/// Owns the working record set exclusively through the mutating phases
/// (validation, policy, diversion).  Once persistence is done, schedulers
/// receive read-only [`PhaseTimings`] copies; no duration field is ever
/// mutated after scheduling starts.
///
/// A controller drives exactly one run:
///
/// ```rust,ignore
/// let records = load_records_csv(Path::new("real_time_traffic.csv"))?;
/// let mut writer = CsvWriter::new(Path::new("./output"))?;
/// let report = Controller::new(config, records).run(&mut writer)?;
/// if let Some(set) = report.schedulers {
///     // ... let the cycles run, then:
///     set.shutdown();
/// }
/// ```
pub struct Controller {
    config: ControlConfig,
    records: Vec<IntersectionRecord>,
}

impl Controller {
    /// Create a controller for one run over `records` (ingestion order).
    pub fn new(config: ControlConfig, records: Vec<IntersectionRecord>) -> Self {
        Self { config, records }
    }

    /// Run the control loop once: validate → policy → divert → persist →
    /// schedule (per the configured [`RunMode`]).
    ///
    /// Single-record failures reject that record and continue; the run only
    /// aborts when the configuration is unusable, when every ingested record
    /// fails validation, or when the output writer fails.
    pub fn run<W: OutputWriter>(mut self, writer: &mut W) -> ControlResult<RunReport> {
        validate_config(&self.config)?;
        let had_input = !self.records.is_empty();

        // ── Validate ──────────────────────────────────────────────────────
        let (mut records, screened_out) = screen_records(std::mem::take(&mut self.records));
        let mut rejected: Vec<RejectedRecord> = screened_out
            .into_iter()
            .map(|r| {
                warn!(intersection = %r.record.id, error = %r.error, "record rejected");
                RejectedRecord {
                    record: r.record,
                    reason: r.error.into(),
                }
            })
            .collect();
        if had_input && records.is_empty() {
            return Err(ControlError::NoValidRecords {
                rejected: rejected.len(),
            });
        }

        // ── Timing policy ─────────────────────────────────────────────────
        let policy = TimingPolicy::new(self.config.density_reference);
        apply_policy(&policy, &mut records, &mut rejected);

        // ── Diversion ─────────────────────────────────────────────────────
        let mut rng = ControlRng::new(self.config.seed);
        let diversions = match DiversionEngine::with_transfer_range(
            self.config.diversion_threshold,
            self.config.transfer_min,
            self.config.transfer_max,
        ) {
            Ok(engine) => engine.divert(&mut records, &mut rng),
            Err(e) => {
                // Densities stay as the policy left them.
                warn!(error = %e, "diversion skipped");
                Vec::new()
            }
        };

        // ── Persist ───────────────────────────────────────────────────────
        writer.write_records(&records)?;
        for event in &diversions {
            writer.write_diversion(event)?;
        }
        writer.finish()?;

        // ── Schedule ──────────────────────────────────────────────────────
        let schedulers = match self.config.mode {
            RunMode::AdjustOnly => None,
            RunMode::Schedule => Some(start_schedulers(&records, self.config.time_scale)?),
        };

        info!(
            records = records.len(),
            rejected = rejected.len(),
            diversions = diversions.len(),
            scheduling = schedulers.is_some(),
            "control loop complete"
        );

        Ok(RunReport {
            records,
            diversions,
            rejected,
            schedulers,
        })
    }
}

// ── Run phases ────────────────────────────────────────────────────────────────

fn validate_config(config: &ControlConfig) -> ControlResult<()> {
    if !config.density_reference.is_finite() || config.density_reference <= 0.0 {
        return Err(ControlError::Config(format!(
            "density_reference must be positive and finite, got {}",
            config.density_reference
        )));
    }
    if !config.time_scale.is_finite() || config.time_scale <= 0.0 {
        return Err(ControlError::Config(format!(
            "time_scale must be positive and finite, got {}",
            config.time_scale
        )));
    }
    Ok(())
}

/// Apply the timing policy to every record, all-or-nothing per record.
///
/// A record the policy refuses moves to the rejection list; the rest keep
/// their ingestion order.
fn apply_policy(
    policy: &TimingPolicy,
    records: &mut Vec<IntersectionRecord>,
    rejected: &mut Vec<RejectedRecord>,
) {
    #[cfg(not(feature = "parallel"))]
    let results: Vec<_> = records.iter_mut().map(|rec| policy.apply(rec)).collect();

    #[cfg(feature = "parallel")]
    let results: Vec<_> = {
        use rayon::prelude::*;
        records.par_iter_mut().map(|rec| policy.apply(rec)).collect()
    };

    // Sweep failures out back-to-front so the remaining indices stay valid.
    for i in (0..results.len()).rev() {
        if let Err(e) = &results[i] {
            let record = records.remove(i);
            warn!(intersection = %record.id, error = %e, "policy rejected record");
            rejected.push(RejectedRecord {
                record,
                reason: e.clone().into(),
            });
        }
    }
}

/// Spawn one phase scheduler per record, all sharing one cancel token.
///
/// If any spawn fails, the already-started schedulers are stopped before the
/// error is returned.
fn start_schedulers(records: &[IntersectionRecord], time_scale: f64) -> ControlResult<SchedulerSet> {
    let token = CancelToken::new();
    let (tx, rx) = mpsc::channel();
    let mut handles = Vec::with_capacity(records.len());

    for rec in records {
        let timings = PhaseTimings::from_record(rec).scaled(time_scale);
        match tsc_cycle::spawn(rec.id.clone(), timings, token.clone(), tx.clone()) {
            Ok(handle) => handles.push(handle),
            Err(e) => {
                token.cancel();
                for handle in handles {
                    handle.join();
                }
                return Err(e.into());
            }
        }
    }

    Ok(SchedulerSet {
        token,
        handles,
        events: rx,
    })
}
