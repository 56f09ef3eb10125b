//! Session report
//!
//! Collects per-command outcomes and counters for one session run.

use crate::facility::RegistryStats;
use crate::session::command::CommandOutcome;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Summary of a session run
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// When the run finished (None while running)
    pub finished_at: Option<DateTime<Utc>>,
    /// Number of commands in the script
    pub commands_total: usize,
    /// Number of commands actually executed
    pub commands_executed: usize,
    /// Registry calls that returned `ok`
    pub ok_responses: usize,
    /// Registry calls that returned `err`
    pub err_responses: usize,
    /// Number of `err` responses per error code
    pub error_counts: BTreeMap<u32, usize>,
    /// Whether the run stopped early on an error response
    pub halted: bool,
    /// Outcome of each executed command, in order
    pub outcomes: Vec<CommandOutcome>,
    /// Registry statistics after the last command
    pub final_stats: RegistryStats,
}

impl SessionReport {
    /// Start a report for a script of `commands_total` commands
    pub fn new(commands_total: usize) -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            commands_total,
            commands_executed: 0,
            ok_responses: 0,
            err_responses: 0,
            error_counts: BTreeMap::new(),
            halted: false,
            outcomes: Vec::with_capacity(commands_total),
            final_stats: RegistryStats::default(),
        }
    }

    /// Record the outcome of one command
    pub fn record(&mut self, outcome: CommandOutcome) {
        self.commands_executed += 1;
        if let Some(code) = outcome.error_code() {
            self.err_responses += 1;
            *self.error_counts.entry(code).or_insert(0) += 1;
        } else if outcome.is_ok_response() {
            self.ok_responses += 1;
        }
        self.outcomes.push(outcome);
    }

    /// Close the report with the final registry statistics
    pub fn finish(&mut self, final_stats: RegistryStats, halted: bool) {
        self.final_stats = final_stats;
        self.halted = halted;
        self.finished_at = Some(Utc::now());
    }

    /// Wall-clock duration of the run, if finished
    pub fn duration(&self) -> Option<Duration> {
        self.finished_at.map(|finished| finished - self.started_at)
    }

    /// Number of read and reset commands executed
    pub fn non_response_commands(&self) -> usize {
        self.commands_executed - self.ok_responses - self.err_responses
    }

    /// Human-readable summary for the console
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Session Summary:".to_string(),
            format!("  Commands Executed: {} of {}", self.commands_executed, self.commands_total),
            format!("  Ok Responses: {}", self.ok_responses),
            format!("  Err Responses: {}", self.err_responses),
            format!("  Reads/Resets: {}", self.non_response_commands()),
        ];

        for (code, count) in &self.error_counts {
            lines.push(format!("    err {}: {}", code, count));
        }

        if self.halted {
            lines.push("  Halted on first error response".to_string());
        }

        lines.push(format!(
            "  Facilities: {} ({} active, {} inactive, {:.1}% active)",
            self.final_stats.total_facilities,
            self.final_stats.active_facilities,
            self.final_stats.inactive_facilities,
            self.final_stats.active_percentage()
        ));
        lines.push(format!(
            "  Spaces: {} total, {} in active facilities",
            self.final_stats.total_spaces, self.final_stats.active_spaces
        ));

        if let Some(duration) = self.duration() {
            lines.push(format!("  Runtime: {} ms", duration.num_milliseconds()));
        }

        lines.join("\n")
    }
}
