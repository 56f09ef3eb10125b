//! Session runner
//!
//! Executes script commands in order against a registry it owns.

use crate::facility::FacilityRegistry;
use crate::session::command::{CommandOutcome, SessionCommand};
use crate::session::error::SessionResult;
use crate::session::report::SessionReport;
use crate::session_span;
use crate::types::{Principal, RegistryConfig};
use tracing::{debug, info};

/// Drives a registry through a sequence of commands
#[derive(Debug)]
pub struct SessionRunner {
    registry: FacilityRegistry,
    default_caller: Principal,
    halt_on_error: bool,
}

impl SessionRunner {
    /// Create a runner with an empty registry
    pub fn new(default_caller: Principal) -> Self {
        Self {
            registry: FacilityRegistry::new(),
            default_caller,
            halt_on_error: false,
        }
    }

    /// Create a runner from a validated configuration
    pub fn from_config(config: &RegistryConfig) -> SessionResult<Self> {
        let default_caller = config.default_caller()?;
        Ok(Self::new(default_caller).with_halt_on_error(config.halt_on_error))
    }

    /// Stop runs after the first error response
    pub fn with_halt_on_error(mut self, halt_on_error: bool) -> Self {
        self.halt_on_error = halt_on_error;
        self
    }

    /// The registry driven by this runner
    pub fn registry(&self) -> &FacilityRegistry {
        &self.registry
    }

    /// Consume the runner and return its registry
    pub fn into_registry(self) -> FacilityRegistry {
        self.registry
    }

    /// Execute a single command
    pub fn execute(&mut self, command: SessionCommand) -> CommandOutcome {
        debug!(op = command.op_name(), "Executing command");

        match command {
            SessionCommand::Register { caller, details } => {
                let caller = caller.unwrap_or_else(|| self.default_caller.clone());
                CommandOutcome::Registered(self.registry.register_facility(&caller, details).into())
            }
            SessionCommand::Update { caller, facility_id, details } => {
                let caller = caller.unwrap_or_else(|| self.default_caller.clone());
                CommandOutcome::Acknowledged(
                    self.registry.update_facility(&caller, facility_id, details).into(),
                )
            }
            SessionCommand::Deactivate { caller, facility_id } => {
                let caller = caller.unwrap_or_else(|| self.default_caller.clone());
                CommandOutcome::Acknowledged(
                    self.registry.deactivate_facility(&caller, facility_id).into(),
                )
            }
            SessionCommand::Reactivate { caller, facility_id } => {
                let caller = caller.unwrap_or_else(|| self.default_caller.clone());
                CommandOutcome::Acknowledged(
                    self.registry.reactivate_facility(&caller, facility_id).into(),
                )
            }
            SessionCommand::GetFacility { facility_id } => {
                CommandOutcome::Facility(self.registry.get_facility(facility_id).cloned())
            }
            SessionCommand::GetLastFacilityId => {
                CommandOutcome::LastFacilityId(self.registry.get_last_facility_id())
            }
            SessionCommand::Reset => {
                self.registry.reset();
                CommandOutcome::reset()
            }
        }
    }

    /// Execute every command in order and report the outcomes
    pub fn run(&mut self, commands: Vec<SessionCommand>) -> SessionReport {
        let span = session_span!("session_run", commands = commands.len());
        let _enter = span.enter();

        let mut report = SessionReport::new(commands.len());
        let mut halted = false;

        for command in commands {
            let outcome = self.execute(command);
            let failed = outcome.error_code().is_some();
            report.record(outcome);

            if failed && self.halt_on_error {
                info!(executed = report.commands_executed, "Halting session on error response");
                halted = true;
                break;
            }
        }

        report.finish(self.registry.stats(), halted);
        info!(
            executed = report.commands_executed,
            ok = report.ok_responses,
            err = report.err_responses,
            "Session complete"
        );
        report
    }
}
