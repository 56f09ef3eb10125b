//! Session commands and their outcomes
//!
//! A script is a sequence of commands, one per registry operation. Commands
//! are tagged by an `op` field:
//!
//! ```json
//! {"op": "register", "name": "Downtown Parking", "location": "Main Street",
//!  "total_spaces": 100, "hourly_rate": 5, "daily_rate": 50}
//! {"op": "deactivate", "facility_id": 1, "caller": "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM"}
//! {"op": "get_facility", "facility_id": 1}
//! ```

use crate::facility::{ContractResponse, Facility, FacilityDetails};
use crate::session::error::{SessionError, SessionResult};
use crate::types::{FacilityId, Principal};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A single registry operation in a session script
///
/// Mutating commands may name a caller; when omitted the session's default
/// caller is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SessionCommand {
    /// Register a new facility
    Register {
        /// Calling principal
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caller: Option<Principal>,
        /// Facility fields
        #[serde(flatten)]
        details: FacilityDetails,
    },
    /// Replace the editable fields of a facility
    Update {
        /// Calling principal
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caller: Option<Principal>,
        /// Facility to update
        facility_id: FacilityId,
        /// New facility fields
        #[serde(flatten)]
        details: FacilityDetails,
    },
    /// Deactivate a facility
    Deactivate {
        /// Calling principal
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caller: Option<Principal>,
        /// Facility to deactivate
        facility_id: FacilityId,
    },
    /// Reactivate a facility
    Reactivate {
        /// Calling principal
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caller: Option<Principal>,
        /// Facility to reactivate
        facility_id: FacilityId,
    },
    /// Read a facility record
    GetFacility {
        /// Facility to read
        facility_id: FacilityId,
    },
    /// Read the identifier counter
    GetLastFacilityId,
    /// Clear the registry
    Reset,
}

impl SessionCommand {
    /// Operation name as it appears in scripts
    pub fn op_name(&self) -> &'static str {
        match self {
            SessionCommand::Register { .. } => "register",
            SessionCommand::Update { .. } => "update",
            SessionCommand::Deactivate { .. } => "deactivate",
            SessionCommand::Reactivate { .. } => "reactivate",
            SessionCommand::GetFacility { .. } => "get_facility",
            SessionCommand::GetLastFacilityId => "get_last_facility_id",
            SessionCommand::Reset => "reset",
        }
    }

    /// Whether the command can change registry state
    pub fn is_mutation(&self) -> bool {
        !matches!(self, SessionCommand::GetFacility { .. } | SessionCommand::GetLastFacilityId)
    }
}

/// The result of executing one command
///
/// Serializes to the contract's wire shapes: `{"ok": 1}`, `{"ok": true}`,
/// `{"err": 404}`, a facility object or `null`, or a bare number. A reset
/// serializes as `{"reset": true}` so it never reads like a missing facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CommandOutcome {
    /// Response to a registration
    Registered(ContractResponse<FacilityId>),
    /// Response to an update, deactivation or reactivation
    Acknowledged(ContractResponse<bool>),
    /// Facility read
    Facility(Option<Facility>),
    /// Identifier counter read
    LastFacilityId(u64),
    /// Registry was cleared
    Reset {
        /// Always `true`; marks the line as a reset acknowledgement
        reset: bool,
    },
}

impl CommandOutcome {
    /// Outcome of a `reset` command
    pub fn reset() -> Self {
        CommandOutcome::Reset { reset: true }
    }

    /// The error code, if the command was a rejected registry call
    pub fn error_code(&self) -> Option<u32> {
        match self {
            CommandOutcome::Registered(response) => response.error_code(),
            CommandOutcome::Acknowledged(response) => response.error_code(),
            _ => None,
        }
    }

    /// Whether the command was a registry call that returned `ok`
    pub fn is_ok_response(&self) -> bool {
        match self {
            CommandOutcome::Registered(response) => response.is_ok(),
            CommandOutcome::Acknowledged(response) => response.is_ok(),
            _ => false,
        }
    }
}

/// Load a script from a `.json` (array) or `.jsonl` (one command per line) file
pub fn load_script<P: AsRef<Path>>(path: P) -> SessionResult<Vec<SessionCommand>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SessionError::ScriptNotFound(path.display().to_string()));
    }

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => {
            let content = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
        Some("jsonl") => {
            let content = fs::read_to_string(path)?;
            parse_script_lines(&content)
        }
        Some(ext) => Err(SessionError::UnsupportedScriptFormat(ext.to_string())),
        None => Err(SessionError::UnsupportedScriptFormat("no extension".to_string())),
    }
}

/// Parse JSON Lines script content
///
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_script_lines(content: &str) -> SessionResult<Vec<SessionCommand>> {
    let mut commands = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let command = serde_json::from_str(trimmed)
            .map_err(|source| SessionError::ScriptParse { line: index + 1, source })?;
        commands.push(command);
    }

    Ok(commands)
}
