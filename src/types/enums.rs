//! Enumeration types for the facility registry
//!
//! This module contains the facility status and the output formats used when
//! printing session responses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a registered facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacilityStatus {
    /// Facility is open for use
    Active,
    /// Facility has been logically disabled but remains stored
    Inactive,
}

impl FacilityStatus {
    /// Status corresponding to an active flag
    pub fn from_active(active: bool) -> Self {
        if active {
            FacilityStatus::Active
        } else {
            FacilityStatus::Inactive
        }
    }

    /// Whether this status represents an active facility
    pub fn is_active(self) -> bool {
        matches!(self, FacilityStatus::Active)
    }
}

impl fmt::Display for FacilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacilityStatus::Active => write!(f, "Active"),
            FacilityStatus::Inactive => write!(f, "Inactive"),
        }
    }
}

/// Output format for session responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// One compact JSON document per line
    Json,
    /// Indented JSON for human reading
    Pretty,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Pretty => write!(f, "pretty"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" | "jsonl" => Ok(OutputFormat::Json),
            "pretty" => Ok(OutputFormat::Pretty),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
