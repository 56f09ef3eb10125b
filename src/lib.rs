//! Parking Facility Registry
//!
//! An in-memory model of a parking facility registration contract: owners register
//! facilities, update their capacity and pricing, and deactivate or reactivate them.
//!
//! # Overview
//!
//! The registry owns a sequential identifier counter and a map from identifier to
//! facility record. Every mutation names its caller; only the principal that
//! registered a facility may change it. Failures are returned as stable numeric
//! codes and never leave partial state behind.
//!
//! ## Key Features
//!
//! - **Sequential Identifiers**: facilities are numbered 1, 2, 3, ... and never reused
//! - **Field Validation**: capacity and both rates must be positive
//! - **Owner-Only Mutation**: update, deactivate and reactivate check the caller
//! - **Contract Responses**: `{"ok": value}` / `{"err": code}` wire format
//! - **Session Scripts**: replay JSON or JSON Lines command scripts with a report
//!
//! ## Quick Start
//!
//! ```rust
//! use parking_facility_registry::*;
//!
//! let owner: Principal = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM".parse()?;
//! let mut registry = FacilityRegistry::new();
//!
//! let id = registry.register_facility(
//!     &owner,
//!     FacilityDetails::new("Downtown Parking", "Main Street", 100, 5, 50),
//! )?;
//!
//! assert_eq!(id, FacilityId(1));
//! assert_eq!(registry.get_last_facility_id(), 1);
//! assert!(registry.get_facility(id).map(|f| f.active).unwrap_or(false));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: identifiers, enums and configuration
//! - [`facility`]: facility records, the registry, error codes and responses
//! - [`session`]: script replay, reports, logging and session errors
//!
//! ## Error Codes
//!
//! | Code | Error |
//! |------|-------|
//! | 1 | [`RegistryError::InvalidSpaces`] |
//! | 2 | [`RegistryError::InvalidHourlyRate`] |
//! | 3 | [`RegistryError::InvalidDailyRate`] |
//! | 401 | [`RegistryError::Unauthorized`] |
//! | 404 | [`RegistryError::NotFound`] |
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │  Facility   │    │   Session   │
//! │             │    │             │    │             │
//! │ Identifiers │◄───┤ Registry    │◄───┤ Runner      │
//! │ Enums       │    │ Errors      │    │ Report      │
//! │ Config      │    │ Responses   │    │ Logging     │
//! └─────────────┘    └─────────────┘    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod facility;
pub mod session;
pub mod types;

// Core types and identifiers
pub use types::{
    // Configuration
    CliArgs,
    ConfigError,
    ConfigValidationError,
    // Identifiers
    FacilityId,
    // Enums
    FacilityStatus,
    OutputFormat,
    Principal,
    PrincipalParseError,
    RegistryConfig,
};

// Facility types and functionality
pub use facility::{
    ContractResponse, Facility, FacilityDetails, FacilityRegistry, RegistryError, RegistryResult,
    RegistryStats,
};

// Session types and functionality
pub use session::{
    CommandOutcome, LoggingConfig, SessionCommand, SessionError, SessionReport, SessionResult,
    SessionRunner,
};
