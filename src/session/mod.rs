//! Session scripting and control
//!
//! This module replays scripts of registry commands, collects a report of the
//! run, and holds the logging setup and error types for the binary.
//!
//! # Overview
//!
//! - **SessionCommand**: one registry operation, parsed from JSON or JSON Lines
//! - **SessionRunner**: owns a registry and executes commands in order
//! - **SessionReport**: per-command outcomes, counters and final statistics
//! - **SessionError**: script and configuration failures
//! - **LoggingConfig**: tracing subscriber setup
//!
//! # Usage Example
//!
//! ```rust
//! use parking_facility_registry::session::*;
//! use parking_facility_registry::types::*;
//!
//! let script = r#"
//! {"op": "register", "name": "Downtown Parking", "location": "Main Street", "total_spaces": 100, "hourly_rate": 5, "daily_rate": 50}
//! {"op": "deactivate", "facility_id": 1}
//! {"op": "get_last_facility_id"}
//! "#;
//!
//! let commands = parse_script_lines(script).unwrap();
//! let mut runner = SessionRunner::from_config(&RegistryConfig::default()).unwrap();
//! let report = runner.run(commands);
//!
//! assert_eq!(report.ok_responses, 2);
//! assert_eq!(report.final_stats.inactive_facilities, 1);
//! ```

pub mod command;
pub mod error;
pub mod logging;
pub mod report;
pub mod runner;

// Re-export all public types for convenience
pub use command::*;
pub use error::*;
pub use logging::*;
pub use report::*;
pub use runner::*;
