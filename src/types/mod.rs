//! Core types and identifiers for the facility registry
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the registry.
//!
//! # Overview
//!
//! - **Identifiers**: sequential facility IDs and caller principals
//! - **Enums**: facility status and response output formats
//! - **Configuration**: session configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use parking_facility_registry::types::*;
//!
//! let caller: Principal = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM".parse().unwrap();
//! let first = FacilityId::new(0).next();
//! assert_eq!(first.value(), 1);
//!
//! let status = FacilityStatus::from_active(true);
//! assert!(status.is_active());
//!
//! let config = RegistryConfig::default();
//! assert_eq!(config.default_caller().unwrap(), caller);
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
