//! Facility records and the facility registry
//!
//! This module manages parking facilities: their records, the registry that
//! assigns identifiers and guards mutations, the stable error codes, and the
//! contract-style response wrapper.
//!
//! # Overview
//!
//! - **Facility**: a registered parking location with capacity and pricing
//! - **FacilityDetails**: the caller-supplied fields used to register or update
//! - **FacilityRegistry**: identifier counter plus records, with owner-only mutation
//! - **RegistryError**: numeric error codes (1, 2, 3, 401, 404)
//! - **ContractResponse**: `{"ok": value}` / `{"err": code}` wrapper
//!
//! # Usage Example
//!
//! ```rust
//! use parking_facility_registry::facility::*;
//! use parking_facility_registry::types::*;
//!
//! let owner: Principal = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM".parse().unwrap();
//! let mut registry = FacilityRegistry::new();
//!
//! let id = registry
//!     .register_facility(&owner, FacilityDetails::new("Downtown Parking", "Main Street", 100, 5, 50))
//!     .unwrap();
//! assert_eq!(id, FacilityId(1));
//!
//! registry.deactivate_facility(&owner, id).unwrap();
//! assert!(!registry.get_facility(id).unwrap().active);
//!
//! let response: ContractResponse<bool> = registry.reactivate_facility(&owner, id).into();
//! assert_eq!(response, ContractResponse::Ok(true));
//! ```

pub mod error;
#[allow(clippy::module_inception)]
pub mod facility;
pub mod registry;
pub mod response;

// Re-export all public types for convenience
pub use error::{RegistryError, RegistryResult};
pub use facility::{Facility, FacilityDetails};
pub use registry::{FacilityRegistry, RegistryStats};
pub use response::ContractResponse;
