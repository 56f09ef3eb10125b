//! Facility registry
//!
//! This module contains the FacilityRegistry struct, which owns the identifier
//! counter and the facility records, and enforces field validation and
//! owner-only mutation.

use crate::facility::error::{RegistryError, RegistryResult};
use crate::facility::facility::{Facility, FacilityDetails};
use crate::registry_event;
use crate::types::{FacilityId, Principal};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Registry of parking facilities keyed by sequential identifier
#[derive(Debug, Clone, Default, Serialize)]
pub struct FacilityRegistry {
    /// Last identifier handed out (0 before the first registration)
    last_facility_id: u64,
    /// Stored facilities, ordered by identifier
    facilities: BTreeMap<FacilityId, Facility>,
}

impl FacilityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            last_facility_id: 0,
            facilities: BTreeMap::new(),
        }
    }

    /// Clear all facilities and restart identifiers at 1
    pub fn reset(&mut self) {
        registry_event!(info, "Registry reset", cleared = self.facilities.len());
        self.last_facility_id = 0;
        self.facilities.clear();
    }

    /// Register a new facility owned by `caller`
    ///
    /// Returns the new identifier. Nothing is stored if validation fails.
    pub fn register_facility(
        &mut self,
        caller: &Principal,
        details: FacilityDetails,
    ) -> RegistryResult<FacilityId> {
        if let Err(error) = details.validate() {
            registry_event!(
                warn,
                "Facility registration rejected",
                caller = caller.as_str(),
                code = error.code(),
            );
            return Err(error);
        }

        let facility_id = FacilityId(self.last_facility_id).next();
        self.facilities.insert(facility_id, Facility::new(caller.clone(), details));
        self.last_facility_id = facility_id.value();

        registry_event!(
            info,
            "Facility registered",
            facility_id = facility_id.value(),
            owner = caller.as_str(),
        );
        Ok(facility_id)
    }

    /// Replace the editable fields of a facility
    ///
    /// Checks existence, then ownership, then the new details.
    pub fn update_facility(
        &mut self,
        caller: &Principal,
        facility_id: FacilityId,
        details: FacilityDetails,
    ) -> RegistryResult<()> {
        let result = self.owned_facility_mut(caller, facility_id).and_then(|facility| {
            details.validate()?;
            facility.apply_details(details);
            Ok(())
        });

        Self::log_mutation("update", caller, facility_id, &result);
        result
    }

    /// Mark a facility inactive; repeating the call succeeds
    pub fn deactivate_facility(
        &mut self,
        caller: &Principal,
        facility_id: FacilityId,
    ) -> RegistryResult<()> {
        let result = self.set_active(caller, facility_id, false);
        Self::log_mutation("deactivate", caller, facility_id, &result);
        result
    }

    /// Mark a facility active again; repeating the call succeeds
    pub fn reactivate_facility(
        &mut self,
        caller: &Principal,
        facility_id: FacilityId,
    ) -> RegistryResult<()> {
        let result = self.set_active(caller, facility_id, true);
        Self::log_mutation("reactivate", caller, facility_id, &result);
        result
    }

    /// Get a facility by ID
    pub fn get_facility(&self, facility_id: FacilityId) -> Option<&Facility> {
        let facility = self.facilities.get(&facility_id);
        debug!(facility_id = facility_id.value(), found = facility.is_some(), "Facility lookup");
        facility
    }

    /// Get the last identifier handed out
    pub fn get_last_facility_id(&self) -> u64 {
        self.last_facility_id
    }

    /// Check whether a facility exists
    pub fn contains(&self, facility_id: FacilityId) -> bool {
        self.facilities.contains_key(&facility_id)
    }

    /// Number of stored facilities
    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    /// Whether no facility has been registered
    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }

    /// Iterate over all facilities in identifier order
    pub fn iter(&self) -> impl Iterator<Item = (FacilityId, &Facility)> {
        self.facilities.iter().map(|(id, facility)| (*id, facility))
    }

    /// Get all facilities owned by a principal, in identifier order
    pub fn facilities_owned_by(&self, owner: &Principal) -> Vec<(FacilityId, &Facility)> {
        self.iter().filter(|(_, facility)| facility.is_owned_by(owner)).collect()
    }

    /// Get summary statistics over all stored facilities
    pub fn stats(&self) -> RegistryStats {
        let mut stats = RegistryStats::default();
        for facility in self.facilities.values() {
            stats.total_facilities += 1;
            stats.total_spaces = stats.total_spaces.saturating_add(facility.total_spaces);
            if facility.active {
                stats.active_facilities += 1;
                stats.active_spaces = stats.active_spaces.saturating_add(facility.total_spaces);
            } else {
                stats.inactive_facilities += 1;
            }
        }
        stats
    }

    fn set_active(
        &mut self,
        caller: &Principal,
        facility_id: FacilityId,
        active: bool,
    ) -> RegistryResult<()> {
        let facility = self.owned_facility_mut(caller, facility_id)?;
        facility.active = active;
        Ok(())
    }

    /// Look up a facility for mutation, enforcing existence then ownership
    fn owned_facility_mut(
        &mut self,
        caller: &Principal,
        facility_id: FacilityId,
    ) -> RegistryResult<&mut Facility> {
        let facility = self.facilities.get_mut(&facility_id).ok_or(RegistryError::NotFound)?;
        if !facility.is_owned_by(caller) {
            return Err(RegistryError::Unauthorized);
        }
        Ok(facility)
    }

    fn log_mutation(
        operation: &'static str,
        caller: &Principal,
        facility_id: FacilityId,
        result: &RegistryResult<()>,
    ) {
        match result {
            Ok(()) => {
                registry_event!(
                    info,
                    "Facility mutated",
                    operation = operation,
                    facility_id = facility_id.value(),
                    caller = caller.as_str(),
                );
            }
            Err(error) => {
                registry_event!(
                    warn,
                    "Facility mutation rejected",
                    operation = operation,
                    facility_id = facility_id.value(),
                    caller = caller.as_str(),
                    code = error.code(),
                );
            }
        }
    }
}

/// Summary statistics over a registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    /// Number of stored facilities
    pub total_facilities: usize,
    /// Number of active facilities
    pub active_facilities: usize,
    /// Number of inactive facilities
    pub inactive_facilities: usize,
    /// Capacity across all facilities, saturating at `i64::MAX`
    pub total_spaces: i64,
    /// Capacity across active facilities, saturating at `i64::MAX`
    pub active_spaces: i64,
}

impl RegistryStats {
    /// Percentage of facilities that are active
    pub fn active_percentage(&self) -> f64 {
        if self.total_facilities == 0 {
            0.0
        } else {
            (self.active_facilities as f64 / self.total_facilities as f64) * 100.0
        }
    }
}
