//! Facility records and their editable details

use crate::facility::error::{RegistryError, RegistryResult};
use crate::types::{FacilityStatus, Principal};
use serde::{Deserialize, Serialize};

/// The caller-supplied fields of a facility
///
/// Used both for registration and for updates. Numeric fields are signed so
/// that negative input reaches validation instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityDetails {
    /// Display name
    pub name: String,
    /// Free-form location description
    pub location: String,
    /// Parking capacity
    pub total_spaces: i64,
    /// Price per hour
    pub hourly_rate: i64,
    /// Price per day
    pub daily_rate: i64,
}

impl FacilityDetails {
    /// Create a new set of facility details
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        total_spaces: i64,
        hourly_rate: i64,
        daily_rate: i64,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            total_spaces,
            hourly_rate,
            daily_rate,
        }
    }

    /// Validate the numeric fields, reporting the first failure
    ///
    /// Checks run in a fixed order: spaces, hourly rate, daily rate.
    pub fn validate(&self) -> RegistryResult<()> {
        if self.total_spaces <= 0 {
            return Err(RegistryError::InvalidSpaces);
        }
        if self.hourly_rate <= 0 {
            return Err(RegistryError::InvalidHourlyRate);
        }
        if self.daily_rate <= 0 {
            return Err(RegistryError::InvalidDailyRate);
        }
        Ok(())
    }
}

/// A registered parking facility
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    /// Display name
    pub name: String,
    /// Principal that registered the facility
    pub owner: Principal,
    /// Free-form location description
    pub location: String,
    /// Parking capacity
    pub total_spaces: i64,
    /// Price per hour
    pub hourly_rate: i64,
    /// Price per day
    pub daily_rate: i64,
    /// Whether the facility is currently active
    pub active: bool,
}

impl Facility {
    /// Create an active facility owned by `owner`
    ///
    /// The details are not validated here; the registry does that before
    /// constructing a record.
    pub fn new(owner: Principal, details: FacilityDetails) -> Self {
        Self {
            name: details.name,
            owner,
            location: details.location,
            total_spaces: details.total_spaces,
            hourly_rate: details.hourly_rate,
            daily_rate: details.daily_rate,
            active: true,
        }
    }

    /// Replace the editable fields, keeping owner and active flag
    pub fn apply_details(&mut self, details: FacilityDetails) {
        self.name = details.name;
        self.location = details.location;
        self.total_spaces = details.total_spaces;
        self.hourly_rate = details.hourly_rate;
        self.daily_rate = details.daily_rate;
    }

    /// Current editable fields
    pub fn details(&self) -> FacilityDetails {
        FacilityDetails::new(
            self.name.clone(),
            self.location.clone(),
            self.total_spaces,
            self.hourly_rate,
            self.daily_rate,
        )
    }

    /// Whether `principal` owns this facility
    pub fn is_owned_by(&self, principal: &Principal) -> bool {
        self.owner == *principal
    }

    /// Lifecycle status derived from the active flag
    pub fn status(&self) -> FacilityStatus {
        FacilityStatus::from_active(self.active)
    }
}
