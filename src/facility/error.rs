//! Registry error codes
//!
//! Callers depend on the numeric codes, so they are stable and part of the
//! public contract.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by registry operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[repr(u32)]
pub enum RegistryError {
    /// Total spaces was zero or negative
    #[error("Total spaces must be greater than 0")]
    InvalidSpaces = 1,

    /// Hourly rate was zero or negative
    #[error("Hourly rate must be greater than 0")]
    InvalidHourlyRate = 2,

    /// Daily rate was zero or negative
    #[error("Daily rate must be greater than 0")]
    InvalidDailyRate = 3,

    /// Caller is not the facility owner
    #[error("Caller is not the facility owner")]
    Unauthorized = 401,

    /// No facility is stored under the identifier
    #[error("Facility not found")]
    NotFound = 404,
}

impl RegistryError {
    /// Get the numeric code for this error
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Convert a code back to an error
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(RegistryError::InvalidSpaces),
            2 => Some(RegistryError::InvalidHourlyRate),
            3 => Some(RegistryError::InvalidDailyRate),
            401 => Some(RegistryError::Unauthorized),
            404 => Some(RegistryError::NotFound),
            _ => None,
        }
    }
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(RegistryError::InvalidSpaces.code(), 1);
        assert_eq!(RegistryError::InvalidHourlyRate.code(), 2);
        assert_eq!(RegistryError::InvalidDailyRate.code(), 3);
        assert_eq!(RegistryError::Unauthorized.code(), 401);
        assert_eq!(RegistryError::NotFound.code(), 404);
    }

    #[test]
    fn test_from_code() {
        for error in [
            RegistryError::InvalidSpaces,
            RegistryError::InvalidHourlyRate,
            RegistryError::InvalidDailyRate,
            RegistryError::Unauthorized,
            RegistryError::NotFound,
        ] {
            assert_eq!(RegistryError::from_code(error.code()), Some(error));
        }
        assert_eq!(RegistryError::from_code(0), None);
        assert_eq!(RegistryError::from_code(500), None);
    }
}
