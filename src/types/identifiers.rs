//! Identifier types for the facility registry
//!
//! This module contains the sequential facility identifier and the principal
//! type used to identify callers and owners.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Sequential identifier assigned to a registered facility
///
/// Identifiers start at 1 and are never reused. They serialize as bare numbers
/// so that contract responses read `{"ok": 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacilityId(pub u64);

impl FacilityId {
    /// Create a facility ID from its numeric value
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the numeric value
    pub fn value(self) -> u64 {
        self.0
    }

    /// The identifier that follows this one
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors produced when parsing a principal
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrincipalParseError {
    /// The principal string was empty
    #[error("Principal must not be empty")]
    Empty,

    /// The principal string contained whitespace
    #[error("Principal must not contain whitespace: {0:?}")]
    ContainsWhitespace(String),
}

/// Identity of a caller or facility owner (an account address)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Principal(String);

impl Principal {
    /// Create a principal, validating its textual form
    pub fn new(value: impl Into<String>) -> Result<Self, PrincipalParseError> {
        let value = value.into();
        if value.is_empty() {
            return Err(PrincipalParseError::Empty);
        }
        if value.chars().any(char::is_whitespace) {
            return Err(PrincipalParseError::ContainsWhitespace(value));
        }
        Ok(Self(value))
    }

    /// Get the principal as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Principal {
    type Err = PrincipalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Principal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Principal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Principal::new(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facility_id_sequence() {
        let first = FacilityId::new(0).next();
        assert_eq!(first, FacilityId(1));
        assert_eq!(first.next().value(), 2);
        assert!(FacilityId(1) < FacilityId(2));
    }

    #[test]
    fn test_facility_id_serializes_as_number() {
        let json = serde_json::to_string(&FacilityId(7)).unwrap();
        assert_eq!(json, "7");

        let parsed: FacilityId = serde_json::from_str("42").unwrap();
        assert_eq!(parsed, FacilityId(42));
        assert_eq!(parsed.to_string(), "42");
    }

    #[test]
    fn test_principal_parsing() {
        let principal: Principal = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM".parse().unwrap();
        assert_eq!(principal.as_str(), "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM");

        assert_eq!("".parse::<Principal>(), Err(PrincipalParseError::Empty));
        assert!(matches!(
            "ST1 ABC".parse::<Principal>(),
            Err(PrincipalParseError::ContainsWhitespace(_))
        ));
    }

    #[test]
    fn test_principal_serde() {
        let principal = Principal::new("ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG").unwrap();
        let json = serde_json::to_string(&principal).unwrap();
        assert_eq!(json, "\"ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG\"");

        let back: Principal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, principal);

        // Invalid principals are rejected at deserialization
        assert!(serde_json::from_str::<Principal>("\"\"").is_err());
    }
}
