//! Tests for the facility registration contract
//!
//! These tests drive the registry through its public API and check the
//! response codes, the stored records and the identifier counter.

use parking_facility_registry::{
    ContractResponse, Facility, FacilityDetails, FacilityId, FacilityRegistry, Principal,
    RegistryError,
};

const OWNER: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
const OTHER: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG";

fn owner() -> Principal {
    OWNER.parse().unwrap()
}

fn other() -> Principal {
    OTHER.parse().unwrap()
}

fn downtown() -> FacilityDetails {
    FacilityDetails::new("Downtown Parking", "Main Street", 100, 5, 50)
}

/// Create a registry holding the downtown facility as id 1
fn registry_with_downtown() -> FacilityRegistry {
    let mut registry = FacilityRegistry::new();
    registry.register_facility(&owner(), downtown()).unwrap();
    registry
}

#[test]
fn test_register_new_facility() {
    let mut registry = FacilityRegistry::new();

    let response: ContractResponse<FacilityId> =
        registry.register_facility(&owner(), downtown()).into();

    assert_eq!(response, ContractResponse::Ok(FacilityId(1)));
    assert_eq!(registry.get_last_facility_id(), 1);
    assert_eq!(
        registry.get_facility(FacilityId(1)),
        Some(&Facility {
            name: "Downtown Parking".to_string(),
            owner: owner(),
            location: "Main Street".to_string(),
            total_spaces: 100,
            hourly_rate: 5,
            daily_rate: 50,
            active: true,
        })
    );
}

#[test]
fn test_register_rejects_invalid_parameters() {
    let mut registry = FacilityRegistry::new();

    let cases = [
        (FacilityDetails::new("Downtown Parking", "Main Street", 0, 5, 50), 1),
        (FacilityDetails::new("Downtown Parking", "Main Street", -10, 5, 50), 1),
        (FacilityDetails::new("Downtown Parking", "Main Street", 100, 0, 50), 2),
        (FacilityDetails::new("Downtown Parking", "Main Street", 100, 5, 0), 3),
        (FacilityDetails::new("Downtown Parking", "Main Street", 100, -5, -50), 2),
    ];

    for (details, expected_code) in cases {
        let response: ContractResponse<FacilityId> =
            registry.register_facility(&owner(), details).into();
        assert_eq!(response, ContractResponse::Err(expected_code));
    }

    // No failed attempt advanced the counter or stored a record
    assert_eq!(registry.get_last_facility_id(), 0);
    assert!(registry.is_empty());
    assert!(registry.get_facility(FacilityId(1)).is_none());
}

#[test]
fn test_update_existing_facility() {
    let mut registry = registry_with_downtown();

    let response: ContractResponse<bool> = registry
        .update_facility(
            &owner(),
            FacilityId(1),
            FacilityDetails::new("Downtown Parking Premium", "Main Street Corner", 150, 8, 75),
        )
        .into();

    assert_eq!(response, ContractResponse::Ok(true));
    assert_eq!(
        registry.get_facility(FacilityId(1)),
        Some(&Facility {
            name: "Downtown Parking Premium".to_string(),
            owner: owner(),
            location: "Main Street Corner".to_string(),
            total_spaces: 150,
            hourly_rate: 8,
            daily_rate: 75,
            active: true,
        })
    );
    assert_eq!(registry.get_last_facility_id(), 1);
}

#[test]
fn test_update_preserves_inactive_flag() {
    let mut registry = registry_with_downtown();
    registry.deactivate_facility(&owner(), FacilityId(1)).unwrap();

    registry
        .update_facility(&owner(), FacilityId(1), FacilityDetails::new("Lot", "Side St", 20, 1, 9))
        .unwrap();

    let facility = registry.get_facility(FacilityId(1)).unwrap();
    assert!(!facility.active);
    assert_eq!(facility.owner, owner());
    assert_eq!(facility.name, "Lot");
}

#[test]
fn test_update_missing_facility() {
    let mut registry = registry_with_downtown();

    let response: ContractResponse<bool> =
        registry.update_facility(&owner(), FacilityId(42), downtown()).into();

    assert_eq!(response, ContractResponse::Err(404));
}

#[test]
fn test_update_by_non_owner() {
    let mut registry = registry_with_downtown();

    let response: ContractResponse<bool> = registry
        .update_facility(
            &other(),
            FacilityId(1),
            FacilityDetails::new("Hijacked", "Elsewhere", 1, 1, 1),
        )
        .into();

    assert_eq!(response, ContractResponse::Err(401));
    assert_eq!(registry.get_facility(FacilityId(1)).unwrap().details(), downtown());
}

#[test]
fn test_update_validation_after_ownership() {
    let mut registry = registry_with_downtown();

    let cases = [
        (FacilityDetails::new("A", "B", 0, 5, 50), RegistryError::InvalidSpaces),
        (FacilityDetails::new("A", "B", 100, 0, 50), RegistryError::InvalidHourlyRate),
        (FacilityDetails::new("A", "B", 100, 5, 0), RegistryError::InvalidDailyRate),
    ];

    for (details, expected) in cases {
        assert_eq!(registry.update_facility(&owner(), FacilityId(1), details), Err(expected));
    }

    assert_eq!(registry.get_facility(FacilityId(1)).unwrap().details(), downtown());
}

#[test]
fn test_deactivate_and_reactivate_facility() {
    let mut registry = registry_with_downtown();

    let response: ContractResponse<bool> =
        registry.deactivate_facility(&owner(), FacilityId(1)).into();
    assert_eq!(response, ContractResponse::Ok(true));
    assert!(!registry.get_facility(FacilityId(1)).unwrap().active);

    let response: ContractResponse<bool> =
        registry.reactivate_facility(&owner(), FacilityId(1)).into();
    assert_eq!(response, ContractResponse::Ok(true));
    assert!(registry.get_facility(FacilityId(1)).unwrap().active);
}

#[test]
fn test_toggles_are_idempotent() {
    let mut registry = registry_with_downtown();

    assert_eq!(registry.deactivate_facility(&owner(), FacilityId(1)), Ok(()));
    assert_eq!(registry.deactivate_facility(&owner(), FacilityId(1)), Ok(()));
    assert!(!registry.get_facility(FacilityId(1)).unwrap().active);

    assert_eq!(registry.reactivate_facility(&owner(), FacilityId(1)), Ok(()));
    assert_eq!(registry.reactivate_facility(&owner(), FacilityId(1)), Ok(()));
    assert!(registry.get_facility(FacilityId(1)).unwrap().active);
}

#[test]
fn test_toggle_errors() {
    let mut registry = registry_with_downtown();

    assert_eq!(registry.deactivate_facility(&owner(), FacilityId(2)), Err(RegistryError::NotFound));
    assert_eq!(registry.reactivate_facility(&owner(), FacilityId(2)), Err(RegistryError::NotFound));
    assert_eq!(
        registry.deactivate_facility(&other(), FacilityId(1)),
        Err(RegistryError::Unauthorized)
    );
    assert_eq!(
        registry.reactivate_facility(&other(), FacilityId(1)),
        Err(RegistryError::Unauthorized)
    );
    assert!(registry.get_facility(FacilityId(1)).unwrap().active);
}

#[test]
fn test_sequential_ids_skip_failed_registrations() {
    let mut registry = FacilityRegistry::new();

    let first = registry.register_facility(&owner(), downtown()).unwrap();
    assert!(registry
        .register_facility(&owner(), FacilityDetails::new("Bad", "Lot", 10, 0, 10))
        .is_err());
    let second = registry
        .register_facility(&other(), FacilityDetails::new("Airport", "Terminal 1", 400, 10, 90))
        .unwrap();
    assert!(registry
        .register_facility(&other(), FacilityDetails::new("Bad", "Lot", 10, 10, -1))
        .is_err());
    let third = registry.register_facility(&owner(), downtown()).unwrap();

    assert_eq!((first, second, third), (FacilityId(1), FacilityId(2), FacilityId(3)));
    assert_eq!(registry.get_last_facility_id(), 3);
}

#[test]
fn test_owners_are_independent() {
    let mut registry = FacilityRegistry::new();
    let mine = registry.register_facility(&owner(), downtown()).unwrap();
    let theirs = registry.register_facility(&other(), downtown()).unwrap();

    assert_eq!(registry.deactivate_facility(&owner(), theirs), Err(RegistryError::Unauthorized));
    assert_eq!(registry.deactivate_facility(&other(), theirs), Ok(()));
    assert!(registry.get_facility(mine).unwrap().active);
    assert!(!registry.get_facility(theirs).unwrap().active);
}

#[test]
fn test_reset_between_scenarios() {
    let mut registry = registry_with_downtown();
    registry.reset();

    assert_eq!(registry.get_last_facility_id(), 0);
    assert!(registry.get_facility(FacilityId(1)).is_none());
    assert_eq!(registry.register_facility(&other(), downtown()), Ok(FacilityId(1)));
    assert_eq!(registry.get_facility(FacilityId(1)).unwrap().owner, other());
}
