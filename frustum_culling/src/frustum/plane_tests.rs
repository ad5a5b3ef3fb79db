use super::*;

// ============================================================================
// Plane constants
// ============================================================================

#[test]
fn test_plane_constants() {
    assert_eq!(PLANE_NX, 0);
    assert_eq!(PLANE_PX, 1);
    assert_eq!(PLANE_NY, 2);
    assert_eq!(PLANE_PY, 3);
    assert_eq!(PLANE_NZ, 4);
    assert_eq!(PLANE_PZ, 5);
}

#[test]
fn test_mask_constants_are_shifted_indices() {
    assert_eq!(PLANE_MASK_NX, 0b000001);
    assert_eq!(PLANE_MASK_PX, 0b000010);
    assert_eq!(PLANE_MASK_NY, 0b000100);
    assert_eq!(PLANE_MASK_PY, 0b001000);
    assert_eq!(PLANE_MASK_NZ, 0b010000);
    assert_eq!(PLANE_MASK_PZ, 0b100000);
    assert_eq!(PlaneMask::all().bits(), 0b111111);
}

// ============================================================================
// PlaneIndex
// ============================================================================

#[test]
fn test_plane_index_round_trips_through_code() {
    for (i, plane) in PlaneIndex::ALL.iter().enumerate() {
        assert_eq!(plane.index(), i);
        assert_eq!(PlaneIndex::try_from(plane.code()), Ok(*plane));
    }
}

#[test]
fn test_plane_index_rejects_out_of_range() {
    assert_eq!(PlaneIndex::try_from(6), Err(Error::InvalidPlaneIndex(6)));
    assert_eq!(PlaneIndex::try_from(-1), Err(Error::InvalidPlaneIndex(-1)));
}

// ============================================================================
// PlaneMask
// ============================================================================

#[test]
fn test_plane_mask_default_is_all() {
    assert_eq!(PlaneMask::default(), PlaneMask::all());
    for plane in PlaneIndex::ALL {
        assert!(PlaneMask::default().tests(plane));
    }
}

#[test]
fn test_plane_mask_tests_only_listed_planes() {
    let mask = PlaneMask::NX | PlaneMask::PZ;
    assert!(mask.tests(PlaneIndex::NX));
    assert!(mask.tests(PlaneIndex::PZ));
    assert!(!mask.tests(PlaneIndex::PX));
    assert!(!mask.tests(PlaneIndex::NZ));
    assert_eq!(PlaneMask::from(PlaneIndex::PY), PlaneMask::PY);
}

#[test]
fn test_plane_mask_try_from_bits() {
    assert_eq!(PlaneMask::try_from_bits(PLANE_MASK_NY | PLANE_MASK_PY), Ok(PlaneMask::NY | PlaneMask::PY));
    assert_eq!(PlaneMask::try_from_bits(1 << 6), Err(Error::InvalidPlaneMask(1 << 6)));
}
