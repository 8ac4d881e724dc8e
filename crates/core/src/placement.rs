//! Placement and power-state rule engine.
//!
//! Pure decision functions over point-in-time snapshots of a cage. The
//! persistence layer gathers the snapshot inside a transaction (with the
//! cage row locked) and commits only when the checks pass, so the checks
//! and the write form one atomic unit per cage.
//!
//! Checks run in a fixed order and the first failure determines the error.

use crate::diet::Diet;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Snapshot types
// ---------------------------------------------------------------------------

/// Current state of a cage, as read inside the placement transaction.
#[derive(Debug, Clone)]
pub struct CageSnapshot {
    pub label: String,
    /// Hard occupant limit, fixed at cage creation.
    pub max_occupancy: i32,
    /// Derived count of dinosaurs currently assigned to the cage.
    pub occupancy: i64,
    pub has_power: bool,
}

/// Occupant counts relative to an incoming dinosaur.
#[derive(Debug, Clone, Copy, Default)]
pub struct OccupantMix {
    /// Occupants belonging to a species other than the incoming one's.
    pub other_species: i64,
    /// Occupants whose species is carnivorous.
    pub carnivores: i64,
}

// ---------------------------------------------------------------------------
// Assignment
// ---------------------------------------------------------------------------

/// Decide whether a dinosaur with the given diet may be placed in the cage.
///
/// Check order:
/// 1. the cage has free capacity,
/// 2. the cage is powered,
/// 3. cohabitation: a carnivore shares only with its own species; a
///    herbivore never shares with a carnivore. Herbivores of differing
///    species cohabit freely.
pub fn check_assignment(
    cage: &CageSnapshot,
    diet: Diet,
    mix: &OccupantMix,
) -> Result<(), CoreError> {
    if cage.occupancy >= i64::from(cage.max_occupancy) {
        return Err(CoreError::CapacityExceeded {
            cage: cage.label.clone(),
        });
    }
    if !cage.has_power {
        return Err(CoreError::IncompatiblePowerState(format!(
            "cage '{}' is unpowered and cannot hold dinosaurs",
            cage.label
        )));
    }
    match diet {
        Diet::Carnivore if mix.other_species > 0 => {
            Err(CoreError::IncompatibleSpecies(format!(
                "cage '{}' holds dinosaurs of a different species",
                cage.label
            )))
        }
        Diet::Herbivore if mix.carnivores > 0 => Err(CoreError::IncompatibleSpecies(format!(
            "cage '{}' holds carnivores",
            cage.label
        ))),
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Power state
// ---------------------------------------------------------------------------

/// Decide whether a cage's power flag may change to `power_on`.
///
/// Powering on is always allowed. Powering off requires the cage to be
/// empty: occupants cannot be contained without an active fence. The guard
/// only looks at occupancy, so powering off an already-off empty cage is a
/// harmless no-op.
pub fn check_power_change(label: &str, occupancy: i64, power_on: bool) -> Result<(), CoreError> {
    if !power_on && occupancy > 0 {
        return Err(CoreError::IncompatiblePowerState(format!(
            "cage '{label}' has {occupancy} occupant(s) and cannot be powered off"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
