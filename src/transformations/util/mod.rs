//! Utility functions for transformations.
//!
//! Common helpers for rendering payload values as document fields.

pub mod constants;
pub mod db;

use alloy_primitives::U256;

use crate::db::DocValue;
use crate::decoding::AdventurerState;

/// Adventurer ids are stored as decimal strings.
pub fn adventurer_id(id: U256) -> DocValue {
    DocValue::numeric(id)
}

/// `adventurerId` of a snapshot.
pub fn state_adventurer_id(state: &AdventurerState) -> DocValue {
    adventurer_id(state.adventurer_id)
}

/// Owner address of a snapshot.
pub fn state_owner(state: &AdventurerState) -> DocValue {
    DocValue::felt(state.owner)
}
