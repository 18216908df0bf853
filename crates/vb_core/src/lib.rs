//! # vb_core - Volleyball Rotation Engine
//!
//! This library models a volleyball team's rotational formation as a
//! 9-position ring (6 on-court zones + 3 off-court slots) and provides the
//! rules around it, with a JSON API for easy integration with a rendering
//! front end.
//!
//! ## Features
//! - Serve-rotation advance over the full 9-player ring
//! - Swap-safe manual placement (position↔player bijection is preserved)
//! - Serve-moment overlap legality check (row depth + left-right order)
//! - Active-setter derivation for 6-2 and 5-1 team systems

pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod state;

// Re-export main API functions
pub use api::{active_setter_json, advance_rotation_json, check_overlap_json};
pub use error::{Result, RotationError};

// Re-export the data model
pub use models::{Player, RingPosition, Role, Rotation, Slot, TeamSystem, RING_SIZE};

// Re-export engine operations
pub use engine::{
    active_setter, advance, check_overlap, clamp_grid, grid_to_position, position_to_grid,
    GridCell, IssueKind, OverlapIssue, OverlapReport,
};

// Re-export state management
pub use state::{get_state, get_state_mut, reset_state, set_state, TeamState, TEAM_STATE};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_rotation_cycle_through_json_api() {
        let start = Rotation::starting(TeamSystem::SixTwo);
        let mut rotation_value = serde_json::to_value(&start).unwrap();

        for _ in 0..9 {
            let request = json!({ "schema_version": 1, "rotation": rotation_value });
            let result = advance_rotation_json(&request.to_string()).unwrap();
            let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
            rotation_value = parsed["rotation"].clone();
        }

        let cycled: Rotation = serde_json::from_value(rotation_value).unwrap();
        assert_eq!(cycled, start);
    }

    #[test]
    fn test_drag_then_check_flow() {
        let mut state = TeamState::new();

        // UI drag: p1 dropped on the cell holding position 4.
        let (row, col) = clamp_grid(0, 0);
        let target = grid_to_position(row, col).unwrap();
        assert!(state.set_slot_position("p1", target));

        let request = json!({
            "schema_version": 1,
            "rotation": serde_json::to_value(&state.rotation).unwrap(),
        });
        let result = check_overlap_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(parsed["ok"], false);
        assert!(!parsed["issues"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_six_two_setter_follows_rotation() {
        let mut state = TeamState::new();
        state.set_slot_position("p7", RingPosition::P4);

        assert_eq!(
            active_setter(&state.rotation, &state.players),
            Some("p1".to_string())
        );

        state.rotate();
        assert_eq!(
            active_setter(&state.rotation, &state.players),
            Some("p7".to_string())
        );
    }
}
