//! Runtime Team State Manager
//!
//! This module provides a thread-safe global state manager for the active
//! roster and rotation. The owning application applies one mutation at a
//! time through the write lock; the engine functions themselves stay pure.

use once_cell::sync::Lazy;
use std::sync::{Arc, RwLock};

use crate::engine::rotate::advance;
use crate::models::{Player, RingPosition, Role, Rotation, TeamSystem};

/// Global team state singleton
pub static TEAM_STATE: Lazy<Arc<RwLock<TeamState>>> =
    Lazy::new(|| Arc::new(RwLock::new(TeamState::default())));

/// Runtime team state: the 9-player roster plus the current rotation.
#[derive(Debug, Clone)]
pub struct TeamState {
    pub players: Vec<Player>,
    pub rotation: Rotation,
}

impl Default for TeamState {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamState {
    /// Canonical default lineup: two setters, two outsides, two middles,
    /// two opposites and a defensive specialist, player `p{n}` at
    /// position `n`, 6-2 system.
    pub fn new() -> Self {
        let players = vec![
            Player::new("p1", "Setter1", Role::S, Some(1)),
            Player::new("p2", "OH1", Role::OH, Some(2)),
            Player::new("p3", "MB1", Role::MB, Some(3)),
            Player::new("p4", "OPP1", Role::OPP, Some(4)),
            Player::new("p5", "MB2", Role::MB, Some(5)),
            Player::new("p6", "OH2", Role::OH, Some(6)),
            Player::new("p7", "Setter2", Role::S, Some(7)),
            Player::new("p8", "DS1", Role::DS, Some(8)),
            Player::new("p9", "OPP2", Role::OPP, Some(9)),
        ];
        Self { players, rotation: Rotation::starting(TeamSystem::SixTwo) }
    }

    // ========================
    // Rotation Management
    // ========================

    /// Place a player at `pos`, swapping with the current occupant.
    ///
    /// The swap keeps every position held by exactly one player. Returns
    /// false (state unchanged) for an unknown player or unoccupied target.
    pub fn set_slot_position(&mut self, player_id: &str, pos: RingPosition) -> bool {
        let applied = self.rotation.swap_to(player_id, pos);
        if applied {
            log::debug!("Moved {} to position {}", player_id, pos);
        } else {
            log::warn!("Ignored placement of {} at position {}", player_id, pos);
        }
        applied
    }

    /// Advance the rotation one serve step.
    pub fn rotate(&mut self) {
        self.rotation = advance(&self.rotation);
        log::debug!("Rotated; serving index now {}", self.rotation.serving_index);
    }

    /// Switch between the 6-2 and 5-1 systems.
    pub fn toggle_mode(&mut self) {
        self.rotation.mode = self.rotation.mode.toggled();
        log::debug!("Team system now {}", self.rotation.mode.code());
    }

    // ========================
    // Roster Editing
    // ========================

    /// Get a player by id
    pub fn get_player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    fn get_player_mut(&mut self, player_id: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    pub fn set_player_name(&mut self, player_id: &str, name: &str) {
        if let Some(player) = self.get_player_mut(player_id) {
            player.name = name.to_string();
        }
    }

    pub fn set_player_role(&mut self, player_id: &str, role: Role) {
        if let Some(player) = self.get_player_mut(player_id) {
            player.role = role;
        }
    }

    pub fn set_player_jersey(&mut self, player_id: &str, jersey: Option<u8>) {
        if let Some(player) = self.get_player_mut(player_id) {
            player.jersey = jersey;
        }
    }
}

// ========================
// Global State Access Functions
// ========================

/// Get a read lock on the global team state
pub fn get_state() -> std::sync::RwLockReadGuard<'static, TeamState> {
    TEAM_STATE.read().expect("TEAM_STATE lock poisoned")
}

/// Get a write lock on the global team state
pub fn get_state_mut() -> std::sync::RwLockWriteGuard<'static, TeamState> {
    TEAM_STATE.write().expect("TEAM_STATE lock poisoned")
}

/// Reset the global state to the default lineup
pub fn reset_state() {
    *TEAM_STATE.write().expect("TEAM_STATE lock poisoned") = TeamState::new();
}

/// Replace the entire global state
pub fn set_state(new_state: TeamState) {
    *TEAM_STATE.write().expect("TEAM_STATE lock poisoned") = new_state;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_consistent() {
        let state = TeamState::new();
        assert_eq!(state.players.len(), 9);
        assert!(state.rotation.validate_roster(&state.players).is_ok());
    }

    #[test]
    fn test_set_slot_position_swaps_and_preserves_bijection() {
        let mut state = TeamState::new();
        assert!(state.set_slot_position("p1", RingPosition::P4));

        assert_eq!(state.rotation.position_of("p1"), Some(RingPosition::P4));
        assert_eq!(state.rotation.position_of("p4"), Some(RingPosition::P1));
        assert!(state.rotation.validate_roster(&state.players).is_ok());
    }

    #[test]
    fn test_set_slot_position_unknown_player_is_rejected() {
        let mut state = TeamState::new();
        let before = state.rotation.clone();

        assert!(!state.set_slot_position("nobody", RingPosition::P1));
        assert_eq!(state.rotation, before);
    }

    #[test]
    fn test_rotate_applies_one_advance() {
        let mut state = TeamState::new();
        state.rotate();

        assert_eq!(state.rotation.player_at(RingPosition::P1), Some("p9"));
        assert_eq!(state.rotation.serving_index, 8);
    }

    #[test]
    fn test_toggle_mode_round_trips() {
        let mut state = TeamState::new();
        assert_eq!(state.rotation.mode, TeamSystem::SixTwo);

        state.toggle_mode();
        assert_eq!(state.rotation.mode, TeamSystem::FiveOne);
        state.toggle_mode();
        assert_eq!(state.rotation.mode, TeamSystem::SixTwo);
    }

    #[test]
    fn test_roster_edits() {
        let mut state = TeamState::new();

        state.set_player_name("p2", "Ace");
        state.set_player_role("p2", Role::OPP);
        state.set_player_jersey("p2", Some(42));

        let p2 = state.get_player("p2").unwrap();
        assert_eq!(p2.name, "Ace");
        assert_eq!(p2.role, Role::OPP);
        assert_eq!(p2.jersey, Some(42));

        // Unknown ids are ignored.
        state.set_player_name("nobody", "Ghost");
        assert!(state.get_player("nobody").is_none());
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any sequence of placements keeps the bijection intact
            #[test]
            fn prop_swaps_preserve_bijection(
                moves in proptest::collection::vec((1u8..=9, 1u8..=9), 0..32)
            ) {
                let mut state = TeamState::new();
                for (player_n, pos_code) in moves {
                    let id = format!("p{}", player_n);
                    let pos = RingPosition::from_code(pos_code).unwrap();
                    state.set_slot_position(&id, pos);
                    prop_assert!(state.rotation.validate_roster(&state.players).is_ok());
                }
            }
        }
    }
}
