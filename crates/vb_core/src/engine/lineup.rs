//! Active setter derivation
//!
//! In a 6-2 system the back-row setter runs the offense (a front-row setter
//! would hit instead); in a 5-1 the single designated setter runs it from
//! anywhere.

use crate::models::{Player, Rotation, TeamSystem};

/// Roster id of the designated primary setter in a 5-1 lineup.
const PRIMARY_SETTER_ID: &str = "p1";

/// Derive which setter currently runs the offense.
///
/// Returns `None` only when the roster has no setters at all. When the team
/// system's preferred pick is unavailable (no back-row setter in a 6-2, no
/// primary setter in a 5-1), falls back to the first setter in roster order
/// rather than failing.
pub fn active_setter(rotation: &Rotation, players: &[Player]) -> Option<String> {
    let setters: Vec<&str> =
        players.iter().filter(|p| p.role.is_setter()).map(|p| p.id.as_str()).collect();

    let pick = match rotation.mode {
        TeamSystem::FiveOne => {
            if setters.contains(&PRIMARY_SETTER_ID) {
                Some(PRIMARY_SETTER_ID)
            } else {
                setters.first().copied()
            }
        }
        TeamSystem::SixTwo => rotation
            .slots
            .iter()
            .find(|s| s.pos.is_back_row() && setters.contains(&s.player_id.as_str()))
            .map(|s| s.player_id.as_str())
            .or_else(|| setters.first().copied()),
    };

    pick.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rotate::advance;
    use crate::models::{RingPosition, Role};

    fn roster() -> Vec<Player> {
        vec![
            Player::new("p1", "Setter1", Role::S, Some(1)),
            Player::new("p2", "OH1", Role::OH, Some(2)),
            Player::new("p3", "MB1", Role::MB, Some(3)),
            Player::new("p4", "OPP1", Role::OPP, Some(4)),
            Player::new("p5", "MB2", Role::MB, Some(5)),
            Player::new("p6", "OH2", Role::OH, Some(6)),
            Player::new("p7", "Setter2", Role::S, Some(7)),
            Player::new("p8", "DS1", Role::DS, Some(8)),
            Player::new("p9", "OPP2", Role::OPP, Some(9)),
        ]
    }

    #[test]
    fn test_six_two_prefers_back_row_setter() {
        let mut r = Rotation::starting(TeamSystem::SixTwo);
        // Bring the second setter on court at position 4: p1 back row, p7 front row.
        r.swap_to("p7", RingPosition::P4);

        assert_eq!(active_setter(&r, &roster()), Some("p1".to_string()));
    }

    #[test]
    fn test_six_two_switches_setter_after_advance() {
        let mut r = Rotation::starting(TeamSystem::SixTwo);
        r.swap_to("p7", RingPosition::P4);
        let r = advance(&r);

        // p1 rotated into the front row (2), p7 into the back row (5).
        assert_eq!(r.position_of("p1"), Some(RingPosition::P2));
        assert_eq!(r.position_of("p7"), Some(RingPosition::P5));
        assert_eq!(active_setter(&r, &roster()), Some("p7".to_string()));
    }

    #[test]
    fn test_six_two_falls_back_to_first_setter_in_roster_order() {
        let mut r = Rotation::starting(TeamSystem::SixTwo);
        // Park both setters off court.
        r.swap_to("p1", RingPosition::P8);
        r.swap_to("p7", RingPosition::P9);

        assert_eq!(active_setter(&r, &roster()), Some("p1".to_string()));
    }

    #[test]
    fn test_five_one_always_picks_primary_setter() {
        let mut r = Rotation::starting(TeamSystem::FiveOne);
        assert_eq!(active_setter(&r, &roster()), Some("p1".to_string()));

        r.swap_to("p1", RingPosition::P9);
        assert_eq!(active_setter(&r, &roster()), Some("p1".to_string()));

        let r = advance(&r);
        assert_eq!(active_setter(&r, &roster()), Some("p1".to_string()));
    }

    #[test]
    fn test_five_one_without_primary_uses_first_setter_in_roster_order() {
        let mut players = roster();
        players[0].role = Role::DS; // p1 no longer a setter

        let r = Rotation::starting(TeamSystem::FiveOne);
        assert_eq!(active_setter(&r, &players), Some("p7".to_string()));
    }

    #[test]
    fn test_no_setters_yields_none() {
        let mut players = roster();
        players[0].role = Role::DS;
        players[6].role = Role::OH;

        let r = Rotation::starting(TeamSystem::SixTwo);
        assert_eq!(active_setter(&r, &players), None);
        let r = Rotation::starting(TeamSystem::FiveOne);
        assert_eq!(active_setter(&r, &players), None);
    }
}
