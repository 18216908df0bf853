//! Serve-moment overlap legality check
//!
//! Volleyball overlap rules constrain the lineup at the moment of serve:
//! each back-row player must be deeper than their paired front-row player,
//! and each row must keep its fixed left-to-right order. Manual placement
//! can break both; this check reports every violation at once so the caller
//! can surface and highlight all of them.
//!
//! Each occupant is measured at their rotational home cell (the grid cell of
//! the zone their slot would hold had no manual swap occurred, per the
//! current serving order), anchored on the position they currently hold.
//! A lineup reached purely by serve rotation therefore always checks clean.

use crate::engine::court::{grid_col, grid_row, position_to_grid, GridCell};
use crate::models::{RingPosition, Rotation, RING_SIZE};
use serde::{Deserialize, Serialize};

/// Row-depth pairings: each back-row zone against its front-row counterpart.
const ROW_PAIRS: [(RingPosition, RingPosition); 3] = [
    (RingPosition::P1, RingPosition::P2),
    (RingPosition::P6, RingPosition::P3),
    (RingPosition::P5, RingPosition::P4),
];

/// Required left-to-right order within the front row.
const FRONT_ORDER: [RingPosition; 3] = [RingPosition::P4, RingPosition::P3, RingPosition::P2];

/// Required left-to-right order within the back row.
const BACK_ORDER: [RingPosition; 3] = [RingPosition::P5, RingPosition::P6, RingPosition::P1];

/// Which overlap rule a violation breaks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum IssueKind {
    Row,
    LeftRight,
}

/// A single overlap violation between two players.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverlapIssue {
    /// Offending player at the back/left anchor of the pair.
    pub a: String,
    /// Offending player at the front/right anchor of the pair.
    pub b: String,
    pub kind: IssueKind,
    pub message: String,
}

/// Outcome of an overlap check. `ok` iff no issues were found.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverlapReport {
    pub ok: bool,
    pub issues: Vec<OverlapIssue>,
}

/// Occupant of an on-court position: player id plus measured cell.
type Occupant<'a> = (&'a str, GridCell);

/// Check the lineup against the overlap rules.
///
/// All violations are collected; nothing short-circuits. Off-court slots are
/// never checked, and any pair with an unoccupied position is skipped, so
/// partial or malformed rotations degrade to a smaller check instead of
/// failing.
pub fn check_overlap(r: &Rotation) -> OverlapReport {
    let mut occupants: [Option<Occupant<'_>>; RING_SIZE] = [None; RING_SIZE];
    for (idx, slot) in r.slots.iter().enumerate() {
        if let Some(home) = r.home_position(idx) {
            occupants[(slot.pos.code() - 1) as usize] =
                Some((slot.player_id.as_str(), position_to_grid(home)));
        }
    }
    let occupant = |pos: RingPosition| occupants[(pos.code() - 1) as usize];

    let mut issues = Vec::new();

    for (back, front) in ROW_PAIRS {
        let (Some((back_id, back_cell)), Some((front_id, front_cell))) =
            (occupant(back), occupant(front))
        else {
            continue;
        };
        if grid_row(back_cell) <= grid_row(front_cell) {
            issues.push(OverlapIssue {
                a: back_id.to_string(),
                b: front_id.to_string(),
                kind: IssueKind::Row,
                message: format!("Back-row {} must be behind front-row {}", back, front),
            });
        }
    }

    for order in [FRONT_ORDER, BACK_ORDER] {
        for pair in order.windows(2) {
            let (left, right) = (pair[0], pair[1]);
            let (Some((left_id, left_cell)), Some((right_id, right_cell))) =
                (occupant(left), occupant(right))
            else {
                continue;
            };
            if grid_col(left_cell) >= grid_col(right_cell) {
                issues.push(OverlapIssue {
                    a: left_id.to_string(),
                    b: right_id.to_string(),
                    kind: IssueKind::LeftRight,
                    message: format!("{} must stay left of {}", left, right),
                });
            }
        }
    }

    OverlapReport { ok: issues.is_empty(), issues }
}
