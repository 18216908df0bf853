//! Rotation advance
//!
//! Shifts all nine occupants one ring step on a serve-rotation event.

use crate::models::{Rotation, Slot, RING_SIZE};

/// Advance the rotation by one serve step.
///
/// Every slot's position becomes its ring successor (1→2, …, 9→1), so the
/// player who held position 6 rotates into the serving zone. The serving
/// index steps back one slot modulo 9, tracking which ring slot now serves
/// through the relabeling. Mode is carried through unchanged.
///
/// Pure: the input rotation is untouched. Nine applications restore the
/// original assignment (the ring has order 9).
pub fn advance(r: &Rotation) -> Rotation {
    let slots = r
        .slots
        .iter()
        .map(|s| Slot { pos: s.pos.successor(), player_id: s.player_id.clone() })
        .collect();

    Rotation {
        slots,
        serving_index: (r.serving_index + RING_SIZE - 1) % RING_SIZE,
        mode: r.mode,
    }
}
