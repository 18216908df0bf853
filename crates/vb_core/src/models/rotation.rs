use crate::error::{Result, RotationError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Number of slots in the rotation ring (6 on-court zones + 3 off-court).
pub const RING_SIZE: usize = 9;

/// One of the 9 cyclic ring positions.
///
/// `P1`..`P6` are the on-court zones in the standard serving-order numbering
/// (clockwise from right-back); `P7`..`P9` are the off-court holding slots.
/// Serialized as the bare zone number 1-9.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(into = "u8", try_from = "u8")]
pub enum RingPosition {
    P1,
    P2,
    P3,
    P4,
    P5,
    P6,
    P7,
    P8,
    P9,
}

impl RingPosition {
    /// Decode from the numeric zone code (1-9).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(RingPosition::P1),
            2 => Some(RingPosition::P2),
            3 => Some(RingPosition::P3),
            4 => Some(RingPosition::P4),
            5 => Some(RingPosition::P5),
            6 => Some(RingPosition::P6),
            7 => Some(RingPosition::P7),
            8 => Some(RingPosition::P8),
            9 => Some(RingPosition::P9),
            _ => None,
        }
    }

    /// Numeric zone code (1-9).
    pub fn code(&self) -> u8 {
        *self as u8 + 1
    }

    /// Next position in the fixed ring order 1→2→…→9→1.
    pub fn successor(&self) -> Self {
        match RingPosition::from_code(self.code() % RING_SIZE as u8 + 1) {
            Some(next) => next,
            None => *self,
        }
    }

    /// Front-row on-court zones (2, 3, 4).
    pub fn is_front_row(&self) -> bool {
        matches!(self, RingPosition::P2 | RingPosition::P3 | RingPosition::P4)
    }

    /// Back-row on-court zones (1, 5, 6).
    pub fn is_back_row(&self) -> bool {
        matches!(self, RingPosition::P1 | RingPosition::P5 | RingPosition::P6)
    }

    pub fn is_on_court(&self) -> bool {
        self.is_front_row() || self.is_back_row()
    }

    /// Off-court holding slots (7, 8, 9).
    pub fn is_off_court(&self) -> bool {
        matches!(self, RingPosition::P7 | RingPosition::P8 | RingPosition::P9)
    }
}

impl fmt::Display for RingPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<RingPosition> for u8 {
    fn from(pos: RingPosition) -> u8 {
        pos.code()
    }
}

impl TryFrom<u8> for RingPosition {
    type Error = String;

    fn try_from(code: u8) -> std::result::Result<Self, Self::Error> {
        RingPosition::from_code(code).ok_or_else(|| format!("invalid ring position: {}", code))
    }
}

/// Team system: how many setters rotate through the lineup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TeamSystem {
    /// Two setters; the back-row one runs the offense.
    #[serde(rename = "6-2")]
    SixTwo,
    /// One permanent setter regardless of row.
    #[serde(rename = "5-1")]
    FiveOne,
}

impl TeamSystem {
    /// Canonical system code string (e.g., "6-2").
    pub fn code(&self) -> &'static str {
        match self {
            TeamSystem::SixTwo => "6-2",
            TeamSystem::FiveOne => "5-1",
        }
    }

    /// The other system (6-2 ↔ 5-1).
    pub fn toggled(&self) -> Self {
        match self {
            TeamSystem::SixTwo => TeamSystem::FiveOne,
            TeamSystem::FiveOne => TeamSystem::SixTwo,
        }
    }
}

/// Assignment of one ring position to one player.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub pos: RingPosition,
    pub player_id: String,
}

/// The full 9-player rotation state.
///
/// The slot vec order is the fixed roster ring order and never reorders;
/// operations only rewrite `pos` fields. `serving_index` is the index into
/// `slots` of the slot currently serving.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Rotation {
    pub slots: Vec<Slot>,
    pub serving_index: usize,
    pub mode: TeamSystem,
}

impl Rotation {
    /// Canonical starting arrangement: player `p{n}` at position `n`,
    /// slot 0 serving.
    pub fn starting(mode: TeamSystem) -> Self {
        let slots = (1..=RING_SIZE as u8)
            .map(|n| Slot {
                pos: RingPosition::from_code(n).unwrap_or(RingPosition::P1),
                player_id: format!("p{}", n),
            })
            .collect();
        Self { slots, serving_index: 0, mode }
    }

    /// Id of the player currently holding `pos`, if any.
    pub fn player_at(&self, pos: RingPosition) -> Option<&str> {
        self.slots.iter().find(|s| s.pos == pos).map(|s| s.player_id.as_str())
    }

    /// Current position of `player_id`, if present.
    pub fn position_of(&self, player_id: &str) -> Option<RingPosition> {
        self.slots.iter().find(|s| s.player_id == player_id).map(|s| s.pos)
    }

    /// How many advances separate this state from the canonical serving
    /// order (serving index 0).
    pub fn rotations_applied(&self) -> usize {
        (RING_SIZE - self.serving_index % RING_SIZE) % RING_SIZE
    }

    /// The position the slot at `slot_index` would hold had no manual swap
    /// been applied, given the current serving order.
    pub fn home_position(&self, slot_index: usize) -> Option<RingPosition> {
        let code = (slot_index + self.rotations_applied()) % RING_SIZE + 1;
        RingPosition::from_code(code as u8)
    }

    /// Move `player_id` to `new_pos`, swapping with the current occupant.
    ///
    /// The swap (never an overwrite) keeps the position↔player bijection
    /// intact. Returns false and leaves the rotation unchanged when the
    /// player or the target position is not present.
    pub fn swap_to(&mut self, player_id: &str, new_pos: RingPosition) -> bool {
        let me = match self.slots.iter().position(|s| s.player_id == player_id) {
            Some(i) => i,
            None => return false,
        };
        let target = match self.slots.iter().position(|s| s.pos == new_pos) {
            Some(i) => i,
            None => return false,
        };

        let old_pos = self.slots[me].pos;
        self.slots[me].pos = new_pos;
        if target != me {
            self.slots[target].pos = old_pos;
        }
        true
    }

    /// Check the structural invariants: exactly 9 slots, every position
    /// assigned exactly once, every player id unique, serving index in range.
    pub fn validate(&self) -> Result<()> {
        if self.slots.len() != RING_SIZE {
            return Err(RotationError::WrongSlotCount { found: self.slots.len() });
        }

        let mut seen = [false; RING_SIZE];
        for slot in &self.slots {
            let idx = (slot.pos.code() - 1) as usize;
            if seen[idx] {
                return Err(RotationError::DuplicatePosition { pos: slot.pos.code() });
            }
            seen[idx] = true;
        }
        for (idx, &taken) in seen.iter().enumerate() {
            if !taken {
                return Err(RotationError::MissingPosition { pos: idx as u8 + 1 });
            }
        }

        let mut ids = HashSet::new();
        for slot in &self.slots {
            if !ids.insert(slot.player_id.as_str()) {
                return Err(RotationError::DuplicatePlayer { id: slot.player_id.clone() });
            }
        }

        if self.serving_index >= RING_SIZE {
            return Err(RotationError::ServingIndexOutOfRange { found: self.serving_index });
        }

        Ok(())
    }

    /// `validate`, plus every referenced player id must exist in `players`.
    pub fn validate_roster(&self, players: &[super::Player]) -> Result<()> {
        self.validate()?;
        for slot in &self.slots {
            if !players.iter().any(|p| p.id == slot.player_id) {
                return Err(RotationError::UnknownPlayer { id: slot.player_id.clone() });
            }
        }
        Ok(())
    }
}
