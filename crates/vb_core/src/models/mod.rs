pub mod player;
pub mod rotation;

pub use player::{Player, Role};
pub use rotation::{RingPosition, Rotation, Slot, TeamSystem, RING_SIZE};
