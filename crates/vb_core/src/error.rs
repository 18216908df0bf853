use thiserror::Error;

/// Structural failures of a rotation or of the JSON boundary.
///
/// Overlap findings are not errors; they are ordinary `OverlapReport` data.
#[derive(Error, Debug)]
pub enum RotationError {
    #[error("Rotation must have exactly 9 slots, found {found}")]
    WrongSlotCount { found: usize },

    #[error("Position {pos} is assigned more than once")]
    DuplicatePosition { pos: u8 },

    #[error("Position {pos} has no slot")]
    MissingPosition { pos: u8 },

    #[error("Player {id} occupies more than one slot")]
    DuplicatePlayer { id: String },

    #[error("Player {id} is not in the roster")]
    UnknownPlayer { id: String },

    #[error("Serving index out of range: {found}")]
    ServingIndexOutOfRange { found: usize },

    #[error("Schema version mismatch: found {found}, expected {expected}")]
    SchemaVersionMismatch { found: u8, expected: u8 },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for RotationError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            RotationError::Deserialization(err.to_string())
        } else {
            RotationError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, RotationError>;
