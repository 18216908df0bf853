use serde::{Deserialize, Serialize};

/// Player data for the rotation engine.
///
/// Players are created once at roster initialization and referenced from
/// rotation slots by `id`. Roster edits (name, role, jersey) go through the
/// state module; a player is never removed during a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub role: Role,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub jersey: Option<u8>,
}

impl Player {
    pub fn new(id: &str, name: &str, role: Role, jersey: Option<u8>) -> Self {
        Self { id: id.to_string(), name: name.to_string(), role, jersey }
    }
}

/// Volleyball role, using the standard shorthand codes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    /// Setter
    S,
    /// Outside Hitter
    OH,
    /// Opposite
    OPP,
    /// Middle Blocker
    MB,
    /// Libero
    L,
    /// Defensive Specialist
    DS,
}

impl Role {
    /// Full display name for the shorthand code.
    pub fn label(&self) -> &'static str {
        match self {
            Role::S => "Setter",
            Role::OH => "Outside Hitter",
            Role::OPP => "Opposite",
            Role::MB => "Middle Blocker",
            Role::L => "Libero",
            Role::DS => "Defensive Specialist",
        }
    }

    pub fn is_setter(&self) -> bool {
        matches!(self, Role::S)
    }
}
