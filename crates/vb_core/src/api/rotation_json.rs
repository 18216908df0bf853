//! JSON API for rotation operations
//!
//! String-in/string-out endpoints consumed by the rendering/interaction
//! layer. Requests are schema-versioned; a rotation fed to `advance` must
//! pass the structural invariants, while the overlap and setter endpoints
//! degrade gracefully on partial states like the engine functions they wrap.

use crate::engine::{active_setter, advance, check_overlap, OverlapIssue};
use crate::error::{Result, RotationError};
use crate::models::{Player, Rotation};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
pub struct AdvanceRequest {
    pub schema_version: u8,
    pub rotation: Rotation,
}

#[derive(Debug, Serialize)]
pub struct AdvanceResponse {
    pub schema_version: u8,
    pub rotation: Rotation,
}

#[derive(Debug, Deserialize)]
pub struct OverlapRequest {
    pub schema_version: u8,
    pub rotation: Rotation,
}

#[derive(Debug, Serialize)]
pub struct OverlapResponse {
    pub schema_version: u8,
    pub ok: bool,
    pub issues: Vec<OverlapIssue>,
}

#[derive(Debug, Deserialize)]
pub struct ActiveSetterRequest {
    pub schema_version: u8,
    pub rotation: Rotation,
    pub players: Vec<Player>,
}

#[derive(Debug, Serialize)]
pub struct ActiveSetterResponse {
    pub schema_version: u8,
    pub setter_id: Option<String>,
}

fn check_schema_version(found: u8) -> Result<()> {
    if found != crate::SCHEMA_VERSION {
        warn!("Schema version mismatch: found {}", found);
        return Err(RotationError::SchemaVersionMismatch {
            found,
            expected: crate::SCHEMA_VERSION,
        });
    }
    Ok(())
}

/// Advance a rotation one serve step.
///
/// The embedded rotation must satisfy the structural invariants (9 slots,
/// position↔player bijection, serving index in range).
pub fn advance_rotation_json(request: &str) -> Result<String> {
    let req: AdvanceRequest = serde_json::from_str(request)?;
    check_schema_version(req.schema_version)?;
    if let Err(err) = req.rotation.validate() {
        warn!("Rejected advance request: {}", err);
        return Err(err);
    }

    let rotation = advance(&req.rotation);
    debug!("Advanced rotation; serving index now {}", rotation.serving_index);

    let response = AdvanceResponse { schema_version: crate::SCHEMA_VERSION, rotation };
    Ok(serde_json::to_string(&response)?)
}

/// Run the overlap legality check on a rotation.
///
/// Violations come back as data in `issues`, never as an error; partial
/// rotations are checked as far as they go.
pub fn check_overlap_json(request: &str) -> Result<String> {
    let req: OverlapRequest = serde_json::from_str(request)?;
    check_schema_version(req.schema_version)?;

    let report = check_overlap(&req.rotation);
    if !report.ok {
        debug!("{} issue(s) found", report.issues.len());
    }

    let response = OverlapResponse {
        schema_version: crate::SCHEMA_VERSION,
        ok: report.ok,
        issues: report.issues,
    };
    Ok(serde_json::to_string(&response)?)
}

/// Derive the active setter for a rotation and roster.
pub fn active_setter_json(request: &str) -> Result<String> {
    let req: ActiveSetterRequest = serde_json::from_str(request)?;
    check_schema_version(req.schema_version)?;

    let setter_id = active_setter(&req.rotation, &req.players);
    let response = ActiveSetterResponse { schema_version: crate::SCHEMA_VERSION, setter_id };
    Ok(serde_json::to_string(&response)?)
}
