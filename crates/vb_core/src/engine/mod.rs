// Pure rotation-domain operations: grid geometry, serve advance,
// overlap legality, active-setter derivation.

pub mod court;
pub mod lineup;
pub mod overlap;
pub mod rotate;

pub use court::{clamp_grid, grid_col, grid_row, grid_to_position, position_to_grid, GridCell};
pub use lineup::active_setter;
pub use overlap::{check_overlap, IssueKind, OverlapIssue, OverlapReport};
pub use rotate::advance;
