pub mod rotation_json;

pub use rotation_json::{
    active_setter_json, advance_rotation_json, check_overlap_json, ActiveSetterRequest,
    ActiveSetterResponse, AdvanceRequest, AdvanceResponse, OverlapRequest, OverlapResponse,
};
