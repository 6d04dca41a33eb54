use crate::LiftID;

/// Violation of the contract between a lift's configuration and the data passed in.
///
/// These indicate a caller bug rather than a data condition. Missing history is
/// never reported through this type.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProgressionError {
    #[error("linear progression of lift {lift_id} received a {kind} set result")]
    UnexpectedSetResult { lift_id: LiftID, kind: &'static str },
    #[error("{scheme} does not support custom lift {lift_id}")]
    UnsupportedLift {
        lift_id: LiftID,
        scheme: &'static str,
    },
    #[error("lift {lift_id} has no custom set at position {position}")]
    MissingCustomSet { lift_id: LiftID, position: u32 },
}
