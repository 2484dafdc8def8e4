//! Turns backend failures into the text shown in place of the expected reply.

use std::fmt;

use crate::BackendError;

/// What the client was doing when a backend call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureAction {
    ProcessingVideo,
    GettingResponse,
}

impl fmt::Display for FailureAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureAction::ProcessingVideo => f.write_str("processing video"),
            FailureAction::GettingResponse => f.write_str("getting response"),
        }
    }
}

/// `"Error <action>: <cause>. Please try again."`
///
/// A failure that carries no description reads as `Unknown error`.
pub fn describe_failure(action: FailureAction, error: &BackendError) -> String {
    let cause = error.to_string();
    let cause = match cause.trim() {
        "" => "Unknown error",
        trimmed => trimmed,
    };
    format!("Error {action}: {cause}. Please try again.")
}
