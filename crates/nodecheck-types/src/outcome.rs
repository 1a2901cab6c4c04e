use crate::status::CheckStatus;
use serde::{Deserialize, Serialize};

/// Successful result of a single check invocation.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub message: String,
    pub status: CheckStatus,
}

impl CheckOutcome {
    pub fn ok<S: Into<String>>(message: S) -> Self {
        CheckOutcome {
            message: message.into(),
            status: CheckStatus::Ok,
        }
    }
}

/// Finished verdict of a check, including failures, ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub id: String,
    pub message: String,
    pub status: CheckStatus,
}

impl CheckReport {
    pub fn exit_code(&self) -> i32 {
        self.status.exit_code()
    }
}
