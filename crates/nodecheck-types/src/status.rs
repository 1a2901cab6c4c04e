use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome code shared by every check in the framework.
///
/// Checks only ever report one of these two values: a healthy verdict, or
/// "unknown" for everything else (configuration errors, inspection errors,
/// and policy violations alike). The distinction lives in the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Ok,
    Unknown,
}

impl CheckStatus {
    /// Process exit code reported to the surrounding harness.
    pub fn exit_code(self) -> i32 {
        match self {
            CheckStatus::Ok => 0,
            CheckStatus::Unknown => 3,
        }
    }

    pub fn is_ok(self) -> bool {
        matches!(self, CheckStatus::Ok)
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Ok => write!(f, "OK"),
            CheckStatus::Unknown => write!(f, "UNKNOWN"),
        }
    }
}
