use crate::config::CheckConfig;
use crate::error::Result;
use nodecheck_types::{CheckContext, CheckOutcome};

/// A single diagnostic check the framework can run.
///
/// Implementations are stateless between runs beyond their construction-time
/// configuration. Any error returned from `run` is reported to the harness
/// with the "unknown" status; there is no separate failed/error split.
pub trait Checker {
    /// Stable, human-readable identifier used in reports.
    fn id(&self) -> &'static str;

    fn run(&self, ctx: &CheckContext, config: &CheckConfig) -> Result<CheckOutcome>;
}
