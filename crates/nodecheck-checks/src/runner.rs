use crate::checker::Checker;
use crate::config::CheckConfig;
use nodecheck_types::{CheckContext, CheckReport, CheckStatus};

/// Run a single check and fold its result into a report.
///
/// Every error maps to the "unknown" status uniformly; infrastructure and
/// policy failures differ only in message text. The cancellation flag is
/// honored between checks, not inside one.
pub fn run_check(ctx: &CheckContext, config: &CheckConfig, check: &dyn Checker) -> CheckReport {
    if ctx.is_cancelled() {
        return CheckReport {
            id: check.id().to_string(),
            message: "check cancelled before it ran".to_string(),
            status: CheckStatus::Unknown,
        };
    }

    match check.run(ctx, config) {
        Ok(outcome) => CheckReport {
            id: check.id().to_string(),
            message: outcome.message,
            status: outcome.status,
        },
        Err(err) => CheckReport {
            id: check.id().to_string(),
            message: err.to_string(),
            status: CheckStatus::Unknown,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use nodecheck_types::CheckOutcome;
    use std::sync::atomic::Ordering;

    struct AlwaysHealthy;

    impl Checker for AlwaysHealthy {
        fn id(&self) -> &'static str {
            "always healthy"
        }

        fn run(&self, _ctx: &CheckContext, _config: &CheckConfig) -> Result<CheckOutcome> {
            Ok(CheckOutcome::ok("everything in order"))
        }
    }

    struct AlwaysBroken;

    impl Checker for AlwaysBroken {
        fn id(&self) -> &'static str {
            "always broken"
        }

        fn run(&self, _ctx: &CheckContext, _config: &CheckConfig) -> Result<CheckOutcome> {
            Err(Error::Config("missing something important".to_string()))
        }
    }

    #[test]
    fn test_success_report_keeps_message_and_status() {
        let report = run_check(&CheckContext::new(), &CheckConfig::default(), &AlwaysHealthy);
        assert_eq!(report.id, "always healthy");
        assert_eq!(report.message, "everything in order");
        assert_eq!(report.status, CheckStatus::Ok);
    }

    #[test]
    fn test_error_maps_to_unknown_with_cause_preserved() {
        let report = run_check(&CheckContext::new(), &CheckConfig::default(), &AlwaysBroken);
        assert_eq!(report.status, CheckStatus::Unknown);
        assert_eq!(report.message, "missing something important");
        assert_eq!(report.exit_code(), 3);
    }

    #[test]
    fn test_cancelled_context_skips_the_check() {
        let ctx = CheckContext::new();
        ctx.cancel_flag().store(true, Ordering::SeqCst);

        let report = run_check(&ctx, &CheckConfig::default(), &AlwaysHealthy);
        assert_eq!(report.status, CheckStatus::Unknown);
        assert!(report.message.contains("cancelled"));
    }
}
