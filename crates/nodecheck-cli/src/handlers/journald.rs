use crate::output::check_view;
use crate::types::OutputFormat;
use anyhow::Result;
use nodecheck_checks::{CheckConfig, JournaldCheck, run_check};
use nodecheck_types::{CheckContext, CheckStatus};
use std::path::PathBuf;

pub fn handle(
    ctx: &CheckContext,
    config: &CheckConfig,
    path: PathBuf,
    format: OutputFormat,
) -> Result<CheckStatus> {
    let check = JournaldCheck::new(path);
    let report = run_check(ctx, config, &check);

    check_view::print_report(&report, format)?;

    Ok(report.status)
}
