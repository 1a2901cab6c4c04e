use crate::types::OutputFormat;
use anyhow::Result;
use nodecheck_types::{CheckReport, CheckStatus};
use owo_colors::OwoColorize;

pub fn print_report(report: &CheckReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Plain => match report.status {
            CheckStatus::Ok => {
                println!("{} {}", "✓".green(), report.id.bold());
                println!("  {}", report.message);
                println!("  status: {}", report.status.to_string().green());
            }
            CheckStatus::Unknown => {
                println!("{} {}", "✗".red(), report.id.bold());
                for line in report.message.lines() {
                    println!("  {}", line);
                }
                println!("  status: {}", report.status.to_string().yellow());
            }
        },
    }

    Ok(())
}
