use crate::types::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nodecheck")]
#[command(about = "Diagnostic health checks for cluster nodes", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "/etc/nodecheck/config.toml", global = true)]
    pub config: PathBuf,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Journald {
        #[arg(
            short,
            long,
            help = "Path to the systemd journal log directory (default: first existing of /var/log/journal, /run/log/journal)"
        )]
        path: Option<PathBuf>,
    },
}
