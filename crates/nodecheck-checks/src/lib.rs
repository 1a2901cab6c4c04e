//! Diagnostic checks against host state, behind a small polymorphic
//! `Checker` capability so the CLI can run any of them uniformly.

pub mod checker;
pub mod config;
pub mod error;
pub mod host;
pub mod journald;
pub mod runner;

pub use checker::Checker;
pub use config::{CheckConfig, JournaldConfig};
pub use error::{Error, Result};
pub use host::{DirectoryInspector, DirectoryStatus, GroupDatabase, SystemGroups, SystemInspector};
pub use journald::{
    GROUP_EXEC_BIT, GROUP_READ_BIT, GroupReference, JOURNAL_PATH_CANDIDATES, JournaldCheck,
    SYSTEMD_JOURNAL_GROUP, default_journal_path,
};
pub use runner::run_check;
