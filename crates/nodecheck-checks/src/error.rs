use std::fmt;
use std::path::{Path, PathBuf};

/// Result type for nodecheck-checks operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while running a check
#[derive(Debug)]
pub enum Error {
    /// IO operation failed (target missing or unreadable)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Group name is not present in the host identity directory
    GroupNotFound(String),

    /// Identity directory lookup itself failed
    GroupLookup {
        name: String,
        source: std::io::Error,
    },

    /// Host metadata is not available in the expected shape on this platform
    UnsupportedPlatform(&'static str),

    /// A required permission bit is not set on the target
    MissingPermissionBit { path: PathBuf, label: String },

    /// The target is not owned by the expected group
    WrongGroupOwner { path: PathBuf, expected_gid: u32 },

    /// None of the candidate journal directories exist on this host
    NoJournalPath(Vec<PathBuf>),
}

/// Operator-facing corrective command appended to policy violations.
fn remediation_hint(path: &Path) -> String {
    format!(
        "Try to run: systemd-tmpfiles --create --prefix {}",
        path.display()
    )
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "{}", err),
            Error::Config(msg) => write!(f, "{}", msg),
            Error::GroupNotFound(name) => write!(f, "unknown group {}", name),
            Error::GroupLookup { name, source } => {
                write!(f, "looking up group {}: {}", name, source)
            }
            Error::UnsupportedPlatform(what) => {
                write!(f, "unsupported platform: {}", what)
            }
            Error::MissingPermissionBit { path, label } => write!(
                f,
                "directory {} has wrong permissions: {} bit must be set\n{}",
                path.display(),
                label,
                remediation_hint(path)
            ),
            Error::WrongGroupOwner { path, expected_gid } => write!(
                f,
                "directory {} must be in group with gid {}\n{}",
                path.display(),
                expected_gid,
                remediation_hint(path)
            ),
            Error::NoJournalPath(candidates) => {
                let attempted: Vec<String> =
                    candidates.iter().map(|p| p.display().to_string()).collect();
                write!(f, "journal paths {} do not exist", attempted.join(", "))
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::GroupLookup { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
