use crate::checker::Checker;
use crate::config::CheckConfig;
use crate::error::{Error, Result};
use crate::host::{DirectoryInspector, GroupDatabase, SystemGroups, SystemInspector};
use nodecheck_types::{CheckContext, CheckOutcome};
use std::path::{Path, PathBuf};

pub const GROUP_READ_BIT: u32 = 1 << 5;
pub const GROUP_EXEC_BIT: u32 = 1 << 3;

/// systemd-journal is the linux system group granted read access to the
/// journal by the distribution's tmpfiles policy.
pub const SYSTEMD_JOURNAL_GROUP: &str = "systemd-journal";

/// journald persists to /var/log/journal when that directory exists;
/// otherwise it writes to /run/log/journal nonpersistently.
pub const JOURNAL_PATH_CANDIDATES: [&str; 2] = ["/var/log/journal", "/run/log/journal"];

/// Required group permission bits, checked in order.
const REQUIRED_GROUP_BITS: [(&str, u32); 2] =
    [("group r--", GROUP_READ_BIT), ("group --x", GROUP_EXEC_BIT)];

/// Expected owning group, by symbolic name or raw numeric id.
///
/// A name must be resolved through the host identity directory; a raw id is
/// used as-is. Resolution yields exactly one gid or an error, never a
/// substituted default.
#[derive(Debug, Clone)]
pub enum GroupReference {
    Name(String),
    Id(u32),
}

impl GroupReference {
    pub fn resolve(&self, groups: &dyn GroupDatabase) -> Result<u32> {
        match self {
            GroupReference::Name(name) => groups.group_id(name),
            GroupReference::Id(gid) => Ok(*gid),
        }
    }
}

/// Validates that the journal directory is readable by the journal group.
pub struct JournaldCheck {
    path: PathBuf,
    group: GroupReference,
    required_bits: Vec<(&'static str, u32)>,
    inspector: Box<dyn DirectoryInspector>,
    groups: Box<dyn GroupDatabase>,
}

impl JournaldCheck {
    pub fn new(path: PathBuf) -> Self {
        Self::with_capabilities(
            path,
            GroupReference::Name(SYSTEMD_JOURNAL_GROUP.to_string()),
            Box::new(SystemInspector),
            Box::new(SystemGroups),
        )
    }

    /// Construct with explicit host capabilities, for embedders and tests.
    pub fn with_capabilities(
        path: PathBuf,
        group: GroupReference,
        inspector: Box<dyn DirectoryInspector>,
        groups: Box<dyn GroupDatabase>,
    ) -> Self {
        JournaldCheck {
            path,
            group,
            required_bits: REQUIRED_GROUP_BITS.to_vec(),
            inspector,
            groups,
        }
    }
}

impl Checker for JournaldCheck {
    fn id(&self) -> &'static str {
        "systemd journal check"
    }

    fn run(&self, _ctx: &CheckContext, config: &CheckConfig) -> Result<CheckOutcome> {
        if self.path.as_os_str().is_empty() {
            return Err(Error::Config("journald path is not set".to_string()));
        }

        let gid = self.group.resolve(self.groups.as_ref())?;

        check_directory(
            &self.path,
            gid,
            &self.required_bits,
            self.inspector.as_ref(),
            config.verbose,
        )?;

        Ok(CheckOutcome::ok(format!(
            "directory {} has the group owner `{}` and group permissions r-x",
            self.path.display(),
            SYSTEMD_JOURNAL_GROUP
        )))
    }
}

fn check_directory(
    path: &Path,
    expected_gid: u32,
    required_bits: &[(&'static str, u32)],
    inspector: &dyn DirectoryInspector,
    verbose: bool,
) -> Result<()> {
    let status = inspector.inspect(path)?;

    if verbose {
        eprintln!("directory {} mode bits: {:o}", path.display(), status.mode);
    }

    for (label, mask) in required_bits {
        if status.mode & mask == 0 {
            return Err(Error::MissingPermissionBit {
                path: path.to_path_buf(),
                label: (*label).to_string(),
            });
        }
    }

    if status.gid != expected_gid {
        return Err(Error::WrongGroupOwner {
            path: path.to_path_buf(),
            expected_gid,
        });
    }

    Ok(())
}

/// First existing candidate directory, used when no path was configured.
pub fn default_journal_path() -> Result<PathBuf> {
    first_existing(&JOURNAL_PATH_CANDIDATES.map(PathBuf::from))
}

fn first_existing(candidates: &[PathBuf]) -> Result<PathBuf> {
    for candidate in candidates {
        if candidate.exists() {
            return Ok(candidate.clone());
        }
    }

    Err(Error::NoJournalPath(candidates.to_vec()))
}
