use crate::error::{Error, Result};
use std::path::Path;

/// Permission mode bits and owning group of a filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryStatus {
    /// Low-order permission bits, independent of file type.
    pub mode: u32,
    /// Numeric id of the owning group.
    pub gid: u32,
}

/// Read-only metadata query against the host filesystem.
///
/// Non-POSIX targets cannot expose an owning gid; their implementation
/// reports an unsupported-platform error instead of panicking, which the
/// check surfaces as a regular inspection failure.
pub trait DirectoryInspector {
    fn inspect(&self, path: &Path) -> Result<DirectoryStatus>;
}

/// Read-only group lookup against the host identity directory.
pub trait GroupDatabase {
    fn group_id(&self, name: &str) -> Result<u32>;
}

pub struct SystemInspector;

#[cfg(unix)]
impl DirectoryInspector for SystemInspector {
    fn inspect(&self, path: &Path) -> Result<DirectoryStatus> {
        use std::os::unix::fs::MetadataExt;

        // std::fs errors do not carry the path; keep it for the operator.
        let metadata = std::fs::metadata(path).map_err(|err| {
            std::io::Error::new(err.kind(), format!("{}: {}", path.display(), err))
        })?;
        Ok(DirectoryStatus {
            mode: metadata.mode() & 0o777,
            gid: metadata.gid(),
        })
    }
}

#[cfg(not(unix))]
impl DirectoryInspector for SystemInspector {
    fn inspect(&self, _path: &Path) -> Result<DirectoryStatus> {
        Err(Error::UnsupportedPlatform(
            "directory group ownership requires unix file metadata",
        ))
    }
}

pub struct SystemGroups;

#[cfg(unix)]
impl GroupDatabase for SystemGroups {
    fn group_id(&self, name: &str) -> Result<u32> {
        use std::ffi::CString;

        // getgrnam_r wants a caller-supplied buffer for the string fields;
        // grow it on ERANGE up to a sane bound.
        const INITIAL_BUF_LEN: usize = 1024;
        const MAX_BUF_LEN: usize = 1 << 20;

        let c_name =
            CString::new(name).map_err(|_| Error::GroupNotFound(name.to_string()))?;

        let mut buf_len = INITIAL_BUF_LEN;
        loop {
            let mut buf: Vec<libc::c_char> = vec![0; buf_len];
            let mut group: libc::group = unsafe { std::mem::zeroed() };
            let mut found: *mut libc::group = std::ptr::null_mut();

            let rc = unsafe {
                libc::getgrnam_r(
                    c_name.as_ptr(),
                    &mut group,
                    buf.as_mut_ptr(),
                    buf.len(),
                    &mut found,
                )
            };

            if rc == libc::ERANGE && buf_len < MAX_BUF_LEN {
                buf_len *= 2;
                continue;
            }
            if rc != 0 {
                return Err(Error::GroupLookup {
                    name: name.to_string(),
                    source: std::io::Error::from_raw_os_error(rc),
                });
            }
            if found.is_null() {
                return Err(Error::GroupNotFound(name.to_string()));
            }
            return Ok(group.gr_gid);
        }
    }
}

#[cfg(not(unix))]
impl GroupDatabase for SystemGroups {
    fn group_id(&self, _name: &str) -> Result<u32> {
        Err(Error::UnsupportedPlatform(
            "group lookup requires the unix identity directory",
        ))
    }
}
