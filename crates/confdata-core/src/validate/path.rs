//! Filesystem-backed checks.
//!
//! Every call touches the filesystem, so a result only describes the moment it
//! was taken. Symlinks are followed.
//!
//! On Unix, readability and executability are asked of the kernel with
//! `faccessat(AT_EACCESS)`, which honours the effective uid/gid, supplementary
//! groups and ACLs. Elsewhere readability is probed by opening the file and any
//! regular file counts as executable.

use std::{env, fs, path::Path, path::PathBuf};

use crate::validate::Rejection;

/// Existing regular file readable by this process.
pub(crate) fn check_file(raw: &str) -> Result<(), Rejection> {
    let path = Path::new(raw);
    let meta = fs::metadata(path).map_err(|_| Rejection::Missing)?;
    if !meta.is_file() {
        return Err(Rejection::NotARegularFile);
    }
    if !is_readable(path) {
        return Err(Rejection::NotReadable);
    }
    Ok(())
}

/// Existing regular file that this process may both read and execute.
pub(crate) fn check_executable(raw: &str) -> Result<(), Rejection> {
    check_file(raw)?;
    if !is_executable(Path::new(raw)) {
        return Err(Rejection::NotExecutable);
    }
    Ok(())
}

/// Existing directory.
pub(crate) fn check_folder(raw: &str) -> Result<(), Rejection> {
    let meta = fs::metadata(raw).map_err(|_| Rejection::Missing)?;
    if !meta.is_dir() {
        return Err(Rejection::NotADirectory);
    }
    Ok(())
}

/// Resolves a program name the way a shell would.
///
/// A name containing a path separator is checked as given. A bare name is
/// searched on `PATH`, and the first candidate passing the executable check wins.
pub fn resolve_executable(name: &str) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }
    if name.contains(std::path::MAIN_SEPARATOR) || name.contains('/') {
        return check_executable(name).ok().map(|_| PathBuf::from(name));
    }

    let search = env::var_os("PATH")?;
    env::split_paths(&search)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(name))
        .find(|candidate| {
            candidate
                .to_str()
                .is_some_and(|c| check_executable(c).is_ok())
        })
}

#[cfg(unix)]
fn access(path: &Path, mode: libc::c_int) -> bool {
    use std::{ffi::CString, os::unix::ffi::OsStrExt};

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: `c_path` is a valid NUL-terminated string that outlives the call.
    unsafe { libc::faccessat(libc::AT_FDCWD, c_path.as_ptr(), mode, libc::AT_EACCESS) == 0 }
}

#[cfg(unix)]
fn is_readable(path: &Path) -> bool {
    access(path, libc::R_OK)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    access(path, libc::X_OK)
}

#[cfg(not(unix))]
fn is_readable(path: &Path) -> bool {
    fs::File::open(path).is_ok()
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
