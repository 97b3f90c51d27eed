#[cfg(target_os = "windows")]
pub mod windows;

use std::io;
use std::path::Path;

/// Creates a symbolic link at `link` pointing to the file `target`.
#[cfg(target_os = "windows")]
pub fn symlink_file(target: &Path, link: &Path) -> io::Result<()> {
    windows::symlink_file(target, link)
}

#[cfg(unix)]
pub fn symlink_file(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(not(any(unix, target_os = "windows")))]
pub fn symlink_file(_target: &Path, _link: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "symbolic links are not supported on this platform",
    ))
}
