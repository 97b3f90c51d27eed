use std::io;
use std::path::Path;

/// File symlinks need either administrator rights or Developer Mode.
pub fn symlink_file(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link).map_err(|err| {
        if err.raw_os_error() == Some(1314) {
            io::Error::new(
                err.kind(),
                format!(
                    "{} (creating symlinks requires Developer Mode or an elevated prompt)",
                    err
                ),
            )
        } else {
            err
        }
    })
}
