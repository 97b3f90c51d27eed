use std::io;
use std::path::{self, Component, Path, PathBuf};

/// Splits a file name at its last `.` into `(stem, extension)`, the
/// extension keeping its dot: `"a.b.mp4"` gives `("a.b", ".mp4")`.
///
/// A name without a dot has an empty extension. A leading dot counts as an
/// extension separator, so `".mkv"` gives `("", ".mkv")`.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    }
}

/// Final component of `path`, or the whole path when it has none (`/`, `..`).
pub fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Absolute form of `path` with `.` and `..` resolved lexically, so the last
/// component is the directory's real name. Symlinks are not resolved.
pub fn absolute_clean(path: &Path) -> io::Result<PathBuf> {
    let absolute = path::absolute(path)?;
    let mut cleaned = PathBuf::new();

    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                if cleaned.file_name().is_some() {
                    cleaned.pop();
                }
            }
            other => cleaned.push(other.as_os_str()),
        }
    }

    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("lesson1.mp4"), ("lesson1", ".mp4"));
        assert_eq!(split_extension("a.b.MKV"), ("a.b", ".MKV"));
        assert_eq!(split_extension("README"), ("README", ""));
        assert_eq!(split_extension(".mkv"), ("", ".mkv"));
        assert_eq!(split_extension("trailing."), ("trailing", "."));
    }

    #[test]
    fn test_file_name_lossy() {
        assert_eq!(file_name_lossy(Path::new("/courses/Go Basics")), "Go Basics");
        assert_eq!(file_name_lossy(Path::new("/")), "/");
    }

    #[cfg(unix)]
    #[test]
    fn test_absolute_clean_resolves_dot_segments() {
        assert_eq!(
            absolute_clean(Path::new("/x/go-course/1. Basics/sub/../..")).unwrap(),
            PathBuf::from("/x/go-course")
        );
        assert_eq!(
            absolute_clean(Path::new("/x/./a/../b/.")).unwrap(),
            PathBuf::from("/x/b")
        );
        assert_eq!(absolute_clean(Path::new("/../..")).unwrap(), PathBuf::from("/"));
    }

    #[test]
    fn test_absolute_clean_relative_path_is_anchored_at_cwd() {
        let cwd = std::env::current_dir().unwrap();
        let cleaned = absolute_clean(Path::new("some/dir/..")).unwrap();
        assert!(cleaned.is_absolute());
        assert_eq!(cleaned, cwd.join("some"));
    }
}
