use crate::error::{Error, Result};
use crate::model::{FileRef, FolderNode};
use crate::utils::{absolute_clean, file_name_lossy, natural_cmp};
use glob::Pattern;
use std::path::Path;
use tracing::{debug, error};
use walkdir::{DirEntry, WalkDir};

/// Reads `dir` and everything below it into a [`FolderNode`] tree.
///
/// `dir` is made absolute and `.`/`..` are resolved first, so the root's
/// `name` is always the directory's own name.
///
/// Entries are visited depth-first in natural order, so every `files` and
/// `sub_folders` list comes out sorted. Symlinks are recorded as files and
/// never followed. Entries matching one of `ignore_globs` are skipped with
/// their whole subtree. Any read error aborts the scan.
pub fn load_tree(dir: &Path, ignore_globs: &[String]) -> Result<FolderNode> {
    let root_path = absolute_clean(dir).map_err(|source| Error::Path {
        path: dir.to_path_buf(),
        source,
    })?;

    let ignore_patterns = compile_patterns(ignore_globs);

    // Open folders from the root down to the entry's parent.
    let mut stack: Vec<FolderNode> = Vec::new();
    let mut file_count = 0usize;

    let walker = WalkDir::new(&root_path)
        .follow_links(false)
        .sort_by(|a, b| {
            natural_cmp(&a.file_name().to_string_lossy(), &b.file_name().to_string_lossy())
        })
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_ignored(entry, &ignore_patterns));

    for entry in walker {
        let entry = entry?;
        let depth = entry.depth();

        while stack.len() > depth {
            close_folder(&mut stack);
        }

        if entry.file_type().is_dir() {
            let name = if depth == 0 {
                file_name_lossy(&root_path)
            } else {
                entry.file_name().to_string_lossy().into_owned()
            };
            stack.push(FolderNode::new(name, entry.path()));
        } else if let Some(parent) = stack.last_mut() {
            parent.files.push(FileRef {
                name: entry.file_name().to_string_lossy().into_owned(),
                full_path: entry.path().to_path_buf(),
            });
            file_count += 1;
        }
    }

    while stack.len() > 1 {
        close_folder(&mut stack);
    }

    let root = match stack.pop() {
        Some(root) => root,
        None => {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} is not a directory", root_path.display()),
            )))
        }
    };

    debug!(
        "Loaded {} with {} files in {} top-level folders",
        root.full_path.display(),
        file_count,
        root.sub_folders.len()
    );

    Ok(root)
}

fn close_folder(stack: &mut Vec<FolderNode>) {
    if let Some(done) = stack.pop() {
        if let Some(parent) = stack.last_mut() {
            parent.sub_folders.push(done);
        }
    }
}

fn compile_patterns(globs: &[String]) -> Vec<Pattern> {
    globs
        .iter()
        .filter_map(|glob| match Pattern::new(glob) {
            Ok(p) => Some(p),
            Err(e) => {
                error!("Invalid glob pattern '{}': {}", glob, e);
                None
            }
        })
        .collect()
}

fn is_ignored(entry: &DirEntry, patterns: &[Pattern]) -> bool {
    let ignored = patterns
        .iter()
        .any(|pattern| pattern.matches_path(entry.path()));
    if ignored {
        debug!("Ignoring {}", entry.path().display());
    }
    ignored
}
