use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};

use crate::discovery::glob::FileGlob;
use crate::logging;

/// Lazily walk `root` and yield every file whose name matches `glob`.
///
/// Hidden entries are included and no ignore files are honoured. Symlinks
/// are not followed. Siblings are visited in file-name order. Entries that
/// cannot be listed are logged and skipped.
pub fn matching_files(root: &Path, glob: &FileGlob) -> impl Iterator<Item = PathBuf> {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .types(glob.types())
        .sort_by_file_name(|a, b| a.cmp(b));

    builder.build().filter_map(|entry| match entry {
        Ok(entry) if is_candidate(&entry) => Some(entry.into_path()),
        Ok(_) => None,
        Err(err) => {
            logging::log_skipped_entry(&err);
            None
        }
    })
}

/// Directories, including symlinks that resolve to one, are walked but never read
fn is_candidate(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(file_type) if file_type.is_dir() => false,
        Some(file_type) if file_type.is_symlink() => !entry.path().is_dir(),
        Some(_) => true,
        None => false,
    }
}

/// Path shown to the user: relative to the scan root when possible
pub fn display_path<'a>(root: &Path, path: &'a Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}
