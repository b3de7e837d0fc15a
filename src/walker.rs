//! Discovery of `.sql` migration files under a directory tree

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::CasefixError;

/// Lazily yield every file under `root` whose name ends in `.sql`.
///
/// The suffix match is case-sensitive, so `.SQL` and `.sql.bak` files are
/// skipped. Traversal errors (missing root, unreadable directory) are
/// yielded as errors rather than swallowed; a root that exists but contains
/// no matching files yields an empty sequence.
pub fn sql_files(root: &Path) -> impl Iterator<Item = Result<PathBuf, CasefixError>> {
    WalkDir::new(root).into_iter().filter_map(|entry| match entry {
        Ok(entry) => {
            if entry.file_type().is_file() && has_sql_suffix(entry.path()) {
                Some(Ok(entry.into_path()))
            } else {
                None
            }
        }
        Err(err) => Some(Err(err.into())),
    })
}

fn has_sql_suffix(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map_or(false, |name| name.ends_with(".sql"))
}
