//! Small path helpers shared by resolution and apply

use std::path::{Component, Path, PathBuf};

/// Append `segment` below `base`, keeping only its plain name components.
///
/// Root, drive prefix, `.` and `..` components are dropped, so the result
/// always stays under `base` even for `/etc/passwd` or `../x`.
pub fn push_relative(base: &mut PathBuf, segment: &str) {
    for component in Path::new(segment).components() {
        if let Component::Normal(name) = component {
            base.push(name);
        }
    }
}

/// `base` joined with `segment` via [`push_relative`]
pub fn join_relative(base: &Path, segment: &str) -> PathBuf {
    let mut path = base.to_path_buf();
    push_relative(&mut path, segment);
    path
}
