//! Template path resolution
//!
//! Maps a keyword sequence onto the on-disk layout
//! `<root>/templates/<category...>/<name><ext>`. Resolution is pure: nothing
//! here touches the filesystem.
//!
//! Every keyword is appended as a relative segment (root markers, `.` and
//! `..` are dropped), so a resolved path never leaves `<root>/templates`.
//!
//! The language tag is not a folder: trees laid out as
//! `templates/<language>/<category...>/` must be re-nested, or addressed by
//! repeating the language as the first category.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::constants::TEMPLATES_SUBDIR;
use crate::keywords::Keywords;
use crate::util::{join_relative, push_relative};

/// Resolved location of one template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateLocation {
    /// Directory holding the template file
    pub folder: PathBuf,
    /// File name including the language extension
    pub file_name: String,
    /// Full path to the template file
    pub path: PathBuf,
}

impl TemplateLocation {
    pub fn resolve(root: &Path, keywords: &Keywords) -> Self {
        let folder = folder_path(root, keywords);
        let file_name = keywords.file_name();
        let path = join_relative(&folder, &file_name);
        Self {
            folder,
            file_name,
            path,
        }
    }
}

/// Folder for a keyword sequence: `<root>/templates/<category...>`
pub fn folder_path(root: &Path, keywords: &Keywords) -> PathBuf {
    let mut folder = root.join(TEMPLATES_SUBDIR);
    for category in keywords.folders() {
        push_relative(&mut folder, category);
    }
    folder
}

/// Full template path for a keyword sequence
pub fn template_path(root: &Path, keywords: &Keywords) -> PathBuf {
    join_relative(&folder_path(root, keywords), &keywords.file_name())
}
