//! Filesystem survey — one walk that gathers everything the report needs.
//!
//! The collector runs fully before reconciliation starts: it walks the
//! root folder once, pruning a fixed set of tooling folders, and
//! produces both the list of recognized source file identifiers and
//! the parsed metadata documents found along the way.

use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::error::ReportError;
use crate::language::Language;
use crate::metadata::{parse_metadata, MetadataDoc};
use crate::url;

/// File name (case-insensitive) that marks a cleanup metadata document.
pub const METADATA_FILENAME: &str = "metadata.yaml";

/// Folders pruned from the walk before descent. Files inside them
/// never reach either output list.
pub const IGNORE_FOLDERS: [&str; 4] = ["venv", "scripts", "__pycache__", ".pytest_cache"];

/// Everything gathered from one walk of the tree.
#[derive(Debug, Default)]
pub struct Survey {
    /// Parsed metadata documents, in traversal order.
    pub examples: Vec<MetadataDoc>,
    /// Canonical identifiers of every recognized source file.
    pub files: Vec<String>,
}

/// True for directories the walk must not descend into. The scan root
/// itself (depth 0) is never pruned, even if its own name matches.
fn is_ignored(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| IGNORE_FOLDERS.contains(&name))
}

/// Walk `root` and gather metadata documents plus source file identifiers.
///
/// Each regular file is checked first for a recognized source
/// extension, then for the metadata file name — one classification per
/// file. Metadata files that fail to parse are logged and skipped;
/// the walk continues.
///
/// # Errors
///
/// Returns [`ReportError::NotADirectory`] when `root` does not name an
/// existing directory. The check runs before any traversal.
pub fn gather(root: &Path) -> Result<Survey, ReportError> {
    if !root.is_dir() {
        return Err(ReportError::NotADirectory(root.display().to_string()));
    }

    let mut survey = Survey::default();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_ignored(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("warning: skipping unreadable entry: {err}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy();
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase());

        if extension.as_deref().and_then(Language::from_extension).is_some() {
            let folder = path.parent().unwrap_or_else(|| Path::new(""));
            survey.files.push(url::source_url(folder, &file_name));
        } else if file_name.eq_ignore_ascii_case(METADATA_FILENAME) {
            eprintln!("Found metadata: {}.", path.display());
            match parse_metadata(path) {
                Ok(docs) => survey.examples.extend(docs),
                Err(err) => {
                    eprintln!("warning: skipping {}: {err}", path.display());
                }
            }
        }
    }

    Ok(survey)
}
