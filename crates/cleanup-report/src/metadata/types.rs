use std::path::PathBuf;

use serde::Deserialize;

use crate::error::ReportError;

/// One cleanup metadata document.
///
/// A `metadata.yaml` file may hold several of these, separated by YAML
/// document markers. Only the `files` key matters to the report; any
/// other keys in the document are ignored. A document without a
/// `files` key still parses — the reconciler treats it as a bad
/// example and skips it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetadataDoc {
    #[serde(default)]
    pub files: Option<Vec<FileEntry>>,
    /// Path of the metadata file this document came from. Set by the
    /// parser, never read from YAML.
    #[serde(skip)]
    pub source_path: PathBuf,
}

impl MetadataDoc {
    /// The document's file entries, validated.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MissingField`] naming the `files` key
    /// and the offending document when the key was absent. Callers
    /// log the error, count the document as bad, and continue.
    pub fn file_entries(&self) -> Result<&[FileEntry], ReportError> {
        self.files
            .as_deref()
            .ok_or_else(|| ReportError::MissingField {
                field: "files".to_string(),
                metadata_path: self.source_path.display().to_string(),
            })
    }
}

/// One cleaned-file declaration inside a metadata document.
#[derive(Debug, Clone, Deserialize)]
pub struct FileEntry {
    /// Path of the cleaned file, relative to the metadata file's folder.
    pub path: String,
    /// Services the file exemplifies. `None` when the key is absent —
    /// distinct from an explicitly empty list.
    #[serde(default)]
    pub services: Option<Vec<String>>,
}
