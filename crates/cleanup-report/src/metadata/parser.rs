use std::path::Path;

use serde::Deserialize;

use crate::error::ReportError;
use crate::metadata::types::MetadataDoc;

/// Parse a metadata file into its YAML documents.
///
/// A metadata file may contain multiple documents separated by `---`
/// markers; each becomes one [`MetadataDoc`] with `source_path` set to
/// the file's path.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the file cannot be read, or
/// [`ReportError::Yaml`] if any document is malformed. A malformed
/// document poisons the whole file: none of its documents are kept.
pub fn parse_metadata(path: &Path) -> Result<Vec<MetadataDoc>, ReportError> {
    let content = std::fs::read_to_string(path)?;
    let mut docs = parse_metadata_str(&content)?;
    for doc in &mut docs {
        doc.source_path = path.to_path_buf();
    }
    Ok(docs)
}

/// Parse metadata documents from a YAML string.
pub fn parse_metadata_str(yaml: &str) -> Result<Vec<MetadataDoc>, ReportError> {
    let mut docs = Vec::new();
    for document in serde_yaml::Deserializer::from_str(yaml) {
        docs.push(MetadataDoc::deserialize(document)?);
    }
    Ok(docs)
}
