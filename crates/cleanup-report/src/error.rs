use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0} is not a directory")]
    NotADirectory(String),

    #[error("Example from {metadata_path} is missing a required '{field}' key")]
    MissingField {
        field: String,
        metadata_path: String,
    },
}
