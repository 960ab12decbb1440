use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to access the file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record on line {line} of the results log: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize the analysis report: {0}")]
    Serialize(#[from] serde_json::Error),
}
