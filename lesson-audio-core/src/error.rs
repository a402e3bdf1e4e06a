use std::path::PathBuf;
use thiserror::Error;

/// Every way a generation run can fail. None of these are retried; the
/// binary maps any of them to exit status 1.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("environment variable {var} is not set")]
    MissingCredential { var: String },

    #[error("failed to load settings from {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to read lesson data from {path:?}: {source}")]
    DataFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no example sentences found in {path:?}")]
    NoRecords { path: PathBuf },

    #[error("no example sentence with id \"{id}\"")]
    IdNotFound { id: String },

    #[error("no example sentences for lesson \"{lesson}\"")]
    LessonNotFound { lesson: String },

    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("request to speech service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to create directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write audio to {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
