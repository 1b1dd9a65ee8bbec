use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PassError {
    #[error("Please don't leave any fields empty!")]
    MissingFields,

    #[error("No data file found. Try saving some data first.")]
    StoreAbsent,

    #[error("There is no username/password saved for {0}")]
    RecordNotFound(String),

    #[error("Could not access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} does not contain valid credential data: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, PassError>;
