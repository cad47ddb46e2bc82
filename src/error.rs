//! Error type shared by the library and the binaries.

use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// `source` or `destination` was not given on the command line.
    #[error(
        "Arguments are not formed correctly. \nExpected: \"source destination\" \nReceived: {received_source} {received_destination}"
    )]
    Usage {
        received_source: String,
        received_destination: String,
    },

    #[error("error during read: {0}")]
    Read(#[from] std::io::Error),

    #[error("timeout during read after {0:?}")]
    Timeout(Duration),

    /// The payload is not a mapping of source to adjacency lists.
    #[error("malformed payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    /// A vertex was reached twice, so the input is not a tree.
    #[error("malformed tree: vertex {vertex:?} is part of a cycle")]
    MalformedTree { vertex: String },

    #[error("unable to render path: {0}")]
    Output(#[source] serde_json::Error),
}

impl Error {
    pub fn usage(source: Option<&str>, destination: Option<&str>) -> Self {
        Error::Usage {
            received_source: source.unwrap_or("undefined").to_string(),
            received_destination: destination.unwrap_or("undefined").to_string(),
        }
    }
}
