//! Reading the spanning forest from a byte stream.
//!
//! The whole payload has to arrive before it is parsed. The optional
//! timeout bounds the read only, parsing is not timed.

use std::time::Duration;

use log::info;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::{
    error::{Error, Result},
    graphs::SpanningForest,
};

/// Reads `reader` to its end, failing with [`Error::Timeout`] if that takes
/// longer than `timeout`.
pub async fn read_payload<R>(mut reader: R, timeout: Option<Duration>) -> Result<String>
where
    R: AsyncRead + Unpin,
{
    let mut payload = String::new();

    match timeout {
        Some(duration) => {
            tokio::time::timeout(duration, reader.read_to_string(&mut payload))
                .await
                .map_err(|_| Error::Timeout(duration))??;
        }
        None => {
            reader.read_to_string(&mut payload).await?;
        }
    }

    info!("read payload of {} bytes", payload.len());
    Ok(payload)
}

pub fn parse_forest(payload: &str) -> Result<SpanningForest> {
    let forest: SpanningForest = serde_json::from_str(payload).map_err(Error::MalformedPayload)?;
    info!("parsed spanning forest with {} trees", forest.number_of_trees());
    Ok(forest)
}

pub async fn read_forest<R>(reader: R, timeout: Option<Duration>) -> Result<SpanningForest>
where
    R: AsyncRead + Unpin,
{
    let payload = read_payload(reader, timeout).await?;
    parse_forest(&payload)
}
