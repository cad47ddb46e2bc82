use crate::{
    error::{Error, Result},
    graphs::Path,
};

/// Printed instead of a path when the destination cannot be reached. Being
/// a JSON string it can never be mistaken for a path, which is an array.
pub const NO_PATH_FOUND: &str = "\"No path found.\"";

pub fn render(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => serde_json::to_string(path).map_err(Error::Output),
        None => Ok(NO_PATH_FOUND.to_string()),
    }
}
