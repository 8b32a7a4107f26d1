use std::fs;
use std::path::Path;

use super::definition::BlueprintGraph;
use crate::error::DataError;

impl BlueprintGraph {
    /// Parses a graph document in the canonical JSON format.
    pub fn from_json(content: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Loads a graph document from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}
