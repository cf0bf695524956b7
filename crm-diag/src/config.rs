use std::fs;
use std::path::Path;

use crate::types::{DiagError, FixtureConfig};

/// Load a [`FixtureConfig`] from JSON or YAML.
pub fn load_fixture(path: &Path) -> Result<FixtureConfig, DiagError> {
    let content = fs::read_to_string(path)?;
    parse_fixture(path, &content)
}

fn parse_fixture(path: &Path, content: &str) -> Result<FixtureConfig, DiagError> {
    if is_json(path, content) {
        Ok(serde_json::from_str(content)?)
    } else {
        Ok(serde_yaml_bw::from_str(content)?)
    }
}

fn is_json(path: &Path, content: &str) -> bool {
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        if matches!(ext, "json") {
            return true;
        }
        if matches!(ext, "yaml" | "yml") {
            return false;
        }
    }

    content
        .chars()
        .find(|c| !c.is_whitespace())
        .is_some_and(|c| c == '{' || c == '[')
}
