//! Registry dump for debugging schemas

use crate::descriptor::load_descriptor_set;
use std::path::Path;
use twirpts_core::{GenerateError, build_context};

/// Build the closed registry of `file` and render it as pretty JSON
pub fn run(descriptor_set: &Path, file: &str) -> anyhow::Result<String> {
    let set = load_descriptor_set(descriptor_set)?;
    let descriptor = set
        .file
        .iter()
        .find(|descriptor| descriptor.name() == file)
        .ok_or_else(|| GenerateError::MissingFile(file.to_string()))?;

    let ctx = build_context(descriptor)?;
    Ok(serde_json::to_string_pretty(&ctx)?)
}
