//! Offline generation from a descriptor set

use crate::descriptor::load_descriptor_set;
use anyhow::Context;
use std::path::{Path, PathBuf};
use twirpts_core::GeneratorOptions;
use twirpts_core::plugin::select_files;

/// Load generator options from a TOML file, or the defaults without one
pub fn load_options(config: Option<&Path>) -> anyhow::Result<GeneratorOptions> {
    let Some(path) = config else {
        return Ok(GeneratorOptions::default());
    };

    let content = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    GeneratorOptions::from_toml(&content).with_context(|| format!("Invalid config {}", path.display()))
}

/// Generate modules for `files` (every file in the set when empty) under `output`
///
/// Returns the paths written, in generation order.
pub fn run(
    descriptor_set: &Path,
    output: &Path,
    options: &GeneratorOptions,
    files: &[String],
) -> anyhow::Result<Vec<PathBuf>> {
    let set = load_descriptor_set(descriptor_set)?;
    let names: Vec<String> = if files.is_empty() {
        set.file.iter().map(|file| file.name().to_string()).collect()
    } else {
        files.to_vec()
    };

    let mut written = Vec::new();
    for file in select_files(&set.file, &names)? {
        let generated = twirpts_core::generate_file(file, options)?;
        let path = output.join(&generated.name);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        std::fs::write(&path, &generated.content).with_context(|| format!("Failed to write {}", path.display()))?;

        tracing::debug!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}
