//! Descriptor set loading for the offline subcommands

use anyhow::Context;
use prost::Message;
use prost_types::FileDescriptorSet;
use std::path::Path;

/// Read a binary `FileDescriptorSet` as written by `protoc --descriptor_set_out`
pub fn load_descriptor_set(path: &Path) -> anyhow::Result<FileDescriptorSet> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    FileDescriptorSet::decode(bytes.as_slice())
        .with_context(|| format!("Failed to decode descriptor set {}", path.display()))
}
