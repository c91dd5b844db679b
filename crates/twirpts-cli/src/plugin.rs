//! protoc plugin mode

use anyhow::Context;
use prost::Message;
use prost_types::compiler::CodeGeneratorRequest;
use std::io::{Read, Write};
use twirpts_core::GeneratorOptions;

/// Read a request from stdin and write the response to stdout
///
/// Generation failures travel inside the response; only I/O and decode
/// failures end the process with an error.
pub fn run() -> anyhow::Result<()> {
    let mut input = Vec::new();
    std::io::stdin()
        .read_to_end(&mut input)
        .context("Failed to read CodeGeneratorRequest from stdin")?;

    let request = CodeGeneratorRequest::decode(input.as_slice()).context("Failed to decode CodeGeneratorRequest")?;

    // An invalid parameter is reported in the response below
    let level = GeneratorOptions::from_parameter(request.parameter.as_deref())
        .map(|options| options.log_level)
        .unwrap_or_else(|_| GeneratorOptions::default().log_level);
    crate::logging::init_logging(&level);

    tracing::debug!("Received request for {} files", request.file_to_generate.len());
    let response = twirpts_core::generate(&request);

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(&response.encode_to_vec())
        .context("Failed to write CodeGeneratorResponse to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;

    Ok(())
}
