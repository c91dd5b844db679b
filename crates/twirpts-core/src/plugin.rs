//! protoc plugin protocol glue
//!
//! Maps a `CodeGeneratorRequest` onto per-file generation and folds the
//! results (or the first error) into a `CodeGeneratorResponse`.

use crate::codegen::{build_context, generate_typescript, naming::module_filename};
use crate::config::GeneratorOptions;
use crate::error::{GenerateError, GenerateResult};
use prost::Message;
use prost_types::FileDescriptorProto;
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse, code_generator_response};

/// A rendered output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Output path relative to the protoc output directory
    pub name: String,
    /// TypeScript source
    pub content: String,
}

impl From<GeneratedFile> for code_generator_response::File {
    fn from(file: GeneratedFile) -> Self {
        code_generator_response::File {
            name: Some(file.name),
            content: Some(file.content),
            ..Default::default()
        }
    }
}

/// Generate the TypeScript module for one schema file
pub fn generate_file(file: &FileDescriptorProto, options: &GeneratorOptions) -> GenerateResult<GeneratedFile> {
    let ctx = build_context(file)?;
    let content = generate_typescript(&ctx, options)?;
    let name = options.output_path(&module_filename(file.name()));

    tracing::info!("Generated {} from {}", name, file.name());
    Ok(GeneratedFile { name, content })
}

/// Pick the descriptors named in `names`, in that order
pub fn select_files<'a>(
    proto_files: &'a [FileDescriptorProto],
    names: &[String],
) -> GenerateResult<Vec<&'a FileDescriptorProto>> {
    names
        .iter()
        .map(|name| {
            proto_files
                .iter()
                .find(|file| file.name() == name)
                .ok_or_else(|| GenerateError::MissingFile(name.clone()))
        })
        .collect()
}

/// Generate every file the request asks for
pub fn generate_files(request: &CodeGeneratorRequest) -> GenerateResult<Vec<GeneratedFile>> {
    let options = GeneratorOptions::from_parameter(request.parameter.as_deref())?;

    select_files(&request.proto_file, &request.file_to_generate)?
        .into_iter()
        .map(|file| generate_file(file, &options))
        .collect()
}

/// Handle a plugin request
///
/// Generation errors are reported through `CodeGeneratorResponse.error`, which
/// protoc prints and turns into a failed invocation.
pub fn generate(request: &CodeGeneratorRequest) -> CodeGeneratorResponse {
    let mut response = CodeGeneratorResponse {
        supported_features: Some(code_generator_response::Feature::Proto3Optional as u64),
        ..Default::default()
    };

    match generate_files(request) {
        Ok(files) => response.file = files.into_iter().map(Into::into).collect(),
        Err(err) => {
            tracing::error!("Generation failed: {}", err);
            response.error = Some(err.to_string());
        }
    }

    response
}

/// Decode a serialized request, handle it and encode the response
pub fn generate_from_bytes(bytes: &[u8]) -> GenerateResult<Vec<u8>> {
    let request = CodeGeneratorRequest::decode(bytes)?;
    Ok(generate(&request).encode_to_vec())
}
