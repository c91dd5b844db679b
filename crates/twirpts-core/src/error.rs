//! Error types for code generation

use thiserror::Error;

/// Result type alias for generation operations
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Error type for generation operations
#[derive(Error, Debug)]
pub enum GenerateError {
    /// A field or RPC method names a message that is not in the registry
    #[error("could not find model of type {type_name} referenced by {referenced_by}")]
    UnknownModel {
        type_name: String,
        referenced_by: String,
    },

    /// A message flagged as a map entry lacks its `key` or `value` field
    #[error("map entry {model} has no `{missing}` field")]
    InvalidMapEntry { model: String, missing: &'static str },

    /// Writing generated source failed
    #[error("failed to render {item}: {source}")]
    Render {
        item: String,
        #[source]
        source: std::fmt::Error,
    },

    /// The plugin parameter or config file could not be parsed
    #[error("invalid generator parameter: {0}")]
    InvalidParameter(String),

    /// A file listed for generation was not supplied with the request
    #[error("file {0} was requested but not provided")]
    MissingFile(String),

    /// Protobuf payload could not be decoded
    #[error("decode error: {0}")]
    Decode(#[from] prost::DecodeError),
}

impl GenerateError {
    pub(crate) fn unknown_model(type_name: impl Into<String>, referenced_by: impl Into<String>) -> Self {
        GenerateError::UnknownModel {
            type_name: type_name.into(),
            referenced_by: referenced_by.into(),
        }
    }

    pub(crate) fn render(item: impl Into<String>) -> impl FnOnce(std::fmt::Error) -> Self {
        let item = item.into();
        move |source| GenerateError::Render { item, source }
    }
}

impl From<serde_json::Error> for GenerateError {
    fn from(err: serde_json::Error) -> Self {
        GenerateError::InvalidParameter(err.to_string())
    }
}

impl From<toml::de::Error> for GenerateError {
    fn from(err: toml::de::Error) -> Self {
        GenerateError::InvalidParameter(err.to_string())
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
