//! twirpts-core - TypeScript Twirp client generation from protobuf schemas
//!
//! This crate turns a parsed `.proto` file descriptor into a single TypeScript
//! module containing:
//! - interfaces for every message and their JSON wire mirrors
//! - marshal/unmarshal helpers, only for models an RPC actually needs
//! - one client class per service speaking the Twirp JSON protocol
//!
//! The main entry points are [`plugin::generate`] for the protoc plugin
//! protocol and [`plugin::generate_file`] for a single file descriptor.

pub mod codegen;
mod config;
mod error;
pub mod plugin;

pub use config::GeneratorOptions;
pub use error::{GenerateError, GenerateResult};
pub use codegen::build_context;
pub use plugin::{GeneratedFile, generate, generate_file};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::codegen::{ApiContext, Model, ModelField, Service, ServiceMethod};
    pub use crate::{GenerateError, GenerateResult, GeneratedFile, GeneratorOptions};
}
