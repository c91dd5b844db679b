//! Code generation from protobuf file descriptors.
//!
//! # Architecture
//!
//! Generation is a forward-only pipeline over one file descriptor:
//!
//! ```text
//! FileDescriptorProto
//!     ↓
//!  [walker]     messages (nested ones flattened) → Models, fields typed by [ts_types]
//!     ↓
//!  [services]   services → client method descriptors
//!     ↓
//!  [propagate]  RPC inputs/outputs → marshal/unmarshal flags (transitive)
//!     ↓
//!  [typescript] ApiContext → module source
//! ```
//!
//! All stages share one [`ApiContext`] that is built per file and dropped
//! after rendering.
//!
//! # Usage
//!
//! ```rust
//! use prost_types::{DescriptorProto, FileDescriptorProto};
//! use twirpts_core::codegen::{build_context, generate_typescript};
//! use twirpts_core::GeneratorOptions;
//!
//! let file = FileDescriptorProto {
//!     name: Some("hello.proto".into()),
//!     package: Some("pkg".into()),
//!     message_type: vec![DescriptorProto {
//!         name: Some("HelloReq".into()),
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//!
//! let ctx = build_context(&file).unwrap();
//! let source = generate_typescript(&ctx, &GeneratorOptions::default()).unwrap();
//! assert!(source.contains("export interface HelloReq {"));
//! ```

pub mod ir;
pub mod naming;
pub mod propagate;
pub mod services;
pub mod ts_types;
pub mod typescript;
pub mod walker;
mod writer;

pub use ir::{ApiContext, MapDetails, Model, ModelField, Service, ServiceMethod};
pub use typescript::generate_typescript;

use crate::error::GenerateResult;
use ir::DATE_TYPE;
use prost_types::FileDescriptorProto;

/// Build the closed registry for one file.
///
/// Walks every message, registers the `Date` placeholder, builds services,
/// checks that all references resolve and applies the marshal flags.
pub fn build_context(file: &FileDescriptorProto) -> GenerateResult<ApiContext> {
    let package = file.package();
    let mut ctx = ApiContext::new();

    for message in &file.message_type {
        walker::add_message_type(&mut ctx, message, "", package)?;
    }
    ctx.add_model(Model::primitive(DATE_TYPE));

    for service in &file.service {
        ctx.add_service(services::build_service(service, package));
    }

    ctx.validate_references()?;
    propagate::apply_marshal_flags(&mut ctx)?;

    tracing::debug!(
        "Built context for {}: {} models, {} services",
        file.name(),
        ctx.models().len(),
        ctx.services().len()
    );
    Ok(ctx)
}
