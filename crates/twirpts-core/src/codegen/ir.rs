//! Intermediate representation for generated TypeScript modules.
//!
//! The IR is a flat registry of [`Model`]s (one per protobuf message, nested
//! messages included) plus the [`Service`]s of a single `.proto` file. Every
//! later stage works on an [`ApiContext`]: the walker fills it, the propagator
//! closes the marshal flags and the emitter renders it.
//!
//! # Structure
//!
//! - [`Model`]: one TypeScript data shape with its JSON wire mirror
//! - [`ModelField`]: a field with both its TypeScript and JSON types
//! - [`MapDetails`]: present on synthetic map-entry models
//! - [`Service`] / [`ServiceMethod`]: RPC surface of the file
//!
//! # Examples
//!
//! ```rust
//! use twirpts_core::codegen::ir::{ApiContext, Model};
//!
//! let mut ctx = ApiContext::new();
//! assert!(ctx.add_model(Model::new("HelloReq")));
//! assert!(!ctx.add_model(Model::new("HelloReq")));
//! assert_eq!(ctx.models().len(), 1);
//! ```

use crate::error::{GenerateError, GenerateResult};
use serde::Serialize;
use std::collections::HashMap;

/// TypeScript type used for `google.protobuf.Timestamp` fields.
pub const DATE_TYPE: &str = "Date";

/// Fully-qualified protobuf name of the well-known timestamp type.
pub const TIMESTAMP_TYPE_NAME: &str = ".google.protobuf.Timestamp";

/// Suffix naming the JSON wire mirror of a model.
pub const JSON_SUFFIX: &str = "JSON";

/// A generated data shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Model {
    /// Namespace-flattened name (`Outer.Inner` becomes `OuterInner`).
    pub name: String,

    /// Built-in placeholder that is never rendered (only `Date`).
    pub primitive: bool,

    /// Fields in declaration order. Empty for map-entry models.
    pub fields: Vec<ModelField>,

    /// Set when the model is a synthetic map entry.
    pub map: Option<MapDetails>,

    /// Whether a `NameToJSON` helper is needed.
    pub can_marshal: bool,

    /// Whether a `JSONToName` helper is needed.
    pub can_unmarshal: bool,
}

/// A field of a [`Model`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelField {
    /// lowerCamel TypeScript name.
    pub name: String,

    /// TypeScript type, `T[]` for repeated fields.
    pub ty: String,

    /// Field name as declared in the schema, used on the wire.
    pub json_name: String,

    /// JSON wire type, `T[]` for repeated fields.
    pub json_type: String,

    /// Field references a message (timestamps included).
    pub is_message: bool,

    /// Field has the repeated label.
    pub is_repeated: bool,

    /// Field is a `google.protobuf.Timestamp`.
    pub is_timestamp: bool,

    /// `Map<K, V>` rendering for map fields.
    pub map_type: Option<String>,
}

/// Key and value of a map-entry model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapDetails {
    /// Entry model name without its `Entry` suffix, used for helper names.
    pub name: String,
    pub key_field: ModelField,
    pub value_field: ModelField,
}

/// An RPC service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    pub name: String,
    pub package: String,
    pub methods: Vec<ServiceMethod>,
}

/// A single RPC method of a [`Service`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceMethod {
    /// lowerCamel TypeScript method name.
    pub name: String,

    /// Route segment, the schema method name verbatim.
    pub path: String,

    /// Parameter name of the request argument.
    pub input_arg: String,

    pub input_type: String,
    pub output_type: String,
}

impl Model {
    /// Create an empty, unflagged model.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            primitive: false,
            fields: Vec::new(),
            map: None,
            can_marshal: false,
            can_unmarshal: false,
        }
    }

    /// Create a built-in placeholder model.
    pub fn primitive(name: impl Into<String>) -> Self {
        Self {
            primitive: true,
            ..Self::new(name)
        }
    }

    /// Whether this model is a synthetic map entry.
    pub fn is_map(&self) -> bool {
        self.map.is_some()
    }

    /// Fields as they appear on the wire.
    ///
    /// For map entries these are the `key` and `value` fields held in
    /// [`MapDetails`]; otherwise the ordinary field list.
    pub fn wire_fields(&self) -> Vec<&ModelField> {
        match &self.map {
            Some(details) => vec![&details.key_field, &details.value_field],
            None => self.fields.iter().collect(),
        }
    }
}

impl ModelField {
    /// TypeScript type with any `[]` wrapper removed.
    pub fn base_type(&self) -> &str {
        self.ty.strip_suffix("[]").unwrap_or(&self.ty)
    }

    /// Name of the registered model this field points at, if any.
    ///
    /// Timestamps reference a message but map to the built-in `Date`.
    pub fn referenced_model(&self) -> Option<&str> {
        (self.is_message && !self.is_timestamp).then(|| self.base_type())
    }
}

impl Service {
    /// Route prefix shared by every method: `/twirp/<package>.<Service>/`.
    pub fn path_prefix(&self) -> String {
        if self.package.is_empty() {
            format!("/twirp/{}/", self.name)
        } else {
            format!("/twirp/{}.{}/", self.package, self.name)
        }
    }
}

/// Registry of models and services for one `.proto` file.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ApiContext {
    models: Vec<Model>,
    services: Vec<Service>,
    #[serde(skip)]
    lookup: HashMap<String, usize>,
}

impl ApiContext {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model.
    ///
    /// Returns `false` and leaves the registry untouched when a model with
    /// the same name already exists.
    pub fn add_model(&mut self, model: Model) -> bool {
        if self.lookup.contains_key(&model.name) {
            tracing::warn!("Ignoring duplicate model {}", model.name);
            return false;
        }

        tracing::trace!("Registered model {}", model.name);
        self.lookup.insert(model.name.clone(), self.models.len());
        self.models.push(model);
        true
    }

    /// Register a service.
    pub fn add_service(&mut self, service: Service) {
        tracing::trace!(
            "Registered service {} with {} methods",
            service.name,
            service.methods.len()
        );
        self.services.push(service);
    }

    /// Models in registration order.
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Services in declaration order.
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Look up a model by name.
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.lookup.get(name).map(|&index| &self.models[index])
    }

    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        self.lookup.get(name).copied()
    }

    pub(crate) fn model_at(&self, index: usize) -> &Model {
        &self.models[index]
    }

    pub(crate) fn model_at_mut(&mut self, index: usize) -> &mut Model {
        &mut self.models[index]
    }

    /// Indices of the models referenced by the fields of the model at `index`.
    pub(crate) fn references_of(&self, index: usize) -> GenerateResult<Vec<usize>> {
        let model = &self.models[index];
        model
            .wire_fields()
            .into_iter()
            .filter_map(|field| field.referenced_model().map(|name| (field, name)))
            .map(|(field, name)| {
                self.index_of(name).ok_or_else(|| {
                    GenerateError::unknown_model(name, format!("{}.{}", model.name, field.json_name))
                })
            })
            .collect()
    }

    /// Check that every message reference resolves to a registered model.
    ///
    /// Covers model fields and the input/output types of every service method.
    pub fn validate_references(&self) -> GenerateResult<()> {
        for index in 0..self.models.len() {
            self.references_of(index)?;
        }

        for service in &self.services {
            for method in &service.methods {
                for type_name in [&method.input_type, &method.output_type] {
                    if self.index_of(type_name).is_none() {
                        return Err(GenerateError::unknown_model(
                            type_name.as_str(),
                            format!("{}.{}", service.name, method.path),
                        ));
                    }
                }
            }
        }

        Ok(())
    }
}
