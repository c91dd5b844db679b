//! Flattening of nested message definitions into registry models.

use super::ir::{ApiContext, MapDetails, Model, ModelField};
use super::naming::flatten_prefix;
use super::ts_types::{is_map_entry, new_field};
use crate::error::{GenerateError, GenerateResult};
use prost_types::DescriptorProto;

/// Register `message` and, recursively, every message nested inside it.
///
/// `prefix` is the dotted path of enclosing message names (`""` at the top
/// level, `.Outer` for messages declared inside `Outer`). Parents are
/// registered before their children.
pub fn add_message_type(
    ctx: &mut ApiContext,
    message: &DescriptorProto,
    prefix: &str,
    package: &str,
) -> GenerateResult<()> {
    let name = format!("{}{}", flatten_prefix(prefix), message.name());
    let fields: Vec<ModelField> = message
        .field
        .iter()
        .map(|field| new_field(field, message, package))
        .collect();

    let mut model = Model::new(name);
    if is_map_entry(message) {
        model.map = Some(map_details(&model.name, fields)?);
    } else {
        model.fields = fields;
    }
    ctx.add_model(model);

    let nested_prefix = format!("{prefix}.{}", message.name());
    for nested in &message.nested_type {
        add_message_type(ctx, nested, &nested_prefix, package)?;
    }

    Ok(())
}

fn map_details(model_name: &str, fields: Vec<ModelField>) -> GenerateResult<MapDetails> {
    let mut key_field = None;
    let mut value_field = None;
    for field in fields {
        match field.json_name.as_str() {
            "key" => key_field = Some(field),
            "value" => value_field = Some(field),
            _ => {}
        }
    }

    let missing = |field: &'static str| GenerateError::InvalidMapEntry {
        model: model_name.to_string(),
        missing: field,
    };

    Ok(MapDetails {
        name: model_name
            .strip_suffix("Entry")
            .unwrap_or(model_name)
            .to_string(),
        key_field: key_field.ok_or_else(|| missing("key"))?,
        value_field: value_field.ok_or_else(|| missing("value"))?,
    })
}
