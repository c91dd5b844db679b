//! Protobuf to TypeScript type mappings.
//!
//! Every field gets two types: the TypeScript type used in the public
//! interface and the type of its JSON wire representation.
//!
//! # Type Mappings
//!
//! | Protobuf | TypeScript | JSON |
//! |----------|------------|------|
//! | `double`, `float`, `(s|u)int32/64`, `(s)fixed32/64` | `number` | `number` |
//! | `string` | `string` | `string` |
//! | `bool` | `boolean` | `boolean` |
//! | message `pkg.Foo` | `Foo` | `FooJSON` |
//! | `google.protobuf.Timestamp` | `Date` | `string` |
//! | `bytes`, enums | `string` | `string` |
//! | `repeated T` | `T[]` | `JSON(T)[]` |
//! | `map<K, V>` | `Map<K, V>` | `EntryJSON[]` |

use super::ir::{DATE_TYPE, JSON_SUFFIX, ModelField, TIMESTAMP_TYPE_NAME};
use super::naming::{strip_package, to_camel_case};
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{DescriptorProto, FieldDescriptorProto};

/// A TypeScript type paired with its JSON wire type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsType {
    pub ty: String,
    pub json_type: String,
}

impl TsType {
    fn same(name: &str) -> Self {
        Self {
            ty: name.to_string(),
            json_type: name.to_string(),
        }
    }

    fn array(self) -> Self {
        Self {
            ty: format!("{}[]", self.ty),
            json_type: format!("{}[]", self.json_type),
        }
    }
}

/// Map a field's declared type, ignoring its label.
pub fn base_type(field: &FieldDescriptorProto, package: &str) -> TsType {
    match field.r#type() {
        Type::Double
        | Type::Float
        | Type::Int32
        | Type::Int64
        | Type::Uint32
        | Type::Uint64
        | Type::Sint32
        | Type::Sint64
        | Type::Fixed32
        | Type::Fixed64
        | Type::Sfixed32
        | Type::Sfixed64 => TsType::same("number"),
        Type::Bool => TsType::same("boolean"),
        Type::Message if field.type_name() == TIMESTAMP_TYPE_NAME => TsType {
            ty: DATE_TYPE.to_string(),
            json_type: "string".to_string(),
        },
        Type::Message => {
            let name = strip_package(field.type_name(), package);
            TsType {
                json_type: format!("{name}{JSON_SUFFIX}"),
                ty: name,
            }
        }
        Type::String | Type::Bytes | Type::Enum | Type::Group => TsType::same("string"),
    }
}

/// Map a field to its TypeScript and JSON types, honouring the repeated label.
pub fn field_type(field: &FieldDescriptorProto, package: &str) -> TsType {
    let ty = base_type(field, package);
    if is_repeated(field) { ty.array() } else { ty }
}

/// Whether the field carries the repeated label.
pub fn is_repeated(field: &FieldDescriptorProto) -> bool {
    field.label() == Label::Repeated
}

/// Whether a message is protoc's synthetic map entry.
pub fn is_map_entry(message: &DescriptorProto) -> bool {
    message
        .options
        .as_ref()
        .is_some_and(|options| options.map_entry())
}

/// `Map<K, V>` rendering when `field` points at a map entry nested in `parent`.
pub fn map_type(field: &FieldDescriptorProto, parent: &DescriptorProto, package: &str) -> Option<String> {
    if field.r#type() != Type::Message {
        return None;
    }

    let simple_name = field.type_name().rsplit('.').next()?;
    let entry = parent
        .nested_type
        .iter()
        .find(|nested| nested.name() == simple_name && is_map_entry(nested))?;

    let entry_type = |name: &str| {
        entry
            .field
            .iter()
            .find(|f| f.name() == name)
            .map(|f| base_type(f, package).ty)
    };

    Some(format!("Map<{}, {}>", entry_type("key")?, entry_type("value")?))
}

/// Build the IR field for a schema field declared in `parent`.
pub fn new_field(field: &FieldDescriptorProto, parent: &DescriptorProto, package: &str) -> ModelField {
    let TsType { ty, json_type } = field_type(field, package);
    let json_name = field.name().to_string();

    ModelField {
        name: to_camel_case(&json_name),
        ty,
        json_name,
        json_type,
        is_message: field.r#type() == Type::Message,
        is_repeated: is_repeated(field),
        is_timestamp: field.r#type() == Type::Message && field.type_name() == TIMESTAMP_TYPE_NAME,
        map_type: map_type(field, parent, package),
    }
}
