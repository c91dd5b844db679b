//! Descriptor builders shared by the integration tests.

#![allow(dead_code)]

use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{
    DescriptorProto, FieldDescriptorProto, FileDescriptorProto, MessageOptions, MethodDescriptorProto,
    ServiceDescriptorProto,
};

pub const PACKAGE: &str = "pkg";

pub fn scalar(name: &str, ty: Type) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        r#type: Some(ty as i32),
        label: Some(Label::Optional as i32),
        ..Default::default()
    }
}

/// Field referencing a message by its path below the package (`Outer.Inner`).
pub fn message_ref(name: &str, path: &str) -> FieldDescriptorProto {
    FieldDescriptorProto {
        type_name: Some(format!(".{PACKAGE}.{path}")),
        ..scalar(name, Type::Message)
    }
}

pub fn timestamp(name: &str) -> FieldDescriptorProto {
    FieldDescriptorProto {
        type_name: Some(".google.protobuf.Timestamp".to_string()),
        ..scalar(name, Type::Message)
    }
}

pub fn repeated(mut field: FieldDescriptorProto) -> FieldDescriptorProto {
    field.label = Some(Label::Repeated as i32);
    field
}

pub fn message(name: &str, fields: Vec<FieldDescriptorProto>) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.to_string()),
        field: fields,
        ..Default::default()
    }
}

pub fn with_nested(mut parent: DescriptorProto, nested: Vec<DescriptorProto>) -> DescriptorProto {
    parent.nested_type = nested;
    parent
}

/// Message `parent_name` with a `map<key, value>` field, laid out the way protoc does.
pub fn with_map_field(
    mut parent: DescriptorProto,
    field_name: &str,
    entry_name: &str,
    key: FieldDescriptorProto,
    value: FieldDescriptorProto,
) -> DescriptorProto {
    let path = format!("{}.{entry_name}", parent.name());
    parent.field.push(repeated(message_ref(field_name, &path)));
    parent.nested_type.push(DescriptorProto {
        name: Some(entry_name.to_string()),
        field: vec![key, value],
        options: Some(MessageOptions {
            map_entry: Some(true),
            ..Default::default()
        }),
        ..Default::default()
    });
    parent
}

pub fn rpc(name: &str, input: &str, output: &str) -> MethodDescriptorProto {
    MethodDescriptorProto {
        name: Some(name.to_string()),
        input_type: Some(format!(".{PACKAGE}.{input}")),
        output_type: Some(format!(".{PACKAGE}.{output}")),
        ..Default::default()
    }
}

pub fn service(name: &str, methods: Vec<MethodDescriptorProto>) -> ServiceDescriptorProto {
    ServiceDescriptorProto {
        name: Some(name.to_string()),
        method: methods,
        ..Default::default()
    }
}

pub fn file(messages: Vec<DescriptorProto>, services: Vec<ServiceDescriptorProto>) -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some("test.proto".to_string()),
        package: Some(PACKAGE.to_string()),
        message_type: messages,
        service: services,
        ..Default::default()
    }
}
