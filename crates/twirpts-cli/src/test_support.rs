//! Descriptor fixtures for the subcommand tests

use prost::Message;
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{
    DescriptorProto, FieldDescriptorProto, FileDescriptorProto, FileDescriptorSet, MethodDescriptorProto,
    ServiceDescriptorProto,
};
use std::path::{Path, PathBuf};

fn string_field(name: &str) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(1),
        r#type: Some(Type::String as i32),
        label: Some(Label::Optional as i32),
        ..Default::default()
    }
}

/// Schema file `name` declaring `HelloReq`, `HelloResp` and a `Greeter` service
pub fn greeter_file(name: &str) -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some(name.to_string()),
        package: Some("pkg".to_string()),
        message_type: vec![
            DescriptorProto {
                name: Some("HelloReq".to_string()),
                field: vec![string_field("name")],
                ..Default::default()
            },
            DescriptorProto {
                name: Some("HelloResp".to_string()),
                field: vec![string_field("message")],
                ..Default::default()
            },
        ],
        service: vec![ServiceDescriptorProto {
            name: Some("Greeter".to_string()),
            method: vec![MethodDescriptorProto {
                name: Some("SayHello".to_string()),
                input_type: Some(".pkg.HelloReq".to_string()),
                output_type: Some(".pkg.HelloResp".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }],
        ..Default::default()
    }
}

/// Write a descriptor set holding `files` to `<dir>/set.pb`
pub fn write_descriptor_set(dir: &Path, files: Vec<FileDescriptorProto>) -> PathBuf {
    let path = dir.join("set.pb");
    std::fs::write(&path, FileDescriptorSet { file: files }.encode_to_vec()).unwrap();
    path
}
