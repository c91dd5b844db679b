#![allow(non_snake_case)]

use super::*;
use prost::Message;

#[test]
fn GenerateError___unknown_model___names_type_and_referrer() {
    let err = GenerateError::unknown_model("Missing", "Order.item");

    let display = err.to_string();

    assert_eq!(
        display,
        "could not find model of type Missing referenced by Order.item"
    );
}

#[test]
fn GenerateError___invalid_map_entry___names_missing_field() {
    let err = GenerateError::InvalidMapEntry {
        model: "FooTagsEntry".into(),
        missing: "value",
    };

    assert_eq!(err.to_string(), "map entry FooTagsEntry has no `value` field");
}

#[test]
fn GenerateError___render___keeps_item_context() {
    let err = GenerateError::render("model HelloReq")(std::fmt::Error);

    assert!(matches!(err, GenerateError::Render { ref item, .. } if item == "model HelloReq"));
    assert!(err.to_string().starts_with("failed to render model HelloReq"));
}

#[test]
fn GenerateError___from_serde_error___converts_to_invalid_parameter() {
    let json_err = serde_json::from_str::<String>("invalid").unwrap_err();

    let err: GenerateError = json_err.into();

    assert!(matches!(err, GenerateError::InvalidParameter(_)));
}

#[test]
fn GenerateError___from_toml_error___converts_to_invalid_parameter() {
    let toml_err = toml::from_str::<toml::Table>("= nope").unwrap_err();

    let err: GenerateError = toml_err.into();

    assert!(matches!(err, GenerateError::InvalidParameter(_)));
}

#[test]
fn GenerateError___from_decode_error___converts_to_decode() {
    let decode_err = prost_types::FileDescriptorProto::decode(&[0xff_u8, 0xff][..]).unwrap_err();

    let err: GenerateError = decode_err.into();

    assert!(matches!(err, GenerateError::Decode(_)));
}
