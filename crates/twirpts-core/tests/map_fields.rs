//! Map fields: synthetic entry models and their dedicated helpers.

#![allow(non_snake_case)]

mod common;

use common::*;
use prost_types::field_descriptor_proto::Type;
use twirpts_core::GeneratorOptions;
use twirpts_core::codegen::{build_context, generate_typescript};

fn tagged_file() -> prost_types::FileDescriptorProto {
    let foo = with_map_field(
        message("Foo", vec![scalar("id", Type::Int64)]),
        "tags",
        "TagsEntry",
        scalar("key", Type::String),
        scalar("value", Type::String),
    );
    file(vec![foo], vec![service("Tags", vec![rpc("Echo", "Foo", "Foo")])])
}

#[test]
fn build_context___map_field___registers_entry_model_with_details() {
    let ctx = build_context(&tagged_file()).unwrap();

    let entry = ctx.model("FooTagsEntry").unwrap();
    let details = entry.map.as_ref().unwrap();
    assert_eq!(details.name, "FooTags");
    assert_eq!(details.key_field.json_name, "key");
    assert_eq!(details.value_field.json_name, "value");
    assert!(entry.fields.is_empty());
    assert!(entry.can_marshal && entry.can_unmarshal);

    let tags = &ctx.model("Foo").unwrap().fields[1];
    assert_eq!(tags.map_type.as_deref(), Some("Map<string, string>"));
    assert_eq!(tags.ty, "FooTagsEntry[]");
}

#[test]
fn generate_typescript___map_field___uses_map_helpers() {
    let ctx = build_context(&tagged_file()).unwrap();

    let output = generate_typescript(&ctx, &GeneratorOptions::default()).unwrap();

    assert!(output.contains("export interface Foo {\n    id?: number;\n    tags: Map<string, string>;\n}\n"));
    assert!(output.contains("interface FooJSON {\n    id?: number;\n    tags: FooTagsEntryJSON[];\n}\n"));
    assert!(output.contains("        tags: FooTagsMapToJSON(m.tags),\n"));
    assert!(output.contains(
        "        tags: m !== undefined && m.tags !== undefined ? JSONToFooTagsMap(m.tags) : new Map(),\n"
    ));
    assert!(output.contains("const FooTagsMapToJSON = (map: Map<string, string>): FooTagsEntryJSON[] => {"));
    assert!(output.contains("const JSONToFooTagsMap = (entries: FooTagsEntryJSON[]): Map<string, string> => {"));
    assert!(output.contains("interface FooTagsEntryJSON {\n    key: string;\n    value: string;\n}\n"));
    assert!(!output.contains("export interface FooTagsEntry"));
    assert!(!output.contains("FooTagsEntryToJSON"));
    assert!(!output.contains("JSONToFooTagsEntry"));
}

#[test]
fn build_context___map_of_messages___propagates_to_value_type() {
    let catalog = with_map_field(
        message("Catalog", Vec::new()),
        "items",
        "ItemsEntry",
        scalar("key", Type::String),
        message_ref("value", "Item"),
    );
    let item = message("Item", vec![scalar("sku", Type::String)]);
    let file = file(
        vec![message("Query", Vec::new()), catalog, item],
        vec![service("Shop", vec![rpc("List", "Query", "Catalog")])],
    );

    let ctx = build_context(&file).unwrap();
    let output = generate_typescript(&ctx, &GeneratorOptions::default()).unwrap();

    let item = ctx.model("Item").unwrap();
    assert!(item.can_unmarshal);
    assert!(!item.can_marshal);
    assert!(output.contains("const tuple: [string, Item] = [m.key, JSONToItem(m.value)];"));
    assert!(!output.contains("CatalogItemsMapToJSON"));
}

#[test]
fn build_context___map_with_timestamp_value___converts_dates() {
    let events = with_map_field(
        message("Events", Vec::new()),
        "seen",
        "SeenEntry",
        scalar("key", Type::String),
        timestamp("value"),
    );
    let file = file(vec![events], vec![service("Log", vec![rpc("Sync", "Events", "Events")])]);

    let ctx = build_context(&file).unwrap();
    let output = generate_typescript(&ctx, &GeneratorOptions::default()).unwrap();

    assert!(output.contains("            value: m.value.toISOString(),\n"));
    assert!(output.contains("const tuple: [string, Date] = [m.key, new Date(m.value)];"));
    assert!(output.contains("seen: Map<string, Date>;"));
}
