//! TypeScript module generation from a closed [`ApiContext`].
//!
//! Output layout:
//!
//! 1. imports of `resolve` and the Twirp runtime module
//! 2. per model: interface, JSON interface, then the JSON helpers its
//!    marshal flags ask for
//! 3. per service: a method interface and a `fetch`-based client class
//!
//! Map-entry models never get an interface of their own. Their helpers
//! (`FooTagsMapToJSON`, `JSONToFooTagsMap`) convert between a `Map` and the
//! array of entries sent on the wire.

use super::ir::{ApiContext, JSON_SUFFIX, MapDetails, Model, ModelField, Service};
use super::writer::CodeWriter;
use crate::config::GeneratorOptions;
use crate::error::{GenerateError, GenerateResult};
use std::fmt;

/// Render the module for a closed registry.
pub fn generate_typescript(ctx: &ApiContext, options: &GeneratorOptions) -> GenerateResult<String> {
    let mut blocks = vec![render_imports(&options.runtime_module).map_err(GenerateError::render("imports"))?];

    for model in ctx.models().iter().filter(|m| !m.primitive) {
        render_model(model, &mut blocks).map_err(GenerateError::render(format!("model {}", model.name)))?;
    }

    for service in ctx.services() {
        let context = format!("service {}", service.name);
        blocks.push(render_service_interface(service).map_err(GenerateError::render(context.as_str()))?);
        blocks.push(render_client(service).map_err(GenerateError::render(context))?);
    }

    tracing::debug!(
        "Rendered {} blocks for {} models and {} services",
        blocks.len(),
        ctx.models().len(),
        ctx.services().len()
    );
    Ok(blocks.join("\n"))
}

fn render_imports(runtime_module: &str) -> Result<String, fmt::Error> {
    let mut w = CodeWriter::new();
    w.line("import {resolve} from 'url';")?;
    w.line(&format!(
        "import {{createTwirpRequest, throwTwirpError, Fetch}} from '{runtime_module}';"
    ))?;
    Ok(w.finish())
}

fn render_model(model: &Model, blocks: &mut Vec<String>) -> fmt::Result {
    if model.map.is_none() {
        blocks.push(render_interface(model)?);
    }
    blocks.push(render_json_interface(model)?);

    match &model.map {
        Some(details) => {
            if model.can_marshal {
                blocks.push(render_map_marshal(model, details)?);
            }
            if model.can_unmarshal {
                blocks.push(render_map_unmarshal(model, details)?);
            }
        }
        None => {
            if model.can_marshal {
                blocks.push(render_marshal(model)?);
            }
            if model.can_unmarshal {
                blocks.push(render_unmarshal(model)?);
            }
        }
    }

    Ok(())
}

fn render_interface(model: &Model) -> Result<String, fmt::Error> {
    let mut w = CodeWriter::new();
    w.block(&format!("export interface {} {{", model.name), "}", |w| {
        for field in &model.fields {
            let optional = if field.is_repeated { "" } else { "?" };
            let ty = field.map_type.as_deref().unwrap_or(&field.ty);
            w.line(&format!("{}{optional}: {ty};", field.name))?;
        }
        Ok(())
    })?;
    Ok(w.finish())
}

fn render_json_interface(model: &Model) -> Result<String, fmt::Error> {
    let mut w = CodeWriter::new();
    w.block(&format!("interface {}{JSON_SUFFIX} {{", model.name), "}", |w| {
        for field in model.wire_fields() {
            let optional = if field.is_repeated || model.is_map() { "" } else { "?" };
            w.line(&format!("{}{optional}: {};", field.json_name, field.json_type))?;
        }
        Ok(())
    })?;
    Ok(w.finish())
}

fn render_marshal(model: &Model) -> Result<String, fmt::Error> {
    let name = &model.name;
    let param = if model.fields.is_empty() { "_" } else { "m" };

    let mut w = CodeWriter::new();
    w.block(
        &format!("const {name}ToJSON = ({param}: {name}): {name}{JSON_SUFFIX} => {{"),
        "};",
        |w| {
            object_literal(w, model.fields.iter().map(|f| (f.json_name.as_str(), guarded_marshal(f))))
        },
    )?;
    Ok(w.finish())
}

fn render_unmarshal(model: &Model) -> Result<String, fmt::Error> {
    let name = &model.name;
    let param = if model.fields.is_empty() { "_" } else { "m" };

    let mut w = CodeWriter::new();
    w.block(
        &format!("const JSONTo{name} = ({param}?: {name}{JSON_SUFFIX}): {name} => {{"),
        "};",
        |w| object_literal(w, model.fields.iter().map(|f| (f.name.as_str(), guarded_unmarshal(f)))),
    )?;
    Ok(w.finish())
}

fn render_map_marshal(model: &Model, details: &MapDetails) -> Result<String, fmt::Error> {
    let map_type = map_signature(details);

    let mut w = CodeWriter::new();
    w.block(
        &format!(
            "const {}MapToJSON = (map: {map_type}): {}{JSON_SUFFIX}[] => {{",
            details.name, model.name
        ),
        "};",
        |w| {
            w.block("return Array.from(map.entries()).map(([key, value]) => {", "});", |w| {
                w.line("const m = {key: key, value: value};")?;
                object_literal(
                    w,
                    model
                        .wire_fields()
                        .into_iter()
                        .map(|f| (f.json_name.as_str(), marshal_expr(f))),
                )
            })
        },
    )?;
    Ok(w.finish())
}

fn render_map_unmarshal(model: &Model, details: &MapDetails) -> Result<String, fmt::Error> {
    let map_type = map_signature(details);

    let mut w = CodeWriter::new();
    w.block(
        &format!(
            "const JSONTo{}Map = (entries: {}{JSON_SUFFIX}[]): {map_type} => {{",
            details.name, model.name
        ),
        "};",
        |w| {
            w.block("return new Map(entries.map((m) => {", "}));", |w| {
                w.line(&format!(
                    "const tuple: [{}, {}] = [{}, {}];",
                    details.key_field.ty,
                    details.value_field.ty,
                    unmarshal_expr(&details.key_field),
                    unmarshal_expr(&details.value_field)
                ))?;
                w.line("return tuple;")
            })
        },
    )?;
    Ok(w.finish())
}

/// `return { key: value, ... };`, collapsing to `return {};` without entries.
fn object_literal<'a, I>(w: &mut CodeWriter, entries: I) -> fmt::Result
where
    I: IntoIterator<Item = (&'a str, String)>,
{
    let entries: Vec<_> = entries.into_iter().collect();
    if entries.is_empty() {
        return w.line("return {};");
    }

    w.block("return {", "};", |w| {
        for (key, value) in &entries {
            w.line(&format!("{key}: {value},"))?;
        }
        Ok(())
    })
}

fn render_service_interface(service: &Service) -> Result<String, fmt::Error> {
    let mut w = CodeWriter::new();
    w.block(&format!("export interface {} {{", service.name), "}", |w| {
        for method in &service.methods {
            w.line(&format!(
                "{}: ({}: {}) => Promise<{}>;",
                method.name, method.input_arg, method.input_type, method.output_type
            ))?;
        }
        Ok(())
    })?;
    Ok(w.finish())
}

fn render_client(service: &Service) -> Result<String, fmt::Error> {
    let mut w = CodeWriter::new();
    w.block(
        &format!("export class {0}Client implements {0} {{", service.name),
        "}",
        |w| {
            w.line("private hostname: string;")?;
            w.line("private fetch: Fetch;")?;
            w.line(&format!("private pathPrefix = \"{}\";", service.path_prefix()))?;
            w.blank()?;
            w.block("constructor(hostname: string, fetch: Fetch) {", "}", |w| {
                w.line("this.hostname = hostname;")?;
                w.line("this.fetch = fetch;")
            })?;

            for method in &service.methods {
                w.blank()?;
                w.block(
                    &format!(
                        "{}({}: {}): Promise<{}> {{",
                        method.name, method.input_arg, method.input_type, method.output_type
                    ),
                    "}",
                    |w| {
                        w.line(&format!(
                            "const url = resolve(this.hostname, this.pathPrefix + \"{}\");",
                            method.path
                        ))?;
                        w.block(
                            &format!(
                                "return this.fetch(createTwirpRequest(url, {}ToJSON({}))).then((resp) => {{",
                                method.input_type, method.input_arg
                            ),
                            "});",
                            |w| {
                                w.block("if (!resp.ok) {", "}", |w| w.line("return throwTwirpError(resp);"))?;
                                w.blank()?;
                                w.line(&format!("return resp.json().then(JSONTo{});", method.output_type))
                            },
                        )
                    },
                )?;
            }
            Ok(())
        },
    )?;
    Ok(w.finish())
}

fn map_signature(details: &MapDetails) -> String {
    format!("Map<{}, {}>", details.key_field.ty, details.value_field.ty)
}

/// Helper name prefix for a map field: its entry type without `Entry`.
fn map_helper_name(field: &ModelField) -> &str {
    let base = field.base_type();
    base.strip_suffix("Entry").unwrap_or(base)
}

/// Expression converting `m.<name>` of the TypeScript shape to JSON.
pub fn marshal_expr(field: &ModelField) -> String {
    let value = format!("m.{}", field.name);

    if field.map_type.is_some() {
        format!("{}MapToJSON({value})", map_helper_name(field))
    } else if field.is_timestamp && field.is_repeated {
        format!("{value}.map((n) => n.toISOString())")
    } else if field.is_timestamp {
        format!("{value}.toISOString()")
    } else if field.is_message && field.is_repeated {
        format!("{value}.map({}ToJSON)", field.base_type())
    } else if field.is_message {
        format!("{}ToJSON({value})", field.base_type())
    } else {
        value
    }
}

/// Expression converting `m.<json_name>` of the JSON shape back.
pub fn unmarshal_expr(field: &ModelField) -> String {
    let value = format!("m.{}", field.json_name);

    if field.map_type.is_some() {
        format!("JSONTo{}Map({value})", map_helper_name(field))
    } else if field.is_timestamp && field.is_repeated {
        format!("{value}.map((n) => new Date(n))")
    } else if field.is_timestamp {
        format!("new Date({value})")
    } else if field.is_message && field.is_repeated {
        format!("{value}.map(JSONTo{})", field.base_type())
    } else if field.is_message {
        format!("JSONTo{}({value})", field.base_type())
    } else {
        value
    }
}

fn guarded_marshal(field: &ModelField) -> String {
    let expr = marshal_expr(field);
    if field.is_message && !field.is_repeated {
        format!("m.{} !== undefined ? {expr} : undefined", field.name)
    } else {
        expr
    }
}

fn guarded_unmarshal(field: &ModelField) -> String {
    let expr = unmarshal_expr(field);
    let fallback = if field.map_type.is_some() {
        "new Map()"
    } else if field.is_repeated {
        "[]"
    } else {
        "undefined"
    };

    if field.is_message || field.is_repeated {
        format!("m !== undefined && m.{} !== undefined ? {expr} : {fallback}", field.json_name)
    } else {
        format!("m !== undefined ? {expr} : {fallback}")
    }
}
