//! Naming convention utilities for code generation.
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `snake_case` | [`to_camel_case`] | `snakeCase` |
//! | `SayHello` | [`lower_first`] | `sayHello` |
//! | `.pkg.Outer.Inner` | [`strip_package`] | `OuterInner` |
//! | `.Outer.Inner` | [`flatten_prefix`] | `OuterInner` |
//! | `dir/service.proto` | [`module_filename`] | `service.ts` |

/// Convert a snake_case schema field name to lowerCamel.
///
/// The first word is lowercased; each following word is capitalized with the
/// rest of it lowercased.
///
/// # Examples
///
/// ```
/// use twirpts_core::codegen::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("created_at"), "createdAt");
/// assert_eq!(to_camel_case("ID"), "id");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::new();

    for (i, part) in s.split('_').enumerate() {
        if i == 0 {
            result.push_str(&part.to_lowercase());
            continue;
        }

        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(&chars.as_str().to_lowercase());
        }
    }

    result
}

/// Lowercase the first character of a string.
///
/// # Examples
///
/// ```
/// use twirpts_core::codegen::naming::lower_first;
///
/// assert_eq!(lower_first("SayHello"), "sayHello");
/// assert_eq!(lower_first(""), "");
/// ```
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Remove dots from a namespace prefix.
pub fn flatten_prefix(prefix: &str) -> String {
    prefix.replace('.', "")
}

/// Turn a fully-qualified protobuf type name into a local model name.
///
/// Strips the leading `.<package>.` and flattens the remaining nesting.
///
/// # Examples
///
/// ```
/// use twirpts_core::codegen::naming::strip_package;
///
/// assert_eq!(strip_package(".acme.v1.Order.Line", "acme.v1"), "OrderLine");
/// assert_eq!(strip_package(".Order", ""), "Order");
/// ```
pub fn strip_package(type_name: &str, package: &str) -> String {
    let local = type_name
        .strip_prefix('.')
        .unwrap_or(type_name)
        .strip_prefix(package)
        .and_then(|rest| rest.strip_prefix('.'))
        .filter(|_| !package.is_empty())
        .unwrap_or_else(|| type_name.strip_prefix('.').unwrap_or(type_name));

    flatten_prefix(local)
}

/// Output module file name for a schema file.
///
/// Drops the directory and the `.proto`/`.protodevel` extension, then appends `.ts`.
///
/// # Examples
///
/// ```
/// use twirpts_core::codegen::naming::module_filename;
///
/// assert_eq!(module_filename("acme/v1/service.proto"), "service.ts");
/// ```
pub fn module_filename(proto_name: &str) -> String {
    let base = proto_name.rsplit('/').next().unwrap_or(proto_name);
    let stem = base
        .strip_suffix(".proto")
        .or_else(|| base.strip_suffix(".protodevel"))
        .unwrap_or(base);

    format!("{stem}.ts")
}
