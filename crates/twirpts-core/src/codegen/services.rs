//! Projection of schema services into client method descriptors.

use super::ir::{Service, ServiceMethod};
use super::naming::{lower_first, strip_package};
use prost_types::{MethodDescriptorProto, ServiceDescriptorProto};

/// Build the IR service for a schema service declared in `package`.
pub fn build_service(service: &ServiceDescriptorProto, package: &str) -> Service {
    let methods = service
        .method
        .iter()
        .map(|method| {
            if method.client_streaming() || method.server_streaming() {
                tracing::warn!(
                    "{}.{} is streaming; Twirp clients send a single request and response",
                    service.name(),
                    method.name()
                );
            }
            build_method(method, package)
        })
        .collect();

    Service {
        name: service.name().to_string(),
        package: package.to_string(),
        methods,
    }
}

/// Build one client method.
///
/// The route path keeps the schema method name exactly, since the server
/// dispatches on it.
pub fn build_method(method: &MethodDescriptorProto, package: &str) -> ServiceMethod {
    let path = method.name().to_string();
    let input_type = strip_package(method.input_type(), package);

    ServiceMethod {
        name: lower_first(&path),
        input_arg: lower_first(&input_type),
        output_type: strip_package(method.output_type(), package),
        input_type,
        path,
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    fn method(name: &str, input: &str, output: &str) -> MethodDescriptorProto {
        MethodDescriptorProto {
            name: Some(name.to_string()),
            input_type: Some(input.to_string()),
            output_type: Some(output.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn build_method___derives_names_and_keeps_route_case() {
        let built = build_method(&method("SayHello", ".pkg.HelloReq", ".pkg.HelloResp"), "pkg");

        assert_eq!(built.name, "sayHello");
        assert_eq!(built.path, "SayHello");
        assert_eq!(built.input_arg, "helloReq");
        assert_eq!(built.input_type, "HelloReq");
        assert_eq!(built.output_type, "HelloResp");
    }

    #[test]
    fn build_method___nested_types___are_flattened() {
        let built = build_method(
            &method("GetLine", ".shop.v1.Order.LineQuery", ".shop.v1.Order.Line"),
            "shop.v1",
        );

        assert_eq!(built.input_type, "OrderLineQuery");
        assert_eq!(built.input_arg, "orderLineQuery");
        assert_eq!(built.output_type, "OrderLine");
    }

    #[test]
    fn build_service___keeps_method_order_and_package() {
        let service = ServiceDescriptorProto {
            name: Some("Haberdasher".to_string()),
            method: vec![
                method("MakeHat", ".pkg.Size", ".pkg.Hat"),
                method("ListHats", ".pkg.Size", ".pkg.Hats"),
            ],
            ..Default::default()
        };

        let built = build_service(&service, "pkg");

        assert_eq!(built.name, "Haberdasher");
        assert_eq!(built.package, "pkg");
        let paths: Vec<&str> = built.methods.iter().map(|m| m.path.as_str()).collect();
        assert_eq!(paths, vec!["MakeHat", "ListHats"]);
    }
}
