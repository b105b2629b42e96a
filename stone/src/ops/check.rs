//! Check operation - API model validation.

use std::path::Path;

use stone_codegen::TypeMapper;
use stone_codegen_js::{JsTypeMapper, function_name};
use stone_ir::{Api, DataType, Namespace, Route, Scope};

use crate::reports::{CheckReport, NamespaceSummary, RouteSummary};

/// Execute the check operation.
///
/// Resolves every route's argument, result and error type, every field of
/// the argument, and every declared type, the same way the generator would.
/// Problems are collected instead of stopping at the first one.
pub fn check(api: &Api, api_path: &Path) -> CheckReport {
    let mut errors = Vec::new();
    let mut namespaces = Vec::new();

    for namespace in &api.namespaces {
        let scope = Scope::new(api, namespace);

        for def in &namespace.types {
            let data_type = DataType::reference(def.name());
            if let Err(msg) = check_type(scope, &data_type) {
                errors.push(format!("type '{}.{}': {msg}", namespace.name, def.name()));
            }
        }

        for route in &namespace.routes {
            if let Err(msg) = check_route(scope, route) {
                errors.push(format!("route '{}/{}': {msg}", namespace.name, route.name));
            }
        }

        namespaces.push(summarize(namespace));
    }

    tracing::debug!(problems = errors.len(), "checked API model");

    CheckReport {
        api_path: api_path.to_path_buf(),
        errors,
        namespaces,
    }
}

fn check_route(scope: Scope<'_>, route: &Route) -> Result<(), String> {
    let mapper = JsTypeMapper;
    for (role, data_type) in [
        ("argument", &route.arg),
        ("result", &route.result),
        ("error", &route.error),
    ] {
        mapper
            .map_field_type(scope, data_type)
            .map_err(|e| format!("{role} type: {e}"))?;
    }
    check_type(scope, &route.arg)
}

/// The type itself, with alias and nullable layers stripped, and each of its
/// fields must render.
fn check_type(scope: Scope<'_>, data_type: &DataType) -> Result<(), String> {
    let mapper = JsTypeMapper;
    mapper
        .map_field_type(scope, data_type)
        .map_err(|e| e.to_string())?;

    for scoped in scope.all_fields(data_type).map_err(|e| e.to_string())? {
        mapper
            .map_field_type(scoped.scope, &scoped.field.data_type)
            .map_err(|e| format!("field '{}': {e}", scoped.field.name))?;
    }
    Ok(())
}

fn summarize(namespace: &Namespace) -> NamespaceSummary {
    NamespaceSummary {
        name: namespace.name.clone(),
        routes: namespace
            .routes
            .iter()
            .map(|route| RouteSummary {
                path: format!("{}/{}", namespace.name, route.name),
                function: function_name(&namespace.name, &route.name),
                deprecated: route.deprecated,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use stone_ir::{AliasDef, Field, StructDef};

    use super::*;

    fn check_api(api: &Api) -> CheckReport {
        check(api, Path::new("api.json"))
    }

    #[test]
    fn test_valid_model() {
        let api = Api::new([Namespace::new("files")
            .with_type(StructDef::new("ListArg").field(Field::new("path", DataType::string())))
            .route(Route::new(
                "list",
                DataType::reference("ListArg"),
                DataType::list(DataType::string()),
            ))
            .route(Route::new("remove", DataType::string(), DataType::void()).deprecated())]);

        let report = check_api(&api);

        assert!(report.is_valid());
        assert_eq!(report.route_count(), 2);
        assert_eq!(report.namespaces[0].routes[0].function, "filesList");
        assert_eq!(report.namespaces[0].routes[1].path, "files/remove");
        assert!(report.namespaces[0].routes[1].deprecated);
    }

    #[test]
    fn test_collects_every_problem() {
        let api = Api::new([Namespace::new("files")
            .with_type(
                StructDef::new("ListArg")
                    .field(Field::new("cursor", DataType::reference("Cursor"))),
            )
            .route(Route::new(
                "list",
                DataType::reference("ListArg"),
                DataType::void(),
            ))
            .route(
                Route::new("get", DataType::string(), DataType::void())
                    .error(DataType::reference("GetError")),
            )]);

        let report = check_api(&api);

        assert!(!report.is_valid());
        assert_eq!(
            report.errors,
            [
                "type 'files.ListArg': field 'cursor': unknown type 'files.Cursor'",
                "route 'files/list': field 'cursor': unknown type 'files.Cursor'",
                "route 'files/get': error type: unknown type 'files.GetError'",
            ]
        );
    }

    #[test]
    fn test_alias_cycle_reported() {
        let api = Api::new([Namespace::new("ns")
            .with_type(AliasDef::new("A", DataType::reference("B")))
            .with_type(AliasDef::new("B", DataType::reference("A")))
            .route(Route::new(
                "r",
                DataType::nullable(DataType::reference("A")),
                DataType::void(),
            ))]);

        let report = check_api(&api);

        assert_eq!(report.errors.len(), 3);
        assert!(report.errors[2].starts_with("route 'ns/r': argument type: alias"));
    }
}
