//! Route stub emission.

use eyre::Result;
use stone_codegen::{CodeFragment, Renderable, TagResolver, TypeMapper, process_doc};
use stone_ir::{Route, Scope, ScopedField};

use crate::{
    ast::{FnAssign, JsDoc, Return},
    literal::format_literal,
    naming::function_name,
    type_mapper::JsTypeMapper,
};

/// A documented stub for one route.
#[derive(Debug, Clone)]
pub struct RouteStub {
    name: String,
    doc: JsDoc,
    function: FnAssign,
}

impl RouteStub {
    /// The generated function name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Renderable for RouteStub {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.doc.to_fragments();
        fragments.extend(self.function.to_fragments());
        fragments
    }
}

/// Builds the stub for each route.
pub struct RouteEmitter<'g> {
    resolver: &'g dyn TagResolver,
    route_attributes: &'g [String],
}

impl<'g> RouteEmitter<'g> {
    pub fn new(resolver: &'g dyn TagResolver, route_attributes: &'g [String]) -> Self {
        Self {
            resolver,
            route_attributes,
        }
    }

    /// Build the stub for `route`, declared in the namespace of `scope`.
    pub fn emit(&self, scope: Scope<'_>, route: &Route) -> Result<RouteStub> {
        let namespace = &scope.namespace().name;
        let name = function_name(namespace, &route.name);
        let mapper = JsTypeMapper;

        let mut doc = JsDoc::new();
        if let Some(text) = route.doc_text() {
            doc = doc.text(process_doc(text, self.resolver));
        }
        doc = doc
            .tag(format!("@function Routes#{name}"))
            .tag_if(route.deprecated, "@deprecated")
            .tag(format!(
                "@arg {{{}}} arg - The request parameters.",
                mapper.map_type(scope, &route.arg)?
            ));

        if scope.is_user_defined(&route.arg)? {
            for ScopedField {
                field,
                scope: field_scope,
            } in scope.all_fields(&route.arg)?
            {
                let field_type = mapper.map_field_type(field_scope, &field.data_type)?;
                let field_doc = match field.doc.as_deref() {
                    Some(text) if !text.is_empty() => {
                        format!(" - {}", process_doc(text, self.resolver))
                    }
                    _ => String::new(),
                };
                doc = doc.text(format!("@arg {{{field_type}}} arg.{}{field_doc}", field.name));
            }
        }

        doc = doc.tag(format!(
            "@returns {{{}}}",
            mapper.map_type(scope, &route.result)?
        ));

        let function = FnAssign::new(format!("routes.{name}"))
            .param("arg")
            .body_line(self.request_call(namespace, route)?.build());

        tracing::debug!(namespace = %namespace, route = %route.name, function = %name, "emitted route");

        Ok(RouteStub {
            name,
            doc,
            function,
        })
    }

    /// `this.request(path, arg, ...)`, with one trailing literal per
    /// configured attribute.
    fn request_call(&self, namespace: &str, route: &Route) -> Result<Return> {
        let path = format!("{namespace}/{}", route.name);
        let call = Return::call("this.request");

        if self.route_attributes.is_empty() {
            return Ok(call.arg(format!("\"{path}\"")).arg("arg"));
        }

        let literals = self
            .route_attributes
            .iter()
            .map(|attr| format_literal(route.attrs.get(attr)))
            .collect::<Result<Vec<_>>>()?;
        Ok(call.arg(format!("'{path}'")).arg("arg").args(literals))
    }
}
