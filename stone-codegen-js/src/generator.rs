//! JavaScript client generator.

use std::path::Path;

use eyre::{Result, WrapErr};
use stone_codegen::{
    IdentityResolver, TagResolver,
    language::{GenerateResult, LanguageCodegen, PreviewFile},
};
use stone_core::GeneratedFile;
use stone_ir::{Api, Scope};

use crate::{
    ast::JsDoc,
    code_file::{CodeFile, RawCode},
    files::RoutesJs,
    route::{RouteEmitter, RouteStub},
};

const BANNER: &str = "// Auto-generated by Stone, do not modify.";

/// Options for a JavaScript client generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsClientConfig {
    /// Output file, relative to the output directory.
    pub filename: String,
    /// Route attributes passed to `this.request` after `arg`, in order.
    pub route_attributes: Vec<String>,
}

impl JsClientConfig {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            route_attributes: Vec::new(),
        }
    }

    pub fn route_attribute(mut self, name: impl Into<String>) -> Self {
        self.route_attributes.push(name.into());
        self
    }
}

/// Generates a single JavaScript file with one stub per route.
///
/// Stubs delegate to `this.request`, which the caller supplies when
/// binding the exported `routes` object to a client.
pub struct Generator<'a> {
    api: &'a Api,
    config: JsClientConfig,
    resolver: Box<dyn TagResolver + 'a>,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "javascript"
    }

    fn file_extension(&self) -> &'static str {
        "js"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        let file = self.routes_file()?;
        Ok(vec![PreviewFile {
            path: file.filename().to_string(),
            content: file.content().to_string(),
        }])
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let path = self.routes_file()?.write(output_dir)?;
        tracing::info!(
            path = %path.display(),
            routes = self.api.route_count(),
            "generated JavaScript client"
        );
        Ok(GenerateResult {
            written: vec![path],
        })
    }
}

impl<'a> Generator<'a> {
    pub fn new(api: &'a Api, config: JsClientConfig) -> Self {
        Self {
            api,
            config,
            resolver: Box::new(IdentityResolver),
        }
    }

    /// Use `resolver` for reference markers in documentation.
    pub fn with_resolver(mut self, resolver: impl TagResolver + 'a) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn config(&self) -> &JsClientConfig {
        &self.config
    }

    /// Render the whole client file.
    ///
    /// Fails on the first route whose types cannot be resolved.
    pub fn render(&self) -> Result<String> {
        let stubs = self.route_stubs()?;

        Ok(CodeFile::new()
            .preamble(RawCode::lines([BANNER]))
            .preamble(
                JsDoc::new()
                    .tag("@class Routes")
                    .tag("@classdesc Contains a corresponding method for each route."),
            )
            .preamble(RawCode::lines(["var routes = {};"]))
            .add_all(stubs)
            .trailer(RawCode::lines(["module.exports = routes;"]))
            .render())
    }

    /// The client file, fully rendered.
    pub fn routes_file(&self) -> Result<RoutesJs> {
        Ok(RoutesJs::new(&self.config.filename, self.render()?))
    }

    fn route_stubs(&self) -> Result<Vec<RouteStub>> {
        let emitter = RouteEmitter::new(self.resolver.as_ref(), &self.config.route_attributes);

        self.api
            .routes()
            .map(|(namespace, route)| {
                emitter
                    .emit(Scope::new(self.api, namespace), route)
                    .wrap_err_with(|| {
                        format!("failed to generate route '{}/{}'", namespace.name, route.name)
                    })
            })
            .collect()
    }
}
