//! JavaScript client generator for Stone API models.
//!
//! Produces one self-contained JavaScript file exposing one stub per route.
//! Each stub documents its argument with JSDoc and delegates to a
//! caller-supplied `this.request(path, arg, ...)`.
//!
//! # Usage
//!
//! ```ignore
//! use stone_codegen::LanguageCodegen;
//! use stone_codegen_js::{Generator, JsClientConfig};
//! use std::path::Path;
//!
//! let config = JsClientConfig::new("routes.js").route_attribute("host");
//! let generator = Generator::new(&api, config);
//!
//! // Preview files without writing
//! let files = generator.preview()?;
//!
//! // Write the file
//! let result = generator.generate(Path::new("output"))?;
//! ```
//!
//! # Generated Output
//!
//! ```text
//! // Auto-generated by Stone, do not modify.
//! /**
//!  * @class Routes
//!  * @classdesc Contains a corresponding method for each route.
//!  */
//! var routes = {};
//!
//! /**
//!  * @function Routes#filesList
//!  * @arg {ListArg} arg - The request parameters.
//!  * @arg {string} arg.path
//!  * @returns {Array.<string>}
//!  */
//! routes.filesList = function (arg) {
//!   return this.request("files/list", arg);
//! };
//!
//! module.exports = routes;
//! ```

mod code_file;
mod generator;
mod literal;
mod naming;
mod route;
mod type_mapper;

pub mod ast;
pub mod files;

pub use code_file::{CodeFile, RawCode};
pub use generator::{Generator, JsClientConfig};
pub use literal::format_literal;
pub use naming::function_name;
pub use route::{RouteEmitter, RouteStub};
pub use stone_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use type_mapper::JsTypeMapper;
