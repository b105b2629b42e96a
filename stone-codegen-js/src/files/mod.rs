//! JavaScript file generators.

mod routes_js;

pub use routes_js::RoutesJs;
