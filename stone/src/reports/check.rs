//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from API model validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the API model.
    pub api_path: PathBuf,
    /// One message per type or route that failed to resolve.
    pub errors: Vec<String>,
    /// Routes per namespace, in declaration order.
    pub namespaces: Vec<NamespaceSummary>,
}

#[derive(Debug)]
pub struct NamespaceSummary {
    pub name: String,
    pub routes: Vec<RouteSummary>,
}

#[derive(Debug)]
pub struct RouteSummary {
    /// `namespace/route`
    pub path: String,
    /// Name of the generated stub.
    pub function: String,
    pub deprecated: bool,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn route_count(&self) -> usize {
        self.namespaces.iter().map(|ns| ns.routes.len()).sum()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.api_path.display()));
        out.newline();

        let count = self.route_count();
        out.preformatted(&format!(
            "  {} namespace{}, {} route{}",
            self.namespaces.len(),
            if self.namespaces.len() == 1 { "" } else { "s" },
            count,
            if count == 1 { "" } else { "s" },
        ));

        for namespace in &self.namespaces {
            out.newline();
            out.section(&namespace.name);
            for route in &namespace.routes {
                let deprecated = if route.deprecated { " (deprecated)" } else { "" };
                out.list_item(&format!("{} -> {}{deprecated}", route.path, route.function));
            }
        }
    }
}
