//! JavaScript function builders.

use stone_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A function expression assigned to a property:
///
/// ```text
/// routes.filesList = function (arg) {
///   ...
/// };
/// ```
#[derive(Debug, Clone)]
pub struct FnAssign {
    target: String,
    params: Vec<String>,
    body: Vec<String>,
}

impl FnAssign {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn param(mut self, name: impl Into<String>) -> Self {
        self.params.push(name.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::javascript();
        builder.emit(self);
        builder.build()
    }

    fn format_header(&self) -> String {
        format!("{} = function ({}) {{", self.target, self.params.join(", "))
    }
}

impl Renderable for FnAssign {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = self
            .body
            .iter()
            .map(|line| CodeFragment::line(line.as_str()))
            .collect();

        vec![CodeFragment::block(
            self.format_header(),
            body,
            Some("};".to_string()),
        )]
    }
}

/// A `return callee(args...);` statement.
#[derive(Debug, Clone)]
pub struct Return {
    callee: String,
    args: Vec<String>,
}

impl Return {
    pub fn call(callee: impl Into<String>) -> Self {
        Self {
            callee: callee.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument, already rendered as JavaScript.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args(mut self, args: impl IntoIterator<Item = String>) -> Self {
        self.args.extend(args);
        self
    }

    pub fn build(&self) -> String {
        format!("return {}({});", self.callee, self.args.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_assign() {
        let f = FnAssign::new("routes.filesList")
            .param("arg")
            .body_line("return this.request(\"files/list\", arg);")
            .build();
        assert_eq!(
            f,
            "routes.filesList = function (arg) {\n  return this.request(\"files/list\", arg);\n};\n"
        );
    }

    #[test]
    fn test_fn_assign_no_params() {
        let f = FnAssign::new("routes.ping").build();
        assert_eq!(f, "routes.ping = function () {\n};\n");
    }

    #[test]
    fn test_return_call() {
        let stmt = Return::call("this.request")
            .arg("'files/list'")
            .arg("arg")
            .args(["'content'".to_string(), "null".to_string()]);
        assert_eq!(
            stmt.build(),
            "return this.request('files/list', arg, 'content', null);"
        );
    }
}
