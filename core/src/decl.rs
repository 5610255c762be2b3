use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// `<type> <name> ( <type> <ident>, ... )` anywhere after a quote-free prefix.
// The prefix is lazy and may span lines; `^` matches at every line start.
static FUNC_DECL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^[^"]*?([a-z]+)\s+([a-zA-Z0-9_]+)\s*\(\s*((?:[a-z]+\s+[a-zA-Z0-9_]+\s*,?\s*)*)\)"#)
        .expect("function declaration pattern is valid")
});

/// A user-defined function found by [`scan_function_decls`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionSignature {
    pub return_type: String,
    pub name: String,
    /// Parameters as written (`int a`), in source order.
    pub parameters: Vec<String>,
    /// `<type> <name> (<p1>, <p2>)`
    pub rendered: String,
}

impl FunctionSignature {
    pub fn new(return_type: impl Into<String>, name: impl Into<String>, parameters: Vec<String>) -> Self {
        let return_type = return_type.into();
        let name = name.into();
        let rendered = render_signature(&return_type, &name, &parameters);
        Self {
            return_type,
            name,
            parameters,
            rendered,
        }
    }
}

pub fn render_signature(return_type: &str, name: &str, parameters: &[String]) -> String {
    format!("{} {} ({})", return_type, name, parameters.join(", "))
}

/// Collect every function declaration in `text`, in source order.
///
/// This is a pattern match over raw text: string literals and comments are
/// not skipped, and statements such as `return foo()` look like a
/// declaration of `foo` returning `return`.
pub fn scan_function_decls(text: &str) -> Vec<FunctionSignature> {
    FUNC_DECL_RE
        .captures_iter(text)
        .map(|caps| {
            let return_type = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let name = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
            let parameters = caps
                .get(3)
                .map(|m| split_parameters(m.as_str()))
                .unwrap_or_default();
            FunctionSignature::new(return_type, name, parameters)
        })
        .collect()
}

/// First declaration named `name`, if any.
pub fn find_function_decl<'a>(decls: &'a [FunctionSignature], name: &str) -> Option<&'a FunctionSignature> {
    decls.iter().find(|d| d.name == name)
}

fn split_parameters(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
