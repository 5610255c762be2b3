//! Hover, completion and signature help over a document snapshot.
//!
//! Every query takes the full text and a cursor (byte offset, the position
//! the editor reports) and recomputes its answer from scratch. The analyzer
//! borrows the builtin table; it owns no per-document state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builtins::{BuiltinEntry, BuiltinRegistry};
use crate::call::locate_call_at_cursor;
use crate::decl::{find_function_decl, scan_function_decls, FunctionSignature};
use crate::scan::{identifier_around, identifier_at, in_string_at};


/// Keywords offered verbatim as completion items.
pub const KEYWORDS: &[&str] = &[
    "if", "else", "int", "float", "string", "object", "goto", "return", "continue", "break", "while", "for", "void",
    "self", "other", "true", "false",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionKind {
    Keyword,
    Function,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionEntry {
    pub label: String,
    pub kind: CompletionKind,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoverInfo {
    /// Rendered signature of the hovered function.
    pub signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureInfo {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    pub parameters: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureHelpInfo {
    pub signatures: Vec<SignatureInfo>,
    pub active_signature: usize,
    pub active_parameter: usize,
}

/// How the comma count from the call-site scan maps onto the reported
/// active parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveParameterPolicy {
    /// Clamp to the last parameter of the resolved signature.
    #[default]
    Clamp,
    /// Report the comma count as is, even past the last parameter.
    Raw,
}

impl ActiveParameterPolicy {
    pub fn apply(self, param_num: usize, param_count: usize) -> usize {
        match self {
            Self::Clamp => param_num.min(param_count.saturating_sub(1)),
            Self::Raw => param_num,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerOptions {
    pub complete_keywords: bool,
    pub complete_builtins: bool,
    pub active_parameter: ActiveParameterPolicy,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            complete_keywords: true,
            complete_builtins: true,
            active_parameter: ActiveParameterPolicy::Clamp,
        }
    }
}

/// Text context analyzer for NoxScript.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'a> {
    builtins: &'a BuiltinRegistry,
    keywords: &'a [&'a str],
    options: AnalyzerOptions,
}

impl<'a> Analyzer<'a> {
    pub fn new(builtins: &'a BuiltinRegistry) -> Self {
        Self {
            builtins,
            keywords: KEYWORDS,
            options: AnalyzerOptions::default(),
        }
    }

    pub fn with_keywords(mut self, keywords: &'a [&'a str]) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn with_options(mut self, options: AnalyzerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn builtins(&self) -> &BuiltinRegistry {
        self.builtins
    }

    pub fn options(&self) -> AnalyzerOptions {
        self.options
    }

    /// User functions declared in `text`, in source order.
    pub fn declarations(&self, text: &str) -> Vec<FunctionSignature> {
        scan_function_decls(text)
    }

    /// Signature of the function named under the cursor.
    ///
    /// Nothing is reported while the cursor is inside a string literal.
    /// Builtins win over user declarations of the same name.
    pub fn hover(&self, text: &str, cursor: usize) -> Option<HoverInfo> {
        let name = match cursor.checked_sub(1) {
            Some(offset) => {
                if in_string_at(text, offset) {
                    return None;
                }
                identifier_at(text, offset)
            }
            None => identifier_around(text, 0),
        };
        if name.is_empty() {
            return None;
        }

        if let Some(entry) = self.builtins.get(name) {
            return Some(HoverInfo {
                signature: entry.text.clone(),
                documentation: builtin_documentation(entry),
            });
        }

        let decls = scan_function_decls(text);
        find_function_decl(&decls, name).map(|decl| HoverInfo {
            signature: decl.rendered.clone(),
            documentation: None,
        })
    }

    /// Keywords, builtins, then functions declared in `text`.
    ///
    /// No prefix filtering happens here; the editor narrows the list.
    pub fn completions(&self, text: &str) -> Vec<CompletionEntry> {
        let mut items = Vec::new();

        if self.options.complete_keywords {
            items.extend(self.keywords.iter().map(|kw| CompletionEntry {
                label: kw.to_string(),
                kind: CompletionKind::Keyword,
                detail: kw.to_string(),
                documentation: None,
            }));
        }

        if self.options.complete_builtins {
            items.extend(self.builtins.iter().map(|entry| CompletionEntry {
                label: entry.name.clone(),
                kind: CompletionKind::Function,
                detail: entry.text.clone(),
                documentation: (!entry.brief.is_empty()).then(|| entry.brief.clone()),
            }));
        }

        items.extend(scan_function_decls(text).into_iter().map(|decl| CompletionEntry {
            label: decl.name,
            kind: CompletionKind::Function,
            detail: decl.rendered,
            documentation: None,
        }));

        items
    }

    /// Signature of the call enclosing the cursor, with the parameter being
    /// typed.
    pub fn signature_help(&self, text: &str, cursor: usize) -> Option<SignatureHelpInfo> {
        let call = locate_call_at_cursor(text, cursor);
        let name = call.function_name.as_deref()?;

        let signature = if let Some(entry) = self.builtins.get(name) {
            SignatureInfo {
                label: entry.signature.label.clone(),
                documentation: builtin_documentation(entry),
                parameters: entry.signature.parameters.iter().map(|p| p.label.clone()).collect(),
            }
        } else {
            let decls = scan_function_decls(text);
            let Some(decl) = find_function_decl(&decls, name) else {
                debug!("no signature known for call to '{}'", name);
                return None;
            };
            SignatureInfo {
                label: decl.rendered.clone(),
                documentation: None,
                parameters: decl.parameters.clone(),
            }
        };

        let active_parameter = self
            .options
            .active_parameter
            .apply(call.active_parameter, signature.parameters.len());

        Some(SignatureHelpInfo {
            signatures: vec![signature],
            active_signature: 0,
            active_parameter,
        })
    }
}

fn builtin_documentation(entry: &BuiltinEntry) -> Option<String> {
    if !entry.detail.is_empty() {
        Some(entry.detail.clone())
    } else if !entry.brief.is_empty() {
        Some(entry.brief.clone())
    } else {
        None
    }
}
