//! Lightweight text analysis behind NoxScript hover, completion and
//! signature help.
//!
//! There is no parser here: declarations are found with a pattern over raw
//! text, and call sites by scanning backward from the cursor while tracking
//! quotes and parenthesis depth.

pub mod analyzer;
pub mod builtins;
pub mod call;
pub mod decl;
pub mod error;
pub mod scan;

#[cfg(test)]
mod scan_test;

pub use analyzer::{
    ActiveParameterPolicy, Analyzer, AnalyzerOptions, CompletionEntry, CompletionKind, HoverInfo, SignatureHelpInfo,
    SignatureInfo, KEYWORDS,
};
pub use builtins::{BuiltinEntry, BuiltinRegistry, BuiltinSignature, ParameterLabel};
pub use call::{locate_call, locate_call_at_cursor, CallContext};
pub use decl::{scan_function_decls, FunctionSignature};
pub use error::RegistryError;
