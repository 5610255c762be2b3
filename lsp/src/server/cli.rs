use anyhow::Context;
use clap::Parser;
use noxscript_core::{locate_call_at_cursor, Analyzer, BuiltinRegistry};
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Parser)]
#[command(
    name = "noxscript-lsp",
    version,
    about = "Language server for NoxScript (hover, completion, signature help)",
    long_about = None
)]
pub(crate) struct CliArgs {
    /// Builtin function table (JSON) to use instead of the bundled one
    #[arg(long, value_name = "FILE")]
    pub(crate) builtins: Option<PathBuf>,

    /// Analyze a file and print declarations as JSON instead of serving LSP
    #[arg(long, value_name = "FILE")]
    pub(crate) analyze: Option<String>,

    /// Cursor byte offset for hover and signature help in --analyze mode
    #[arg(long, value_name = "N", requires = "analyze")]
    pub(crate) offset: Option<usize>,

    /// Serve over stdio (the only transport; accepted for client compatibility)
    #[arg(long, hide = true)]
    pub(crate) stdio: bool,
}

pub(crate) fn load_builtins(path: Option<&Path>) -> anyhow::Result<BuiltinRegistry> {
    match path {
        Some(p) => BuiltinRegistry::from_path(p).with_context(|| format!("Failed to load builtins from '{}'", p.display())),
        None => BuiltinRegistry::embedded().context("Bundled builtin table is malformed"),
    }
}

pub(crate) fn run_analyze(path: &str, offset: Option<usize>, builtins: &BuiltinRegistry) -> anyhow::Result<String> {
    let content = read_file_content(path)?;
    let analyzer = Analyzer::new(builtins);

    let mut output = serde_json::json!({
        "declarations": analyzer.declarations(&content),
    });

    if let Some(offset) = offset {
        let cursor = floor_char_boundary(&content, offset);
        output["cursor"] = serde_json::json!(cursor);
        output["call"] = serde_json::to_value(locate_call_at_cursor(&content, cursor))?;
        output["hover"] = serde_json::to_value(analyzer.hover(&content, cursor))?;
        output["signature_help"] = serde_json::to_value(analyzer.signature_help(&content, cursor))?;
    }

    Ok(serde_json::to_string_pretty(&output)?)
}

fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut idx = offset.min(text.len());
    while !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

pub(crate) fn is_safe_path(path: &str) -> bool {
    let path = Path::new(path);

    if path.as_os_str().is_empty() {
        return false;
    }
    if path.is_absolute() {
        return false;
    }
    if path.components().any(|c| c == Component::ParentDir) {
        return false;
    }

    let s = path.to_string_lossy();
    let suspicious = ['\0', '\n', '\r', '\t'];
    if s.chars().any(|c| suspicious.contains(&c)) {
        return false;
    }
    if s.len() >= 2 {
        let bytes = s.as_bytes();
        if bytes[1] == b':' {
            return false;
        }
    }
    true
}

pub(crate) fn read_file_content(path: &str) -> anyhow::Result<String> {
    if !is_safe_path(path) {
        return Err(anyhow::anyhow!("Unsafe file path: {}", path));
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file '{}'", path))
}
