use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use noxscript_core::{Analyzer, AnalyzerOptions, BuiltinRegistry};
use ropey::Rope;
use tower_lsp::lsp_types::{Position, Url};
use tower_lsp::Client;

use super::config::ServerConfig;
use super::text::position_to_byte_offset;

/// In-memory representation of an open NoxScript document.
#[derive(Debug, Default)]
pub(crate) struct Document {
    pub(crate) content: Rope,
    pub(crate) version: i32,
}

impl Document {
    pub(crate) fn new(text: &str, version: i32) -> Self {
        Self {
            content: Rope::from_str(text),
            version,
        }
    }
}

/// Primary LSP server state shared across handlers.
pub(crate) struct NoxScriptLanguageServer {
    pub(crate) client: Client,
    pub(crate) documents: Arc<DashMap<Url, Document>>,
    pub(crate) builtins: Arc<BuiltinRegistry>,
    pub(crate) config: Mutex<ServerConfig>,
}

impl NoxScriptLanguageServer {
    pub(crate) fn new(client: Client, builtins: Arc<BuiltinRegistry>) -> Self {
        Self {
            client,
            documents: Arc::new(DashMap::new()),
            builtins,
            config: Mutex::new(ServerConfig::default()),
        }
    }

    pub(crate) fn analyzer_options(&self) -> AnalyzerOptions {
        self.config
            .lock()
            .map(|cfg| cfg.analyzer_options())
            .unwrap_or_default()
    }

    pub(crate) fn analyzer(&self) -> Analyzer<'_> {
        Analyzer::new(&self.builtins).with_options(self.analyzer_options())
    }

    /// Full text of `uri` plus the byte offset of `position`, copied out so no
    /// map guard outlives the call.
    pub(crate) fn snapshot(&self, uri: &Url, position: Position) -> Option<(String, usize)> {
        let doc = self.documents.get(uri)?;
        let offset = position_to_byte_offset(&doc.content, position);
        Some((doc.content.to_string(), offset))
    }

    pub(crate) fn text_of(&self, uri: &Url) -> Option<String> {
        self.documents.get(uri).map(|doc| doc.content.to_string())
    }
}
