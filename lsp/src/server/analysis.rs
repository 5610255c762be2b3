use tower_lsp::lsp_types::{CompletionItem, Hover, Position, SignatureHelp, Url};
use tracing::debug;

use super::convert::{completion_to_lsp, hover_to_lsp, signature_help_to_lsp};
use super::state::NoxScriptLanguageServer;

impl NoxScriptLanguageServer {
    pub(crate) fn get_hover_info(&self, uri: &Url, position: Position) -> Option<Hover> {
        let (content, offset) = self.snapshot(uri, position)?;
        let info = self.analyzer().hover(&content, offset);
        debug!(
            "hover {}:{}:{} -> {}",
            uri,
            position.line,
            position.character,
            info.as_ref().map(|h| h.signature.as_str()).unwrap_or("<none>")
        );
        info.map(hover_to_lsp)
    }

    pub(crate) fn get_completions(&self, uri: &Url) -> Vec<CompletionItem> {
        let content = self.text_of(uri).unwrap_or_default();
        let items: Vec<CompletionItem> = self
            .analyzer()
            .completions(&content)
            .into_iter()
            .map(completion_to_lsp)
            .collect();
        debug!("completion {} -> {} items", uri, items.len());
        items
    }

    pub(crate) fn get_signature_help(&self, uri: &Url, position: Position) -> Option<SignatureHelp> {
        let (content, offset) = self.snapshot(uri, position)?;
        let help = self.analyzer().signature_help(&content, offset)?;
        debug!(
            "signature help {}:{}:{} -> {} (parameter {})",
            uri,
            position.line,
            position.character,
            help.signatures.first().map(|s| s.label.as_str()).unwrap_or_default(),
            help.active_parameter
        );
        Some(signature_help_to_lsp(help))
    }
}
