//! Mapping from analyzer results to `lsp_types`.

use noxscript_core::{CompletionEntry, CompletionKind, HoverInfo, SignatureHelpInfo, SignatureInfo};
use tower_lsp::lsp_types::{
    CompletionItem, CompletionItemKind, Documentation, Hover, HoverContents, LanguageString, MarkedString,
    ParameterInformation, ParameterLabel, SignatureHelp, SignatureInformation,
};

/// Language id the editor registers for `.ns` files.
pub(crate) const LANGUAGE_ID: &str = "ns";

pub(crate) fn hover_to_lsp(info: HoverInfo) -> Hover {
    let mut contents = vec![MarkedString::LanguageString(LanguageString {
        language: LANGUAGE_ID.to_string(),
        value: info.signature,
    })];
    if let Some(doc) = info.documentation {
        contents.push(MarkedString::String(doc));
    }
    Hover {
        contents: HoverContents::Array(contents),
        range: None,
    }
}

pub(crate) fn completion_to_lsp(entry: CompletionEntry) -> CompletionItem {
    let kind = match entry.kind {
        CompletionKind::Keyword => CompletionItemKind::KEYWORD,
        CompletionKind::Function => CompletionItemKind::FUNCTION,
    };
    CompletionItem {
        label: entry.label,
        kind: Some(kind),
        detail: Some(entry.detail),
        documentation: entry.documentation.map(Documentation::String),
        ..Default::default()
    }
}

pub(crate) fn signature_to_lsp(sig: SignatureInfo) -> SignatureInformation {
    SignatureInformation {
        label: sig.label,
        documentation: sig.documentation.map(Documentation::String),
        parameters: Some(
            sig.parameters
                .into_iter()
                .map(|p| ParameterInformation {
                    label: ParameterLabel::Simple(p),
                    documentation: None,
                })
                .collect(),
        ),
        active_parameter: None,
    }
}

pub(crate) fn signature_help_to_lsp(help: SignatureHelpInfo) -> SignatureHelp {
    SignatureHelp {
        signatures: help.signatures.into_iter().map(signature_to_lsp).collect(),
        active_signature: Some(help.active_signature as u32),
        active_parameter: Some(help.active_parameter as u32),
    }
}
