mod analysis;
mod cli;
mod config;
mod convert;
mod entry;
mod handlers;
mod state;
mod text;

pub use entry::run;

#[cfg(test)]
pub(crate) use convert::{completion_to_lsp, hover_to_lsp, signature_help_to_lsp, LANGUAGE_ID};
#[cfg(test)]
pub(crate) use text::{apply_incremental_change_rope, position_to_byte_offset, position_to_char_idx};
#[cfg(test)]
pub(crate) use state::NoxScriptLanguageServer;
