use noxscript_core::{ActiveParameterPolicy, AnalyzerOptions};
use serde::Deserialize;
use tower_lsp::lsp_types::ConfigurationItem;
use tracing::{debug, warn};

use super::state::NoxScriptLanguageServer;

pub(crate) const CONFIG_SECTION: &str = "noxscriptLanguageServer";

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ServerConfig {
    pub(crate) complete_keywords: bool,
    pub(crate) complete_builtins: bool,
    pub(crate) active_parameter: ActiveParameterPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            complete_keywords: true,
            complete_builtins: true,
            active_parameter: ActiveParameterPolicy::Clamp,
        }
    }
}

impl ServerConfig {
    pub(crate) fn analyzer_options(&self) -> AnalyzerOptions {
        AnalyzerOptions {
            complete_keywords: self.complete_keywords,
            complete_builtins: self.complete_builtins,
            active_parameter: self.active_parameter,
        }
    }

    /// Merge a client configuration section. Absent keys fall back to the
    /// defaults; a section that does not deserialize leaves `self` untouched.
    pub(crate) fn apply_section(&mut self, value: serde_json::Value) -> bool {
        if value.is_null() {
            return false;
        }
        match serde_json::from_value::<NoxScriptConfigSection>(value) {
            Ok(cfg) => {
                self.complete_keywords = cfg.completion.keywords.unwrap_or(true);
                self.complete_builtins = cfg.completion.builtins.unwrap_or(true);
                self.active_parameter = cfg.signature_help.active_parameter.unwrap_or_default();
                true
            }
            Err(e) => {
                warn!("ignoring malformed {} configuration: {}", CONFIG_SECTION, e);
                false
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct NoxScriptConfigSection {
    #[serde(default)]
    completion: CompletionConfig,
    #[serde(default)]
    signature_help: SignatureHelpConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct CompletionConfig {
    #[serde(default)]
    keywords: Option<bool>,
    #[serde(default)]
    builtins: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct SignatureHelpConfig {
    #[serde(default)]
    active_parameter: Option<ActiveParameterPolicy>,
}

impl NoxScriptLanguageServer {
    pub(crate) async fn load_config(&self) {
        let items = vec![ConfigurationItem {
            scope_uri: None,
            section: Some(CONFIG_SECTION.to_string()),
        }];

        let Ok(values) = self.client.configuration(items).await else {
            debug!("client did not answer workspace/configuration");
            return;
        };
        if let Some(val) = values.into_iter().next() {
            if let Ok(mut guard) = self.config.lock() {
                if guard.apply_section(val) {
                    debug!("configuration updated: {:?}", *guard);
                }
            }
        }
    }
}
