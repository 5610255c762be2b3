use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RegistryError;

#[cfg(test)]
mod builtins_test;

/// Builtin table shipped with the crate.
pub const EMBEDDED_BUILTINS: &str = include_str!("builtins.json");

/// One parameter slot of a builtin signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterLabel {
    pub label: String,
}

/// Structured signature shown by signature help.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuiltinSignature {
    pub label: String,
    #[serde(default)]
    pub parameters: Vec<ParameterLabel>,
}

/// Static documentation for a predefined NoxScript function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuiltinEntry {
    pub name: String,
    /// Rendered signature, e.g. `void Print(string message)`.
    pub text: String,
    #[serde(default)]
    pub brief: String,
    #[serde(default)]
    pub detail: String,
    pub signature: BuiltinSignature,
}

/// Read-only lookup of builtin functions by name.
///
/// Built once at startup and shared by reference; iteration follows the
/// order of the source table.
#[derive(Debug, Clone, Default)]
pub struct BuiltinRegistry {
    entries: Vec<BuiltinEntry>,
    by_name: HashMap<String, usize>,
}

impl BuiltinRegistry {
    pub fn from_entries(entries: Vec<BuiltinEntry>) -> Result<Self, RegistryError> {
        let mut by_name = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(RegistryError::EmptyName { index });
            }
            if by_name.insert(entry.name.clone(), index).is_some() {
                return Err(RegistryError::DuplicateName(entry.name.clone()));
            }
        }
        Ok(Self { entries, by_name })
    }

    pub fn from_json_str(json: &str) -> Result<Self, RegistryError> {
        let entries: Vec<BuiltinEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_json_str(&json)?;
        debug!("loaded {} builtins from {}", registry.len(), path.display());
        Ok(registry)
    }

    /// The table compiled into the crate.
    pub fn embedded() -> Result<Self, RegistryError> {
        Self::from_json_str(EMBEDDED_BUILTINS)
    }

    pub fn get(&self, name: &str) -> Option<&BuiltinEntry> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BuiltinEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
