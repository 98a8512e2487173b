use std::path::Path;

use crate::error::MedGuideError;

/// Static drug-name list loaded once at startup from a JSON array file.
///
/// The list is immutable for the process lifetime and keeps file order;
/// matching is case-insensitive while display keeps the file's casing.
#[derive(Debug, Clone)]
pub(crate) struct LocalNameList {
    names: Vec<String>,
}

impl LocalNameList {
    pub(crate) fn load(path: &Path) -> Result<Self, MedGuideError> {
        let raw = std::fs::read_to_string(path).map_err(|err| MedGuideError::NamesFile {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        Self::from_json(&raw).map_err(|message| MedGuideError::NamesFile {
            path: path.display().to_string(),
            message,
        })
    }

    pub(crate) fn from_json(raw: &str) -> Result<Self, String> {
        let names: Vec<String> = serde_json::from_str(raw)
            .map_err(|err| format!("expected a JSON array of strings: {err}"))?;
        let names = names
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        Ok(Self { names })
    }

    /// Entries whose case-folded value starts with the case-folded input,
    /// in file order.
    pub(crate) fn prefix_matches(&self, folded_input: &str) -> Vec<String> {
        self.names
            .iter()
            .filter(|name| name.to_lowercase().starts_with(folded_input))
            .cloned()
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }
}
