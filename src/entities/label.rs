use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::sources::local_names::LocalNameList;
use crate::sources::openfda::OpenFdaClient;
use crate::transform;
use crate::utils::cache::MemoCache;

/// Remote results requested per suggestion query. Bounds latency and
/// payload size on every keystroke-level call.
const REMOTE_SUGGEST_LIMIT: usize = 10;

pub(crate) const DEFAULT_MEMO_ENTRIES: usize = 256;

/// Normalized label record for one resolved drug name.
///
/// All four sections are always present; a section the upstream label does
/// not carry is an empty vector.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub(crate) struct LabelRecord {
    pub indications: Vec<String>,
    pub dosage: Vec<String>,
    pub interactions: Vec<String>,
    pub precautions: Vec<String>,
}

/// Three-line patient summary derived from a [`LabelRecord`].
#[derive(Debug, Clone, Serialize)]
pub(crate) struct LabelSummary {
    pub main_indication: String,
    pub administration: String,
    pub important_instructions: String,
}

/// Suggestion and lookup workflow over the openFDA label service plus an
/// optional local name list.
///
/// Holds the memo caches for both operations, keyed by the exact input
/// string. Suggestion failures never escape [`Self::resolve_candidates`];
/// lookup failures collapse to `None` in [`Self::fetch_record`].
pub(crate) struct LabelPipeline {
    client: OpenFdaClient,
    local_names: Option<LocalNameList>,
    suggest_cache: MemoCache<Vec<String>>,
    record_cache: MemoCache<Option<LabelRecord>>,
}

impl LabelPipeline {
    pub(crate) fn new(
        client: OpenFdaClient,
        local_names: Option<LocalNameList>,
        suggest_cache: MemoCache<Vec<String>>,
        record_cache: MemoCache<Option<LabelRecord>>,
    ) -> Self {
        Self {
            client,
            local_names,
            suggest_cache,
            record_cache,
        }
    }

    /// Ordered, deduplicated candidate names for free-text input.
    ///
    /// Local-list prefix matches come first, then remote matches in service
    /// order. Fail-open: a failed remote call degrades to the local matches
    /// and is only logged, so suggestion trouble never blocks manual entry.
    pub(crate) async fn resolve_candidates(&mut self, raw_text: &str) -> Vec<String> {
        let trimmed = raw_text.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        if let Some(hit) = self.suggest_cache.get(raw_text) {
            return hit;
        }

        let folded = trimmed.to_lowercase();
        let local = self
            .local_names
            .as_ref()
            .map(|list| list.prefix_matches(&folded))
            .unwrap_or_default();

        let remote = match self
            .client
            .suggest_search(trimmed, REMOTE_SUGGEST_LIMIT)
            .await
        {
            Ok(Some(resp)) => transform::label::suggestion_names(&resp),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(error = %err, input = trimmed, "suggestion lookup failed; keeping local matches");
                Vec::new()
            }
        };

        let merged = transform::label::merge_candidates(local, remote);
        self.suggest_cache.put(raw_text.to_string(), merged.clone());
        merged
    }

    /// Resolves a single name to its label record, or `None` when nothing
    /// matches. Transport failures, bad payloads, and empty result sets all
    /// collapse to `None`; the distinction is logged but not surfaced.
    pub(crate) async fn fetch_record(&mut self, name: &str) -> Option<LabelRecord> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Some(hit) = self.record_cache.get(name) {
            return hit;
        }

        let record = match self.client.label_search(trimmed).await {
            Ok(Some(resp)) => resp
                .results
                .into_iter()
                .next()
                .map(transform::label::record_from_result),
            Ok(None) => None,
            Err(err) => {
                warn!(error = %err, name = trimmed, "label fetch failed; reporting no data");
                None
            }
        };

        self.record_cache.put(name.to_string(), record.clone());
        record
    }

    /// Drops all memoized results. Used by the interactive `clear` command.
    pub(crate) fn clear_caches(&mut self) {
        self.suggest_cache.clear();
        self.record_cache.clear();
    }
}
