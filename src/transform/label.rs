use std::collections::HashSet;

use crate::entities::label::{LabelRecord, LabelSummary};
use crate::sources::openfda::{LabelResult, LabelSearchResponse};

pub(crate) const NOT_AVAILABLE: &str = "Not available.";
pub(crate) const NONE_NOTED: &str = "None noted.";

/// Candidate names from a suggestion response: per result, brand names then
/// generic names, deduplicated by exact string, first-seen order.
pub(crate) fn suggestion_names(resp: &LabelSearchResponse) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out: Vec<String> = Vec::new();
    for result in &resp.results {
        let names = result
            .openfda
            .brand_name
            .iter()
            .chain(result.openfda.generic_name.iter());
        for name in names {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            if seen.insert(name.to_string()) {
                out.push(name.to_string());
            }
        }
    }
    out
}

/// Merges local-list matches ahead of remote matches, deduplicating by
/// exact string while preserving first-seen order.
pub(crate) fn merge_candidates(local: Vec<String>, remote: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out: Vec<String> = Vec::new();
    for name in local.into_iter().chain(remote) {
        if seen.insert(name.clone()) {
            out.push(name);
        }
    }
    out
}

/// Projects one upstream label result into a record. Missing sections
/// become empty vectors, never an absent field.
pub(crate) fn record_from_result(result: LabelResult) -> LabelRecord {
    LabelRecord {
        indications: result.indications_and_usage.into_vec(),
        dosage: result.dosage_and_administration.into_vec(),
        interactions: result.drug_interactions.into_vec(),
        precautions: result.precautions_and_warnings.into_vec(),
    }
}

/// Derives the three-line patient summary from a present record.
pub(crate) fn summarize(record: &LabelRecord) -> LabelSummary {
    let first = |section: &[String], sentinel: &str| {
        section
            .first()
            .cloned()
            .unwrap_or_else(|| sentinel.to_string())
    };

    let important_instructions = record
        .interactions
        .first()
        .or_else(|| record.precautions.first())
        .cloned()
        .unwrap_or_else(|| NONE_NOTED.to_string());

    LabelSummary {
        main_indication: first(&record.indications, NOT_AVAILABLE),
        administration: first(&record.dosage, NOT_AVAILABLE),
        important_instructions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: serde_json::Value) -> LabelSearchResponse {
        serde_json::from_value(json).expect("valid response JSON")
    }

    #[test]
    fn suggestion_names_list_brand_then_generic_per_result() {
        let resp = response(serde_json::json!({
            "results": [
                {"openfda": {"brand_name": ["Glucophage"], "generic_name": ["metformin hydrochloride"]}},
                {"openfda": {"brand_name": ["Metformin"], "generic_name": ["metformin hydrochloride"]}}
            ]
        }));

        assert_eq!(
            suggestion_names(&resp),
            vec!["Glucophage", "metformin hydrochloride", "Metformin"]
        );
    }

    #[test]
    fn suggestion_names_skip_blank_entries_and_handle_missing_openfda() {
        let resp = response(serde_json::json!({
            "results": [
                {"openfda": {"brand_name": ["  ", "Aspirin"]}},
                {}
            ]
        }));

        assert_eq!(suggestion_names(&resp), vec!["Aspirin"]);
    }

    #[test]
    fn merge_keeps_local_before_remote_and_dedups_exact_matches() {
        let merged = merge_candidates(
            vec!["Metformin".into()],
            vec!["Metformin".into(), "Metforminol".into()],
        );
        assert_eq!(merged, vec!["Metformin", "Metforminol"]);
    }

    #[test]
    fn merge_dedup_is_case_sensitive() {
        let merged = merge_candidates(vec!["Metformin".into()], vec!["metformin".into()]);
        assert_eq!(merged, vec!["Metformin", "metformin"]);
    }

    #[test]
    fn record_projection_fills_missing_sections_with_empty_vecs() {
        let resp = response(serde_json::json!({
            "results": [{"indications_and_usage": ["Pain relief"]}]
        }));
        let result = resp.results.into_iter().next().expect("one result");

        let record = record_from_result(result);
        assert_eq!(record.indications, vec!["Pain relief"]);
        assert!(record.dosage.is_empty());
        assert!(record.interactions.is_empty());
        assert!(record.precautions.is_empty());
    }

    #[test]
    fn summary_falls_back_per_section() {
        let record = LabelRecord {
            indications: Vec::new(),
            dosage: vec!["Take once daily".into()],
            interactions: Vec::new(),
            precautions: vec!["Avoid alcohol".into()],
        };

        let summary = summarize(&record);
        assert_eq!(summary.main_indication, NOT_AVAILABLE);
        assert_eq!(summary.administration, "Take once daily");
        assert_eq!(summary.important_instructions, "Avoid alcohol");
    }

    #[test]
    fn summary_prefers_interactions_over_precautions() {
        let record = LabelRecord {
            indications: vec!["Type 2 diabetes".into()],
            dosage: vec!["500 mg twice daily".into()],
            interactions: vec!["Avoid iodinated contrast".into()],
            precautions: vec!["Monitor renal function".into()],
        };

        let summary = summarize(&record);
        assert_eq!(summary.main_indication, "Type 2 diabetes");
        assert_eq!(summary.important_instructions, "Avoid iodinated contrast");
    }

    #[test]
    fn summary_of_empty_record_is_all_sentinels() {
        let record = LabelRecord::default();

        let summary = summarize(&record);
        assert_eq!(summary.main_indication, NOT_AVAILABLE);
        assert_eq!(summary.administration, NOT_AVAILABLE);
        assert_eq!(summary.important_instructions, NONE_NOTED);
    }
}
