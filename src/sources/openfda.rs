use std::borrow::Cow;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::MedGuideError;
use crate::utils::query;
use crate::utils::serde::TextSection;

const OPENFDA_BASE: &str = "https://api.fda.gov";
const OPENFDA_API: &str = "openfda";
const OPENFDA_BASE_ENV: &str = "MEDGUIDE_OPENFDA_BASE";

const MAX_NAME_BYTES: usize = 256;
const MAX_SUGGEST_LIMIT: usize = 50;

pub(crate) struct OpenFdaClient {
    client: reqwest::Client,
    base: Cow<'static, str>,
    api_key: Option<String>,
}

impl OpenFdaClient {
    pub(crate) fn new() -> Result<Self, MedGuideError> {
        Ok(Self {
            client: crate::sources::shared_client()?,
            base: crate::sources::env_base(OPENFDA_BASE, OPENFDA_BASE_ENV),
            api_key: std::env::var("OPENFDA_API_KEY")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        })
    }

    #[cfg(test)]
    pub(crate) fn new_for_test(
        base: String,
        api_key: Option<String>,
    ) -> Result<Self, MedGuideError> {
        Ok(Self {
            client: crate::sources::shared_client()?,
            base: Cow::Owned(base),
            api_key: api_key
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base.as_ref().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn get_json_optional<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<Option<T>, MedGuideError> {
        let resp = req.send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;

        // openFDA reports "no matches" as a 404 with a JSON error body.
        if status.as_u16() == 404 {
            return Ok(None);
        }

        if !status.is_success() {
            let excerpt = crate::sources::body_excerpt(&bytes);
            return Err(MedGuideError::Api {
                api: OPENFDA_API.to_string(),
                message: format!("HTTP {status}: {excerpt}"),
            });
        }

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| MedGuideError::ApiJson {
                api: OPENFDA_API.to_string(),
                source,
            })
    }

    fn validate_name(value: &str) -> Result<&str, MedGuideError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(MedGuideError::InvalidArgument(
                "Drug name is required. Example: medguide get metformin".into(),
            ));
        }
        if value.len() > MAX_NAME_BYTES {
            return Err(MedGuideError::InvalidArgument(
                "Drug name is too long.".into(),
            ));
        }
        Ok(value)
    }

    /// Prefix search over brand and generic names, used for suggestions.
    pub(crate) async fn suggest_search(
        &self,
        prefix: &str,
        limit: usize,
    ) -> Result<Option<LabelSearchResponse>, MedGuideError> {
        let prefix = Self::validate_name(prefix)?;
        if limit == 0 || limit > MAX_SUGGEST_LIMIT {
            return Err(MedGuideError::InvalidArgument(format!(
                "Suggestion limit must be between 1 and {MAX_SUGGEST_LIMIT}"
            )));
        }

        let expr = query::name_prefix_expression(prefix);
        let url = self.endpoint("drug/label.json");
        let mut req = self
            .client
            .get(&url)
            .query(&[("search", expr.as_str()), ("limit", &limit.to_string())]);
        if let Some(key) = self.api_key.as_deref() {
            req = req.query(&[("api_key", key)]);
        }

        self.get_json_optional(req).await
    }

    /// Quoted exact-match lookup for a single label record.
    pub(crate) async fn label_search(
        &self,
        name: &str,
    ) -> Result<Option<LabelSearchResponse>, MedGuideError> {
        let name = Self::validate_name(name)?;

        let expr = query::name_exact_expression(name);
        let url = self.endpoint("drug/label.json");
        let mut req = self
            .client
            .get(&url)
            .query(&[("search", expr.as_str()), ("limit", "1")]);
        if let Some(key) = self.api_key.as_deref() {
            req = req.query(&[("api_key", key)]);
        }

        self.get_json_optional(req).await
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct LabelSearchResponse {
    #[serde(default)]
    pub results: Vec<LabelResult>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LabelResult {
    #[serde(default)]
    pub openfda: OpenFdaNames,
    #[serde(default)]
    pub indications_and_usage: TextSection,
    #[serde(default)]
    pub dosage_and_administration: TextSection,
    #[serde(default)]
    pub drug_interactions: TextSection,
    #[serde(default)]
    pub precautions_and_warnings: TextSection,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct OpenFdaNames {
    #[serde(default)]
    pub brand_name: Vec<String>,
    #[serde(default)]
    pub generic_name: Vec<String>,
}
