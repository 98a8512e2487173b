use serde::Serialize;

use crate::error::MedGuideError;

pub(crate) fn to_pretty<T: Serialize>(value: &T) -> Result<String, MedGuideError> {
    Ok(serde_json::to_string_pretty(value)?)
}
