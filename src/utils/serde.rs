use serde::Deserialize;

/// Label section fields are documented as arrays of strings, but some older
/// label entries carry a bare string. Either shape normalizes to a `Vec`,
/// and an absent field to an empty one.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum TextSection {
    #[default]
    Absent,
    Single(String),
    Many(Vec<String>),
}

impl TextSection {
    pub(crate) fn into_vec(self) -> Vec<String> {
        match self {
            Self::Absent => Vec::new(),
            Self::Single(text) => vec![text],
            Self::Many(texts) => texts,
        }
    }
}
