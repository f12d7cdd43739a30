use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier handed out by the credit bureau and sent back unchanged.
/// The bureau may use numbers or strings, so the raw JSON value is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UpstreamId(serde_json::Value);

impl UpstreamId {
    pub fn new(value: impl Into<serde_json::Value>) -> Self {
        Self(value.into())
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl fmt::Display for UpstreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            serde_json::Value::String(s) => write!(f, "{}", s),
            other => write!(f, "{}", other),
        }
    }
}

/// Financial institution the customer is eligible with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Institution {
    pub id: UpstreamId,
    #[serde(rename = "nome")]
    pub name: String,
    /// Eligible credit products, in the order the bureau listed them
    #[serde(rename = "modalidades")]
    pub modalities: Vec<Modality>,
}

impl Institution {
    pub fn new(id: impl Into<serde_json::Value>, name: impl Into<String>) -> Self {
        Self {
            id: UpstreamId::new(id),
            name: name.into(),
            modalities: Vec::new(),
        }
    }

    pub fn with_modality(
        mut self,
        code: impl Into<serde_json::Value>,
        name: impl Into<String>,
    ) -> Self {
        self.modalities.push(Modality {
            code: UpstreamId::new(code),
            name: name.into(),
        });
        self
    }
}

/// Credit product offered by one institution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modality {
    #[serde(rename = "cod")]
    pub code: UpstreamId,
    #[serde(rename = "nome")]
    pub name: String,
}

/// Discovery payload returned by the bureau
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveryResponse {
    #[serde(rename = "instituicoes")]
    pub institutions: Vec<Institution>,
}

/// Total number of offer lookups a discovery result will fan out into
pub fn lookup_count(institutions: &[Institution]) -> usize {
    institutions.iter().map(|i| i.modalities.len()).sum()
}
