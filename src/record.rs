use serde::{Deserialize, Serialize};

/// One point of interest as delivered by the open-data endpoint.
///
/// The wire keys are the upstream ones (`City`, `Town`, ...); the Rust field
/// names are the typed projection used everywhere else in the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "City")]
    pub region: String,
    #[serde(rename = "Town")]
    pub sub_region: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "PicURL", default)]
    pub image_url: String,
    #[serde(rename = "HostWords", default)]
    pub description: String,
    #[serde(rename = "Address", default)]
    pub address: String,
    #[serde(rename = "Url", default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
}

impl Record {
    #[must_use]
    pub fn new(
        region: impl Into<String>,
        sub_region: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            region: region.into(),
            sub_region: sub_region.into(),
            name: name.into(),
            image_url: String::new(),
            description: String::new(),
            address: String::new(),
            external_url: None,
        }
    }

    /// Upstream sends `""` for "no link"; treat that the same as a missing key.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.external_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    #[must_use]
    pub fn description_preview(&self, max_chars: usize) -> String {
        match self.description.char_indices().nth(max_chars) {
            Some((cut, _)) => format!("{}...", &self.description[..cut]),
            None => self.description.clone(),
        }
    }
}
