use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;
use crate::{DEFAULT_ENDPOINT, DESCRIPTION_PREVIEW_LENGTH, PAGE_SIZE};

pub const MAX_URL_LENGTH: usize = 2048;

/// An absolute http(s) URL with a host and no embedded credentials.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidatedUrl {
    url: String,
    host: String,
}

impl ValidatedUrl {
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let invalid = |reason: String| ConfigError::InvalidEndpoint {
            url: Self::truncate_url(&url),
            reason,
        };

        if url.trim().is_empty() {
            return Err(invalid("URL cannot be empty".into()));
        }
        if url.len() > MAX_URL_LENGTH {
            return Err(invalid(format!(
                "URL exceeds maximum length of {MAX_URL_LENGTH} bytes"
            )));
        }

        let parsed = Url::parse(url.trim()).map_err(|e| invalid(e.to_string()))?;

        let scheme = parsed.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(invalid(format!(
                "invalid scheme '{scheme}', only 'http' and 'https' are allowed"
            )));
        }

        let host = parsed
            .host_str()
            .ok_or_else(|| invalid("URL must have a host".into()))?
            .to_lowercase();

        if !parsed.username().is_empty() || parsed.password().is_some() {
            return Err(invalid("credentials in URL are not allowed".into()));
        }

        Ok(Self {
            url: parsed.to_string(),
            host,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    fn truncate_url(url: &str) -> String {
        match url.char_indices().nth(100) {
            Some((cut, _)) => format!("{}...", &url[..cut]),
            None => url.to_string(),
        }
    }
}

impl std::fmt::Display for ValidatedUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserConfig {
    pub endpoint: ValidatedUrl,
    pub page_size: usize,
    pub description_preview_len: usize,
}

impl BrowserConfig {
    pub fn new(endpoint: impl Into<String>, page_size: usize) -> Result<Self, ConfigError> {
        if page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(Self {
            endpoint: ValidatedUrl::new(endpoint)?,
            page_size,
            description_preview_len: DESCRIPTION_PREVIEW_LENGTH,
        })
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            endpoint: ValidatedUrl {
                url: DEFAULT_ENDPOINT.to_string(),
                host: "data.coa.gov.tw".to_string(),
            },
            page_size: PAGE_SIZE,
            description_preview_len: DESCRIPTION_PREVIEW_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_is_itself_valid() {
        let config = BrowserConfig::default();
        let validated = ValidatedUrl::new(DEFAULT_ENDPOINT).unwrap();
        assert_eq!(config.endpoint, validated);
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn rejects_bad_endpoints() {
        for url in [
            "",
            "   ",
            "not a url",
            "ftp://example.org/data.json",
            "https://user:pw@example.org/data.json",
        ] {
            assert!(
                matches!(ValidatedUrl::new(url), Err(ConfigError::InvalidEndpoint { .. })),
                "{url} should be rejected"
            );
        }
    }

    #[test]
    fn lowercases_host() {
        let url = ValidatedUrl::new("https://Example.ORG/food.json").unwrap();
        assert_eq!(url.host(), "example.org");
        assert_eq!(url.as_str(), "https://example.org/food.json");
    }

    #[test]
    fn rejects_zero_page_size() {
        assert_eq!(
            BrowserConfig::new("https://example.org/food.json", 0),
            Err(ConfigError::ZeroPageSize)
        );
        let config = BrowserConfig::new("https://example.org/food.json", 25).unwrap();
        assert_eq!(config.page_size, 25);
    }
}
