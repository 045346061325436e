use async_trait::async_trait;
use lexamp_config::Config;
use lexamp_lookup::{DefinitionProvider, LookupError, RetrieveEntry};
use reqwest::Url;

/// Client for the Oxford Dictionaries entries endpoint.
#[derive(Clone)]
pub struct OxfordClient {
    client: reqwest::Client,
    base_url: String,
    app_id: String,
    app_key: String,
    source_lang: String,
}

impl OxfordClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.api_url.clone(),
            app_id: config.app_id.clone(),
            app_key: config.app_key.clone(),
            source_lang: config.source_lang.clone(),
        }
    }

    /// Build the entry URL for a word, percent-encoding the word as a
    /// single path segment.
    fn entry_url(&self, word: &str) -> Result<Url, LookupError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| LookupError::ApiError(format!("Invalid API base URL: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| LookupError::ApiError("API base URL cannot hold a path".to_string()))?
            .pop_if_empty()
            .extend(["entries", self.source_lang.as_str(), word]);

        Ok(url)
    }
}

#[async_trait]
impl DefinitionProvider for OxfordClient {
    async fn definitions(&self, word: &str) -> Result<RetrieveEntry, LookupError> {
        let url = self.entry_url(word)?;
        tracing::debug!("Requesting definitions from {}", url);

        let response = self
            .client
            .get(url)
            .query(&[("fields", "definitions")])
            .header("app_id", self.app_id.as_str())
            .header("app_key", self.app_key.as_str())
            .send()
            .await?;

        if response.status() == 404 {
            return Err(LookupError::NotFound {
                word: word.to_string(),
            });
        }

        if response.status() == 429 {
            return Err(LookupError::RateLimitExceeded);
        }

        if response.status() == 401 || response.status() == 403 {
            return Err(LookupError::AuthenticationError);
        }

        if !response.status().is_success() {
            return Err(LookupError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let entry = response.json::<RetrieveEntry>().await?;
        tracing::debug!("Received {} result(s) for '{}'", entry.results.len(), word);

        Ok(entry)
    }
}
