use std::env;

use serde::{Deserialize, Serialize};

fn default_source_lang() -> String {
    "en".to_string()
}

fn default_api_url() -> String {
    "https://od-api.oxforddictionaries.com/api/v2".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Oxford application id
    #[serde(default)]
    pub app_id: String,
    /// Oxford application key
    #[serde(default)]
    pub app_key: String,
    /// Source language code for lookups
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    /// API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Missing credentials are left empty rather than rejected here; a bad
    /// or absent credential surfaces as a lookup failure at the first query.
    pub fn from_env() -> Self {
        let app_id = env::var("APP_ID").unwrap_or_default();
        let app_key = env::var("APP_KEY").unwrap_or_default();
        let source_lang = env::var("SOURCE_LANG").unwrap_or_else(|_| default_source_lang());
        let api_url = env::var("OXFORD_API_URL").unwrap_or_else(|_| default_api_url());

        Config {
            app_id,
            app_key,
            source_lang,
            api_url,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            app_key: String::new(),
            source_lang: default_source_lang(),
            api_url: default_api_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_production_api() {
        let config = Config::default();
        assert_eq!(config.source_lang, "en");
        assert_eq!(config.api_url, "https://od-api.oxforddictionaries.com/api/v2");
        assert!(config.app_id.is_empty());
        assert!(config.app_key.is_empty());
    }
}
