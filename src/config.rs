// src/config.rs
pub const DEFAULT_ENDPOINT: &str = "https://sysbird.jp/toriko/api/";
pub const DEFAULT_API_KEY: &str = "guest";
pub const DEFAULT_MAX_RESULTS: usize = 10;
pub const DEFAULT_ORDER: &str = "r";

/// Values the request builder and search client read.
///
/// `SearchConfig::default()` targets the public catalog API with the guest
/// key and the fixed page size; tests and the CLI override single fields
/// through the `with_*` methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub endpoint: String,
    pub api_key: String,
    pub max_results: usize,
    pub order: String,
    pub user_agent: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            order: DEFAULT_ORDER.to_string(),
            user_agent: format!("okashi/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = api_key.to_string();
        self
    }

    pub fn with_user_agent(mut self, name: &str, version: &str) -> Self {
        self.user_agent = format!("{}/{}", name, version);
        self
    }
}
