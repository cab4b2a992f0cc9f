use crate::config::SearchConfig;
use crate::searchlibs::SearchRequest;
use crate::web::web::{get_payload, NetworkError};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait SearchEngine: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<u8>, NetworkError>;
}

#[async_trait]
impl<T: SearchEngine + ?Sized> SearchEngine for Arc<T> {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<u8>, NetworkError> {
        (**self).search(request).await
    }
}

/// HTTP-backed engine for the snack catalog API.
pub struct SearchClient {
    user_agent: String,
}

impl SearchClient {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
        }
    }
}

impl Default for SearchClient {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}

#[async_trait]
impl SearchEngine for SearchClient {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<u8>, NetworkError> {
        get_payload(request, &self.user_agent).await
    }
}
