use crate::config::SearchConfig;
use crate::searchlibs::{EncodedKeyword, UrlError};
use reqwest::Method;
use url::Url;

/// A fully built catalog query. Always a GET with no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    url: Url,
    method: Method,
}

impl SearchRequest {
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn method(&self) -> &Method {
        &self.method
    }
}

pub struct RequestBuilder {
    endpoint: String,
    api_key: String,
    max_results: usize,
    order: String,
}

impl RequestBuilder {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            max_results: config.max_results,
            order: config.order.clone(),
        }
    }

    pub fn build(&self, keyword: &EncodedKeyword) -> Result<SearchRequest, UrlError> {
        if self.endpoint.contains(['?', '#']) {
            return Err(UrlError::EndpointHasQuery(self.endpoint.clone()));
        }

        let search_url = format!(
            "{}?apikey={}&format=json&keyword={}&max={}&order={}",
            self.endpoint,
            urlencoding::encode(&self.api_key),
            keyword,
            self.max_results,
            urlencoding::encode(&self.order)
        );

        let url = Url::parse(&search_url)?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(UrlError::UnsupportedScheme(url.scheme().to_string()));
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err(UrlError::MissingHost(search_url));
        }

        Ok(SearchRequest {
            url,
            method: Method::GET,
        })
    }
}
