use crate::searchlibs::SearchRequest;
use reqwest::Client;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Timeout error")]
    TimeoutError,

    #[error("HTTP {status} error: {reason}")]
    StatusError { status: u16, reason: String },
}

fn classify(e: reqwest::Error) -> NetworkError {
    if e.is_timeout() {
        NetworkError::TimeoutError
    } else {
        NetworkError::HttpError(e)
    }
}

/// Issues one GET and returns the raw body. The client (and its connection
/// pool) lives only for this call; nothing is retried.
pub async fn get_payload(request: &SearchRequest, user_agent: &str) -> Result<Vec<u8>, NetworkError> {
    let client = Client::builder().user_agent(user_agent).build()?;

    let response = client
        .request(request.method().clone(), request.url().clone())
        .send()
        .await;

    match response {
        Ok(resp) => {
            let status = resp.status();
            if !status.is_success() {
                return Err(NetworkError::StatusError {
                    status: status.as_u16(),
                    reason: status
                        .canonical_reason()
                        .unwrap_or("unknown status")
                        .to_string(),
                });
            }

            let body = resp.bytes().await.map_err(classify)?;
            Ok(body.to_vec())
        }
        Err(e) => Err(classify(e)),
    }
}
