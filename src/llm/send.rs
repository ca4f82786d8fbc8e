use crate::engine::BackendError;
use crate::llm::credential::Credential;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Maps a non-success HTTP status onto the backend failure kinds.
pub fn classify_status(status: u16, body: &str) -> BackendError {
    let detail = body.trim();
    match status {
        401 => BackendError::Auth {
            reason: "Authentication failed - check your API key".to_string(),
        },
        403 => BackendError::Auth {
            reason: "Access forbidden - insufficient permissions".to_string(),
        },
        429 => BackendError::Unavailable {
            status,
            reason: "Rate limit exceeded - too many requests".to_string(),
        },
        500..=599 => BackendError::Unavailable {
            status,
            reason: format!("Server error: {}", detail),
        },
        _ => BackendError::Transport {
            reason: format!("HTTP error {}: {}", status, detail),
        },
    }
}

fn classify_request_error(e: reqwest::Error, timeout: Duration) -> BackendError {
    if e.is_timeout() {
        BackendError::Timeout { after: timeout }
    } else if e.is_connect() {
        BackendError::Transport {
            reason: format!("Connection error - unable to reach the API: {}", e),
        }
    } else {
        BackendError::Transport {
            reason: format!("Network error: {}", e),
        }
    }
}

pub fn build_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder().timeout(timeout).build()
}

/// Makes the actual HTTP request and returns the decoded JSON body.
pub async fn post_json<B: Serialize + ?Sized>(
    client: &Client,
    url: &str,
    credential: &Credential,
    body: &B,
    timeout: Duration,
) -> Result<serde_json::Value, BackendError> {
    let authorization = credential.authorization()?;

    let mut request = client
        .post(url)
        .header("Content-Type", "application/json")
        .json(body);
    if let Some(value) = authorization {
        request = request.header("Authorization", value);
    }

    let response = request
        .send()
        .await
        .map_err(|e| classify_request_error(e, timeout))?;

    let status = response.status();
    debug!(url = url, status = status.as_u16(), "Backend responded");

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(classify_status(status.as_u16(), &error_text));
    }

    response.json().await.map_err(|e| {
        if e.is_timeout() {
            BackendError::Timeout { after: timeout }
        } else {
            BackendError::Transport {
                reason: format!("Failed to parse API response as JSON: {}", e),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_statuses_are_terminal() {
        assert!(classify_status(401, "").is_terminal());
        assert!(classify_status(403, "nope").is_terminal());
    }

    #[test]
    fn overload_statuses_are_unavailable() {
        assert_eq!(
            classify_status(503, "{\"error\":\"Model distilgpt2 is currently loading\"}"),
            BackendError::Unavailable {
                status: 503,
                reason: "Server error: {\"error\":\"Model distilgpt2 is currently loading\"}".to_string(),
            }
        );
        assert!(matches!(classify_status(429, ""), BackendError::Unavailable { status: 429, .. }));
        assert!(matches!(classify_status(502, ""), BackendError::Unavailable { status: 502, .. }));
    }

    #[test]
    fn other_statuses_are_transport_errors() {
        let err = classify_status(404, " not found ");
        assert_eq!(
            err,
            BackendError::Transport {
                reason: "HTTP error 404: not found".to_string()
            }
        );
        assert!(!err.is_terminal());
    }

    #[tokio::test]
    async fn missing_key_short_circuits_before_sending() {
        let client = build_client(Duration::from_secs(1)).unwrap();
        let credential = Credential::Missing {
            var: "HF_TOKEN".to_string(),
        };
        // Nothing listens on the discard port; reaching it would be a transport error.
        let err = post_json(
            &client,
            "http://127.0.0.1:9/generate",
            &credential,
            &serde_json::json!({}),
            Duration::from_secs(1),
        )
        .await
        .unwrap_err();
        assert!(err.is_terminal());
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_not_terminal() {
        let client = build_client(Duration::from_secs(2)).unwrap();
        let err = post_json(
            &client,
            "http://127.0.0.1:9/generate",
            &Credential::Anonymous,
            &serde_json::json!({"inputs": "hi"}),
            Duration::from_secs(2),
        )
        .await
        .unwrap_err();
        assert!(!err.is_terminal());
    }
}
