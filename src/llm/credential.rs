//! API keys read from the environment.

use crate::engine::BackendError;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret bearer token, wiped from memory on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone)]
pub enum Credential {
    /// The endpoint takes no key (e.g. a local inference server).
    Anonymous,
    Present(ApiKey),
    /// A key was configured but the variable is unset or empty.
    Missing { var: String },
}

impl Credential {
    pub fn resolve(api_key_env: Option<&str>) -> Self {
        let Some(var) = api_key_env else {
            return Credential::Anonymous;
        };
        match std::env::var(var) {
            Ok(value) if !value.trim().is_empty() => Credential::Present(ApiKey::new(value.trim())),
            _ => Credential::Missing {
                var: var.to_string(),
            },
        }
    }

    /// `Authorization` header value. Fails closed when the key is missing so
    /// no request goes out without it.
    pub fn authorization(&self) -> Result<Option<String>, BackendError> {
        match self {
            Credential::Anonymous => Ok(None),
            Credential::Present(key) => Ok(Some(format!("Bearer {}", key.expose()))),
            Credential::Missing { var } => Err(BackendError::Auth {
                reason: format!("{} is not set", var),
            }),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Credential::Missing { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variable_fails_closed() {
        let credential = Credential::resolve(Some("STUDYMATE_TEST_NEVER_SET_4A1C"));
        assert!(credential.is_missing());
        let err = credential.authorization().unwrap_err();
        assert_eq!(
            err,
            BackendError::Auth {
                reason: "STUDYMATE_TEST_NEVER_SET_4A1C is not set".to_string()
            }
        );
    }

    #[test]
    fn present_key_becomes_bearer_header() {
        std::env::set_var("STUDYMATE_TEST_KEY_9B2E", " hf_secret \n");
        let credential = Credential::resolve(Some("STUDYMATE_TEST_KEY_9B2E"));
        assert_eq!(
            credential.authorization().unwrap().as_deref(),
            Some("Bearer hf_secret")
        );
    }

    #[test]
    fn no_variable_means_anonymous() {
        assert!(Credential::resolve(None).authorization().unwrap().is_none());
    }

    #[test]
    fn debug_output_hides_the_key() {
        let key = ApiKey::new("sk-live-123");
        assert_eq!(format!("{:?}", key), "ApiKey(***)");
    }
}
