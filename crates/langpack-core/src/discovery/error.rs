//! Failure kinds of a single discovery attempt.
//!
//! [`super::RemoteLanguagePackLoader::discover`] collapses all of these into
//! `None`; they stay visible through `try_discover` for diagnostics and retry
//! classification.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The version provider returned an empty string.
    #[error("empty version identifier")]
    EmptyVersion,
    /// The substituted locator could not be handed to curl.
    #[error("invalid locator {url}: {source}")]
    InvalidLocator {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// Curl reported an error (timeout, connection refused, DNS, etc.).
    #[error("transport: {0}")]
    Curl(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Local pack file could not be read.
    #[error("read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Body is not valid JSON.
    #[error("decode: {0}")]
    Decode(#[from] serde_json::Error),
    /// Body is valid JSON but the top level is not an object.
    #[error("expected a JSON object at top level, got {0}")]
    NotAnObject(&'static str),
}

impl DiscoveryError {
    /// True for connection, status and locator failures.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DiscoveryError::InvalidLocator { .. }
                | DiscoveryError::Curl(_)
                | DiscoveryError::Http(_)
                | DiscoveryError::Io { .. }
        )
    }

    /// True when the payload arrived but could not be decoded into a mapping.
    pub fn is_decode(&self) -> bool {
        matches!(self, DiscoveryError::Decode(_) | DiscoveryError::NotAnObject(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_is_transport() {
        let e = DiscoveryError::Http(404);
        assert!(e.is_transport());
        assert!(!e.is_decode());
        assert_eq!(e.to_string(), "HTTP 404");
    }

    #[test]
    fn malformed_json_is_decode() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let e = DiscoveryError::from(err);
        assert!(e.is_decode());
        assert!(!e.is_transport());
    }

    #[test]
    fn not_an_object_message_names_kind() {
        let e = DiscoveryError::NotAnObject("array");
        assert!(e.is_decode());
        assert!(e.to_string().contains("array"));
    }
}
