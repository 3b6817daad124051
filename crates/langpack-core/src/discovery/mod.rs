//! Language-pack discovery: resolve a version into a locator, fetch the pack
//! index and decode it.
//!
//! Every failure (transport, status, decode) collapses to `None` at the
//! `discover` / [`LanguagePackLoader`] surface, so callers treat "no data"
//! and "error" the same way. `try_discover` keeps the [`DiscoveryError`] for
//! diagnostics.

mod decode;
mod error;
mod fetch;

pub use error::DiscoveryError;
pub use fetch::HttpOptions;

use std::fs;

use serde_json::{Map, Value};

use crate::locator::LocatorTemplate;
use crate::retry::{run_with_retry, RetryPolicy};
use crate::version::VersionProvider;

/// Decoded pack index: language code -> metadata, values kept as served.
pub type LanguagePackList = Map<String, Value>;

/// Source of the pack list for the running version.
pub trait LanguagePackLoader {
    fn language_pack_list(&self) -> Option<LanguagePackList>;
}

/// Metadata of one language pack, if listed.
pub fn pack<'a>(list: &'a LanguagePackList, code: &str) -> Option<&'a Value> {
    list.get(code)
}

/// Language codes in the list, sorted.
pub fn language_codes(list: &LanguagePackList) -> Vec<&str> {
    let mut codes: Vec<&str> = list.keys().map(String::as_str).collect();
    codes.sort_unstable();
    codes
}

/// Fetches `available_languages.json` for a version over HTTP.
///
/// Holds only immutable configuration; concurrent `discover` calls are
/// independent and each opens its own curl handle.
#[derive(Debug, Clone)]
pub struct RemoteLanguagePackLoader<V> {
    template: LocatorTemplate,
    version: V,
    http: HttpOptions,
    retry: Option<RetryPolicy>,
}

impl<V: VersionProvider> RemoteLanguagePackLoader<V> {
    pub fn new(template: LocatorTemplate, version: V) -> Self {
        Self {
            template,
            version,
            http: HttpOptions::default(),
            retry: None,
        }
    }

    pub fn with_http_options(mut self, http: HttpOptions) -> Self {
        self.http = http;
        self
    }

    /// Retries transient failures. Without a policy exactly one attempt is made.
    pub fn with_retry(mut self, policy: RetryPolicy) -> Self {
        self.retry = Some(policy);
        self
    }

    pub fn template(&self) -> &LocatorTemplate {
        &self.template
    }

    pub fn version_provider(&self) -> &V {
        &self.version
    }

    /// Concrete locator for `version`.
    pub fn resolve(&self, version: &str) -> String {
        self.template.resolve(version)
    }

    /// Pack list for `version`, or `None` on any failure.
    pub fn discover(&self, version: &str) -> Option<LanguagePackList> {
        match self.try_discover(version) {
            Ok(list) => Some(list),
            Err(e) => {
                tracing::warn!("no language packs for version {:?}: {}", version, e);
                None
            }
        }
    }

    /// Same flow as [`Self::discover`], keeping the failure kind.
    pub fn try_discover(&self, version: &str) -> Result<LanguagePackList, DiscoveryError> {
        if version.is_empty() {
            return Err(DiscoveryError::EmptyVersion);
        }
        let url = self.resolve(version);
        tracing::debug!("discovering language packs at {}", url);

        let attempt = || {
            fetch::get_body(&url, &self.http).and_then(|body| decode::decode_pack_list(&body))
        };
        match &self.retry {
            Some(policy) => run_with_retry(policy, attempt),
            None => attempt(),
        }
    }
}

impl<V: VersionProvider> LanguagePackLoader for RemoteLanguagePackLoader<V> {
    fn language_pack_list(&self) -> Option<LanguagePackList> {
        self.discover(self.version.version())
    }
}

/// Reads the pack index from a local JSON file, e.g. a mirrored copy for
/// offline installs. The path template takes the same placeholder.
#[derive(Debug, Clone)]
pub struct FileLanguagePackLoader<V> {
    template: LocatorTemplate,
    version: V,
}

impl<V: VersionProvider> FileLanguagePackLoader<V> {
    pub fn new(template: LocatorTemplate, version: V) -> Self {
        Self { template, version }
    }

    pub fn discover(&self, version: &str) -> Option<LanguagePackList> {
        match self.try_discover(version) {
            Ok(list) => Some(list),
            Err(e) => {
                tracing::warn!("no local language packs for version {:?}: {}", version, e);
                None
            }
        }
    }

    pub fn try_discover(&self, version: &str) -> Result<LanguagePackList, DiscoveryError> {
        if version.is_empty() {
            return Err(DiscoveryError::EmptyVersion);
        }
        let path = self.template.resolve(version);
        let body = fs::read(&path).map_err(|source| DiscoveryError::Io {
            path: path.clone(),
            source,
        })?;
        decode::decode_pack_list(&body)
    }
}

impl<V: VersionProvider> LanguagePackLoader for FileLanguagePackLoader<V> {
    fn language_pack_list(&self) -> Option<LanguagePackList> {
        self.discover(self.version.version())
    }
}
