//! Version provider: the running application's release identifier.
//!
//! Loaders hold a provider and ask it for the version on each call; they
//! never mutate it and never validate its syntax.

use std::sync::Arc;

/// Supplies the version identifier used to select a remote resource set.
pub trait VersionProvider {
    fn version(&self) -> &str;
}

/// Fixed version string, e.g. read once from config or a CLI flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticVersion(String);

impl StaticVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }
}

impl VersionProvider for StaticVersion {
    fn version(&self) -> &str {
        &self.0
    }
}

impl<T: VersionProvider + ?Sized> VersionProvider for &T {
    fn version(&self) -> &str {
        (**self).version()
    }
}

impl<T: VersionProvider + ?Sized> VersionProvider for Arc<T> {
    fn version(&self) -> &str {
        (**self).version()
    }
}
