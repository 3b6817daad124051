pub mod config;
pub mod logging;

pub mod discovery;
pub mod locator;
pub mod retry;
pub mod version;

pub use discovery::{
    FileLanguagePackLoader, HttpOptions, LanguagePackList, LanguagePackLoader,
    RemoteLanguagePackLoader,
};
pub use locator::LocatorTemplate;
pub use version::{StaticVersion, VersionProvider};
