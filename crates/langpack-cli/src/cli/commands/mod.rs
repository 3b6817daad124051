//! CLI command handlers, one file per command.

mod list;
mod resolve;
mod show;

pub use list::run_list;
pub use resolve::run_resolve;
pub use show::run_show;

use anyhow::Result;
use langpack_core::{LanguagePackList, LanguagePackLoader};

use super::Resolved;

/// Pack list from the local file template when given, else over HTTP.
fn load(resolved: &Resolved, file: Option<&str>) -> Result<Option<LanguagePackList>> {
    let loader: Box<dyn LanguagePackLoader> = match file {
        Some(path) => Box::new(resolved.file_loader(path)?),
        None => Box::new(resolved.remote_loader()?),
    };
    Ok(loader.language_pack_list())
}
