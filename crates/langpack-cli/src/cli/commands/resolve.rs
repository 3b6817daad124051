//! `langpack resolve` – print the pack index URL.

use anyhow::Result;

use crate::cli::Resolved;

pub fn run_resolve(resolved: &Resolved) -> Result<()> {
    let loader = resolved.remote_loader()?;
    println!("{}", loader.resolve(&resolved.version));
    Ok(())
}
