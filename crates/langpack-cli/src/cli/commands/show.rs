//! `langpack show` – print one pack's metadata.

use anyhow::{bail, Result};
use langpack_core::discovery::pack;

use super::load;
use crate::cli::Resolved;

pub fn run_show(resolved: &Resolved, code: &str, file: Option<&str>) -> Result<()> {
    let Some(list) = load(resolved, file)? else {
        bail!(
            "language pack index unavailable for version {}",
            resolved.version
        );
    };
    match pack(&list, code) {
        Some(meta) => println!("{}", serde_json::to_string_pretty(meta)?),
        None => bail!(
            "no language pack {:?} for version {}",
            code,
            resolved.version
        ),
    }
    Ok(())
}
