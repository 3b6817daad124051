//! `langpack list` – show the language packs available for a version.

use anyhow::Result;
use langpack_core::discovery::language_codes;
use langpack_core::LanguagePackList;
use serde_json::Value;

use super::load;
use crate::cli::Resolved;

pub fn run_list(resolved: &Resolved, json: bool, file: Option<&str>) -> Result<()> {
    let list = load(resolved, file)?;
    if json {
        let value = list.map(Value::Object).unwrap_or(Value::Null);
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }
    match list {
        None => println!(
            "No language packs available for version {} (index unreachable or invalid).",
            resolved.version
        ),
        Some(list) if list.is_empty() => {
            println!("No language packs published for version {}.", resolved.version)
        }
        Some(list) => print_table(&list),
    }
    Ok(())
}

fn print_table(list: &LanguagePackList) {
    println!("{:<10} {}", "CODE", "NAME");
    for code in language_codes(list) {
        println!("{:<10} {}", code, display_name(&list[code]));
    }
}

/// `name` field of a pack's metadata, or "-".
pub(crate) fn display_name(meta: &Value) -> &str {
    meta.get("name").and_then(Value::as_str).unwrap_or("-")
}
