//! Config management commands: show, set.

use crate::{cmd::ConfigCommand, prefs::CliPrefs};
use anyhow::{Context, Result};
use std::path::Path;

/// Dispatch config management subcommands.
pub fn run(action: &ConfigCommand) -> Result<()> {
    let path = CliPrefs::path();
    match action {
        ConfigCommand::Show => show(&path),
        ConfigCommand::Set { key, value } => {
            set(&path, key, value)?;
            println!("Set {key} = {value} in {}", path.display());
            Ok(())
        }
    }
}

fn show(path: &Path) -> Result<()> {
    if !path.exists() {
        println!("No config file at {}", path.display());
        return Ok(());
    }
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    print!("{contents}");
    Ok(())
}

/// Write `key = value` into the TOML file at `path`, creating it if needed.
///
/// Dotted keys address a table: `server.url` sets `url` under `[server]`.
/// `true`, `false` and integers are stored typed; anything else as a string.
pub fn set(path: &Path, key: &str, value: &str) -> Result<()> {
    let contents = if path.exists() {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    } else {
        String::new()
    };

    let mut doc: toml::Table = contents
        .parse()
        .with_context(|| format!("parsing {}", path.display()))?;
    let value = parse_value(value);

    let parts: Vec<&str> = key.split('.').collect();
    match parts.as_slice() {
        [section, field] => {
            let table = doc
                .entry(*section)
                .or_insert_with(|| toml::Value::Table(toml::Table::new()))
                .as_table_mut()
                .ok_or_else(|| anyhow::anyhow!("'{section}' is not a table"))?;
            table.insert((*field).to_owned(), value);
        }
        [field] => {
            doc.insert((*field).to_owned(), value);
        }
        _ => anyhow::bail!("invalid key format: '{key}' (use 'section.field' or 'field')"),
    }

    // reject edits that would make the prefs file unloadable
    if path.file_name().is_some_and(|n| n == "cli.toml") {
        toml::Value::Table(doc.clone())
            .try_into::<CliPrefs>()
            .with_context(|| format!("'{key}' is not a valid preference"))?;
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, doc.to_string()).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn parse_value(value: &str) -> toml::Value {
    if let Ok(b) = value.parse::<bool>() {
        return toml::Value::Boolean(b);
    }
    if let Ok(i) = value.parse::<i64>() {
        return toml::Value::Integer(i);
    }
    toml::Value::String(value.to_owned())
}
