//! Backend URL resolution for the CLI.
//!
//! Resolves in priority order:
//! 1. `--base-url <url>` flag
//! 2. `NOVA_BASE_URL` environment variable
//! 3. `base_url` in `~/.config/nova/cli.toml`
//! 4. `http://localhost:8000`

use crate::prefs::CliPrefs;
use client::DEFAULT_BASE_URL;

/// Environment variable overriding the backend URL.
pub const BASE_URL_ENV: &str = "NOVA_BASE_URL";

/// Pick the backend URL from the sources above. Blank values are skipped.
pub fn resolve_base_url(flag: Option<&str>, env: Option<&str>, prefs: &CliPrefs) -> String {
    [flag, env, prefs.base_url.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .unwrap_or(DEFAULT_BASE_URL)
        .to_owned()
}
