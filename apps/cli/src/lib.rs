//! Nova CLI: terminal client for the Nova assistant and the career
//! dashboard.

pub use cmd::{Cli, Command};

pub mod cmd;
pub mod config;
pub mod prefs;
pub mod repl;
pub mod terminal;
