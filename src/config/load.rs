use crate::cli::Cli;
use crate::config::types::Config;
use crate::tools::{expand_home, with_trailing_separator};
use std::path::PathBuf;

impl Config {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            source_directory: resolve_directory(&cli.source_directory),
            target_directory: resolve_directory(&cli.target_directory),
        }
    }
}

fn resolve_directory(raw: &str) -> PathBuf {
    with_trailing_separator(expand_home(raw))
}
