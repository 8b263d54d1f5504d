use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Async content view demo: an article screen driven by a load state.
#[derive(Debug, Parser)]
#[command(name = "async-content", version, about)]
pub struct Cli {
    /// Config file (default: ~/.config/async-content/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Fetch the article from this URL instead of the scripted demo source
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Override the UI tick rate in milliseconds
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: Option<u64>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.url {
            config.remote.url = Some(url.clone());
        }
        if let Some(tick_ms) = self.tick_ms {
            config.ui.tick_rate_ms = tick_ms;
        }
    }
}
