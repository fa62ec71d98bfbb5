//! Command line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Load the item list through the home container and print it.
#[derive(Parser, Debug)]
#[command(name = "listfeed", version)]
pub struct Cli {
    /// Config file (default: platform config dir, listfeed/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use the offline mock service instead of the remote endpoint
    #[arg(long)]
    pub mock: bool,

    /// Make the mock service fail (implies --mock)
    #[arg(long)]
    pub fail: bool,

    /// Fixed mock latency in milliseconds (implies --mock)
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Pull to refresh once the first load has finished
    #[arg(long)]
    pub refresh: bool,

    /// Skip the connectivity probe before the first load
    #[arg(long)]
    pub no_probe: bool,
}

impl Cli {
    /// Config file to read.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Apply command line overrides on top of the file config.
    pub fn apply(&self, config: &mut Config) {
        if self.mock || self.fail || self.delay_ms.is_some() {
            config.mock.enabled = true;
        }
        if self.fail {
            config.mock.should_fail = true;
        }
        if let Some(ms) = self.delay_ms {
            config.mock.delay_min_ms = ms;
            config.mock.delay_max_ms = ms;
        }
        if self.no_probe {
            config.probe.enabled = false;
        }
    }
}
