use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;

use listfeed::args::Cli;
use listfeed::config::Config;
use listfeed::logging::init_tracing;
use listfeed::service::{ConnectivityProbe, HttpListService, HttpProbe, ListService, MockListService};
use listfeed::session::{describe, run_session};
use listfeed::ui::home::home_container;
use listfeed::ui::mvi::TokioScheduler;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let path = cli.config_path();
    let mut config = Config::load_from(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    cli.apply(&mut config);
    config.validate()?;

    let service: Arc<dyn ListService> = if config.mock.enabled {
        Arc::new(MockListService::from_config(&config.mock))
    } else {
        Arc::new(HttpListService::new(&config.service).context("Failed to build HTTP client")?)
    };

    // The mock never touches the network, so there is nothing to prime.
    let probe = if config.probe.enabled && !config.mock.enabled {
        Some(HttpProbe::new(&config.probe).context("Failed to build probe client")?)
    } else {
        None
    };

    let container = home_container(service, Arc::new(TokioScheduler::current()));
    let _progress = container.subscribe(|state| eprintln!("{}", describe(state)));

    let state = run_session(
        &container,
        probe.as_ref().map(|p| p as &dyn ConnectivityProbe),
        cli.refresh,
    )
    .await;

    for item in &state.items {
        println!("#{} {}", item.id, item.title);
    }

    if let Some(message) = state.error_message() {
        bail!("{}", message);
    }

    Ok(())
}
