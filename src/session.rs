//! Drives one home screen session from the command line.

use tokio::sync::watch;

use crate::service::ConnectivityProbe;
use crate::ui::home::{HomeContainer, HomeIntent, HomeState, Phase};

/// Prime connectivity, load the list, optionally refresh, and return the
/// settled state.
pub async fn run_session(
    container: &HomeContainer,
    probe: Option<&dyn ConnectivityProbe>,
    refresh: bool,
) -> HomeState {
    if let Some(probe) = probe {
        probe.probe().await;
    }

    let mut rx = container.watch();
    container.send(HomeIntent::InitialLoad);
    let mut state = settled(&mut rx).await;

    if refresh {
        container.send(HomeIntent::Refresh);
        state = settled(&mut rx).await;
    }

    state
}

/// Wait until the phase leaves `Loading`.
async fn settled(rx: &mut watch::Receiver<HomeState>) -> HomeState {
    if let Ok(state) = rx.wait_for(|state| !state.is_loading()).await {
        return state.clone();
    }
    rx.borrow().clone()
}

/// One-line progress description of a state.
pub fn describe(state: &HomeState) -> String {
    match &state.phase {
        Phase::Loading if state.is_refreshing() => {
            format!("refreshing ({} items on screen)", state.items.len())
        }
        Phase::Loading => "loading".to_string(),
        Phase::Loaded if state.items.is_empty() => "loaded: no items".to_string(),
        Phase::Loaded => format!("loaded {} items", state.items.len()),
        Phase::Error(message) => format!("error: {}", message),
    }
}
