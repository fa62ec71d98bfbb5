//! Shared test utilities and test doubles.

#![allow(dead_code, unused_imports)]

use async_trait::async_trait;
use listfeed::entity::ListItem;
use listfeed::service::{ConnectivityProbe, ListService, ServiceError};
use listfeed::ui::home::{home_container_with_state, HomeContainer, HomeState};
use listfeed::ui::mvi::{EffectScheduler, QueuedScheduler};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;

pub fn item(id: i64) -> ListItem {
    ListItem::new(id, id, format!("Item {}", id), format!("Body of item {}", id))
}

pub fn items(ids: &[i64]) -> Vec<ListItem> {
    ids.iter().copied().map(item).collect()
}

/// Home container driven by a queued scheduler, for deterministic tests.
pub fn queued_home(
    initial: HomeState,
    service: Arc<dyn ListService>,
) -> (HomeContainer, Arc<QueuedScheduler>) {
    let scheduler = Arc::new(QueuedScheduler::new());
    let container = home_container_with_state(
        initial,
        service,
        Arc::clone(&scheduler) as Arc<dyn EffectScheduler>,
    );
    (container, scheduler)
}

/// Poll `condition` until it holds, panicking after `timeout`.
pub async fn wait_until(timeout: Duration, mut condition: impl FnMut() -> bool) {
    let start = std::time::Instant::now();
    while !condition() {
        if start.elapsed() > timeout {
            panic!("condition not met within {:?}", timeout);
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

// -- Services -----------------------------------------------------------------

/// Outcome a test hands to a gated fetch.
pub type Outcome = Result<Vec<ListItem>, String>;

#[derive(Default)]
struct Gate {
    tx: Option<oneshot::Sender<Outcome>>,
    rx: Option<oneshot::Receiver<Outcome>>,
}

/// Service whose N-th call (0-based) blocks until the test releases it.
#[derive(Default)]
pub struct GatedService {
    calls: AtomicUsize,
    gates: Mutex<HashMap<usize, Gate>>,
}

impl GatedService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of fetches started so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Resolve call number `call` with `outcome`.
    pub fn release(&self, call: usize, outcome: Outcome) {
        let tx = self.with_gate(call, |gate| gate.tx.take());
        let tx = tx.expect("call already released");
        let _ = tx.send(outcome);
    }

    fn with_gate<T>(&self, call: usize, take: impl FnOnce(&mut Gate) -> T) -> T {
        let mut gates = self.gates.lock();
        let gate = gates.entry(call).or_insert_with(|| {
            let (tx, rx) = oneshot::channel();
            Gate {
                tx: Some(tx),
                rx: Some(rx),
            }
        });
        take(gate)
    }
}

#[async_trait]
impl ListService for GatedService {
    async fn fetch_items(&self) -> Result<Vec<ListItem>, ServiceError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let rx = self
            .with_gate(call, |gate| gate.rx.take())
            .expect("gate receiver taken twice");
        match rx.await {
            Ok(Ok(items)) => Ok(items),
            Ok(Err(message)) => Err(ServiceError::network(message)),
            Err(_) => Err(ServiceError::network("gate dropped")),
        }
    }
}

/// Service that answers immediately with a fixed result and counts calls.
pub struct StaticService {
    outcome: Outcome,
    calls: AtomicUsize,
}

impl StaticService {
    pub fn ok(items: Vec<ListItem>) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(items),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ListService for StaticService {
    async fn fetch_items(&self) -> Result<Vec<ListItem>, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Ok(items) => Ok(items.clone()),
            Err(message) => Err(ServiceError::network(message.clone())),
        }
    }
}

/// Probe that only records that it was called.
#[derive(Default)]
pub struct CountingProbe {
    calls: AtomicUsize,
}

impl CountingProbe {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConnectivityProbe for CountingProbe {
    async fn probe(&self) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        true
    }
}

// -- HTTP ---------------------------------------------------------------------

/// Serve `router` on an ephemeral local port.
pub async fn serve(router: axum::Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    addr
}
