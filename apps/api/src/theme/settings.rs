use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{watch, Mutex};
use tracing::{info, warn};

use crate::theme::store::ThemeStore;
use crate::theme::DisplayMode;

/// Where the initial display mode came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeSource {
    Stored,
    SystemPreference,
    Default,
}

/// Process-wide display-mode setting.
///
/// Initialization order: stored preference, then the system preference, then
/// light. The current value lives in a `watch` channel: reads are snapshots and
/// every committed update reaches subscribers. Updates persist to the store
/// after the in-memory value changes; a failed write is logged, not rolled back.
/// Updates are serialized so the store always ends on the live mode.
#[derive(Clone)]
pub struct ThemeSettings {
    tx: Arc<watch::Sender<DisplayMode>>,
    store: Arc<dyn ThemeStore>,
    /// Held across the in-memory change and its write.
    update: Arc<Mutex<()>>,
    source: ModeSource,
}

impl ThemeSettings {
    pub async fn initialize(
        store: Arc<dyn ThemeStore>,
        system_preference: Option<DisplayMode>,
    ) -> Self {
        let stored = match store.load().await {
            Ok(mode) => mode,
            Err(e) => {
                warn!(backend = store.backend(), "Could not read stored display mode: {e}");
                None
            }
        };

        let (mode, source) = match (stored, system_preference) {
            (Some(m), _) => (m, ModeSource::Stored),
            (None, Some(m)) => (m, ModeSource::SystemPreference),
            (None, None) => (DisplayMode::default(), ModeSource::Default),
        };
        info!(
            mode = %mode,
            source = ?source,
            backend = store.backend(),
            "Display mode initialized"
        );

        let (tx, _rx) = watch::channel(mode);
        Self {
            tx: Arc::new(tx),
            store,
            update: Arc::new(Mutex::new(())),
            source,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        *self.tx.borrow()
    }

    pub fn source(&self) -> ModeSource {
        self.source
    }

    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }

    /// Returns a receiver that observes every subsequent update.
    pub fn subscribe(&self) -> watch::Receiver<DisplayMode> {
        self.tx.subscribe()
    }

    /// Picks `requested` when given, otherwise the current mode.
    pub fn resolve(&self, requested: Option<DisplayMode>) -> DisplayMode {
        requested.unwrap_or_else(|| self.mode())
    }

    pub async fn set_mode(&self, mode: DisplayMode) -> DisplayMode {
        let _guard = self.update.lock().await;
        self.tx.send_replace(mode);
        self.persist(mode).await;
        mode
    }

    pub async fn toggle(&self) -> DisplayMode {
        let _guard = self.update.lock().await;
        let mut next = DisplayMode::default();
        self.tx.send_modify(|current| {
            *current = current.toggled();
            next = *current;
        });
        self.persist(next).await;
        next
    }

    async fn persist(&self, mode: DisplayMode) {
        if let Err(e) = self.store.save(mode).await {
            warn!(
                mode = %mode,
                backend = self.store.backend(),
                "Could not persist display mode: {e}"
            );
        }
    }
}
