//! Observable UI toggle store.
//!
//! One store per page load. Handles are cheap to clone and all share the
//! same state; writers go through the setters, readers either take a
//! [`UiStore::snapshot`] or [`UiStore::subscribe`] for change notifications.

use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// Everything the page chrome toggles on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    pub navigation_open: bool,
    pub fonts_loaded: bool,
    pub parallax_loaded: bool,
}

impl UiState {
    /// Fonts and decorative layers are both loaded.
    pub fn ready(&self) -> bool {
        self.fonts_loaded && self.parallax_loaded
    }
}

/// Shared handle to the page's [`UiState`].
#[derive(Debug, Clone)]
pub struct UiStore {
    tx: Arc<watch::Sender<UiState>>,
}

impl Default for UiStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UiStore {
    /// Closed navigation, nothing loaded.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(UiState::default());
        Self { tx: Arc::new(tx) }
    }

    /// Latest state.
    pub fn snapshot(&self) -> UiState {
        *self.tx.borrow()
    }

    /// Receiver that is notified on every change.
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.tx.subscribe()
    }

    pub fn toggle_navigation(&self) {
        self.update(|s| s.navigation_open = !s.navigation_open);
    }

    pub fn open_navigation(&self) {
        self.update(|s| s.navigation_open = true);
    }

    pub fn close_navigation(&self) {
        self.update(|s| s.navigation_open = false);
    }

    pub fn set_fonts_loaded(&self, value: bool) {
        self.update(|s| s.fonts_loaded = value);
    }

    pub fn set_parallax_loaded(&self, value: bool) {
        self.update(|s| s.parallax_loaded = value);
    }

    /// Forget both readiness flags, e.g. before a client-side page swap.
    pub fn reset_loading_state(&self) {
        self.update(|s| {
            s.fonts_loaded = false;
            s.parallax_loaded = false;
        });
    }

    // Only wakes subscribers when something actually changed.
    fn update(&self, f: impl FnOnce(&mut UiState)) {
        self.tx.send_if_modified(|state| {
            let before = *state;
            f(state);
            let changed = *state != before;
            if changed {
                debug!(?state, "ui state changed");
            }
            changed
        });
    }
}
