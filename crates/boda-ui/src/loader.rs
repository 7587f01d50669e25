//! Full-screen loading overlay.
//!
//! The overlay stays up until the [`UiStore`] reports fonts and decorative
//! layers ready, then fades out and is removed:
//!
//! ```text
//! Visible --(ready, 2nd animation frame)--> Exiting --(UNMOUNT_DELAY)--> Gone
//! ```
//!
//! The two-frame wait lets the browser paint the fully opaque overlay once
//! before the opacity transition starts; otherwise the transition can be
//! skipped. The unmount timer is armed at the same moment as the frames, so
//! a page that never paints still loses its overlay. Nothing ever moves back
//! towards `Visible`.
//!
//! Time is supplied by the caller ([`PageLoader::on_animation_frame`],
//! [`PageLoader::advance`]) so the machine stays deterministic; [`PageLoader::run`]
//! drives it from the tokio clock.

use std::time::Duration;
use tokio::sync::watch;
use tracing::debug;

use crate::store::{UiState, UiStore};
use boda_core::route::is_home_page;

/// Length of the fade-out transition.
pub const FADE_DURATION: Duration = Duration::from_millis(550);

/// Time from readiness to removal: the fade plus a small buffer.
pub const UNMOUNT_DELAY: Duration = Duration::from_millis(550 + 150);

/// Animation frames to wait before starting the fade.
const FRAMES_BEFORE_EXIT: u8 = 2;

/// Roughly one frame at 60 Hz.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderPhase {
    Visible,
    Exiting,
    Gone,
}

/// Presentation of the overlay for its current phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub opacity: f32,
    /// Inner spinner scale.
    pub scale: f32,
    pub pointer_events: bool,
    pub aria_busy: bool,
    pub fade: Duration,
}

/// Loader overlay bound to a page's [`UiStore`].
#[derive(Debug)]
pub struct PageLoader {
    rx: watch::Receiver<UiState>,
    phase: LoaderPhase,
    ready: bool,
    /// Frames still to wait before `Exiting`; `None` when no request is pending.
    frames_left: Option<u8>,
    /// Time left before `Gone`; `None` when the timer is not armed.
    unmount_in: Option<Duration>,
}

impl PageLoader {
    /// Mount the overlay for `pathname`.
    ///
    /// Only the home page has decorative parallax layers to wait for; every
    /// other page reports them loaded straight away.
    pub fn mount(store: &UiStore, pathname: &str) -> Self {
        if !is_home_page(pathname) {
            store.set_parallax_loaded(true);
        }
        let mut loader = Self {
            rx: store.subscribe(),
            phase: LoaderPhase::Visible,
            ready: false,
            frames_left: None,
            unmount_in: None,
        };
        loader.sync();
        loader
    }

    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    /// Both readiness flags were set at the last sync.
    pub fn ready(&self) -> bool {
        self.ready
    }

    /// Style for the current phase, `None` once the overlay is gone.
    pub fn style(&self) -> Option<OverlayStyle> {
        let exiting = match self.phase {
            LoaderPhase::Gone => return None,
            LoaderPhase::Visible => false,
            LoaderPhase::Exiting => true,
        };
        Some(OverlayStyle {
            opacity: if exiting { 0.0 } else { 1.0 },
            scale: if exiting { 0.92 } else { 1.0 },
            pointer_events: !exiting,
            aria_busy: !self.ready,
            fade: FADE_DURATION,
        })
    }

    /// Pick up the latest store state, arming or cancelling the exit.
    pub fn sync(&mut self) {
        let ready = self.rx.borrow_and_update().ready();
        if ready == self.ready {
            return;
        }
        self.ready = ready;
        if ready {
            if self.phase != LoaderPhase::Gone {
                debug!("loader ready, waiting {FRAMES_BEFORE_EXIT} frames");
                self.frames_left = Some(FRAMES_BEFORE_EXIT);
                self.unmount_in = Some(UNMOUNT_DELAY);
            }
        } else {
            // Readiness withdrawn: drop the pending frame requests and timer.
            self.frames_left = None;
            self.unmount_in = None;
        }
    }

    /// One browser animation frame elapsed.
    pub fn on_animation_frame(&mut self) {
        self.sync();
        let Some(left) = self.frames_left else {
            return;
        };
        if left > 1 {
            self.frames_left = Some(left - 1);
            return;
        }
        self.frames_left = None;
        if self.phase == LoaderPhase::Visible {
            debug!("loader exiting");
            self.phase = LoaderPhase::Exiting;
        }
    }

    /// Wall-clock time passed.
    pub fn advance(&mut self, elapsed: Duration) {
        self.sync();
        let Some(left) = self.unmount_in else {
            return;
        };
        match left.checked_sub(elapsed) {
            Some(rest) if !rest.is_zero() => self.unmount_in = Some(rest),
            _ => {
                debug!("loader gone");
                self.unmount_in = None;
                self.frames_left = None;
                self.phase = LoaderPhase::Gone;
            }
        }
    }

    /// Drive the overlay at [`FRAME_INTERVAL`] until it is gone.
    pub async fn run(mut self) {
        let mut ticker = tokio::time::interval(FRAME_INTERVAL);
        let mut changes = self.rx.clone();
        let mut last = tokio::time::Instant::now();
        while self.phase != LoaderPhase::Gone {
            tokio::select! {
                now = ticker.tick() => {
                    self.on_animation_frame();
                    self.advance(now.saturating_duration_since(last));
                    last = now;
                }
                changed = changes.changed() => {
                    if changed.is_err() {
                        // Store dropped: the page is being torn down.
                        return;
                    }
                    self.sync();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_store() -> UiStore {
        let store = UiStore::new();
        store.set_fonts_loaded(true);
        store.set_parallax_loaded(true);
        store
    }

    #[test]
    fn test_stays_visible_until_ready() {
        let store = UiStore::new();
        let mut loader = PageLoader::mount(&store, "/es");
        for _ in 0..10 {
            loader.on_animation_frame();
        }
        loader.advance(Duration::from_secs(5));
        assert_eq!(loader.phase(), LoaderPhase::Visible);
        assert!(loader.style().unwrap().aria_busy);
    }

    #[test]
    fn test_home_page_waits_for_parallax() {
        let store = UiStore::new();
        let _loader = PageLoader::mount(&store, "/eus");
        assert!(!store.snapshot().parallax_loaded);
    }

    #[test]
    fn test_other_pages_skip_parallax() {
        let store = UiStore::new();
        let mut loader = PageLoader::mount(&store, "/eus/media");
        assert!(store.snapshot().parallax_loaded);
        assert!(!loader.ready());

        store.set_fonts_loaded(true);
        loader.sync();
        assert!(loader.ready());
    }

    #[test]
    fn test_exits_on_second_frame() {
        let store = ready_store();
        let mut loader = PageLoader::mount(&store, "/es");
        assert!(loader.ready());

        loader.on_animation_frame();
        assert_eq!(loader.phase(), LoaderPhase::Visible);
        loader.on_animation_frame();
        assert_eq!(loader.phase(), LoaderPhase::Exiting);

        let style = loader.style().unwrap();
        assert_eq!(style.opacity, 0.0);
        assert!(!style.pointer_events);
        assert!(!style.aria_busy);
    }

    #[test]
    fn test_gone_after_unmount_delay() {
        let store = ready_store();
        let mut loader = PageLoader::mount(&store, "/es");
        loader.on_animation_frame();
        loader.on_animation_frame();

        loader.advance(UNMOUNT_DELAY - Duration::from_millis(1));
        assert_eq!(loader.phase(), LoaderPhase::Exiting);
        loader.advance(Duration::from_millis(1));
        assert_eq!(loader.phase(), LoaderPhase::Gone);
        assert!(loader.style().is_none());
    }

    #[test]
    fn test_unmount_delay_covers_fade() {
        assert_eq!(UNMOUNT_DELAY, FADE_DURATION + Duration::from_millis(150));
    }

    #[test]
    fn test_reset_before_exit_cancels() {
        let store = ready_store();
        let mut loader = PageLoader::mount(&store, "/es");
        loader.on_animation_frame();

        store.reset_loading_state();
        loader.on_animation_frame();
        loader.advance(UNMOUNT_DELAY * 2);
        assert_eq!(loader.phase(), LoaderPhase::Visible);
    }

    #[test]
    fn test_no_reverse_transitions() {
        let store = ready_store();
        let mut loader = PageLoader::mount(&store, "/es");
        loader.on_animation_frame();
        loader.on_animation_frame();
        assert_eq!(loader.phase(), LoaderPhase::Exiting);

        store.reset_loading_state();
        loader.sync();
        assert_eq!(loader.phase(), LoaderPhase::Exiting);

        store.set_fonts_loaded(true);
        store.set_parallax_loaded(true);
        loader.advance(UNMOUNT_DELAY);
        assert_eq!(loader.phase(), LoaderPhase::Gone);

        // Readiness flapping after removal changes nothing.
        store.reset_loading_state();
        store.set_fonts_loaded(true);
        store.set_parallax_loaded(true);
        loader.on_animation_frame();
        loader.on_animation_frame();
        assert_eq!(loader.phase(), LoaderPhase::Gone);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_removes_overlay() {
        let store = UiStore::new();
        let loader = PageLoader::mount(&store, "/es/rsvp");
        let handle = tokio::spawn(loader.run());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!handle.is_finished());

        store.set_fonts_loaded(true);
        tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .expect("loader should finish")
            .unwrap();
    }
}
