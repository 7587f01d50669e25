//! # boda-ui
//!
//! Client-side UI state for the boda site: the navigation toggle store and
//! the loading overlay that hides the page until fonts and decorative layers
//! are ready.

pub mod loader;
pub mod store;

pub use loader::{LoaderPhase, OverlayStyle, PageLoader};
pub use store::{UiState, UiStore};
