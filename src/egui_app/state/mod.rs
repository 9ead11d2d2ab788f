//! Shared state types for the egui UI.

mod nav;
mod scroll;

pub use nav::*;
pub use scroll::*;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Slide-in navigation overlay state.
    pub nav: NavMenuState,
    /// Pending scroll-to-section request.
    pub scroll: ScrollState,
}
