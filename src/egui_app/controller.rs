//! Bridges UI state to the renderer and the outside world.
//!
//! The controller owns the [`UiState`] and the profile, applies menu
//! transitions, queues scroll requests, and opens external links. It knows
//! nothing about egui; the renderer calls into it in response to widget
//! events.

use crate::config::AppConfig;
use crate::egui_app::state::{MenuTrigger, UiState};
use crate::profile::{Profile, Section};

/// Maintains app state and handles user-driven events for the egui UI.
pub struct PortfolioController {
    /// UI model consumed by the renderer.
    pub ui: UiState,
    profile: Profile,
    reduce_motion: bool,
    narrow_layout: bool,
}

impl PortfolioController {
    /// Create a controller for the given content and settings.
    pub fn new(profile: Profile, config: &AppConfig) -> Self {
        Self {
            ui: UiState::default(),
            profile,
            reduce_motion: config.reduce_motion,
            narrow_layout: false,
        }
    }

    /// The content the page renders.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Whether animations are disabled by configuration.
    pub fn reduce_motion(&self) -> bool {
        self.reduce_motion
    }

    /// Whether the last observed layout was narrow (hamburger mode).
    pub fn is_narrow_layout(&self) -> bool {
        self.narrow_layout
    }

    /// Record the layout class for the current frame.
    ///
    /// The overlay only exists in the narrow layout; widening while it is
    /// open closes it so the visible state stays a pure function of the
    /// flag.
    pub fn set_layout_narrow(&mut self, narrow: bool) {
        if self.narrow_layout && !narrow && self.ui.nav.is_open() {
            tracing::debug!("closing navigation overlay after layout widened");
            self.ui.nav.close();
        }
        self.narrow_layout = narrow;
    }

    /// Fold a menu trigger into the overlay state.
    pub fn handle_menu_trigger(&mut self, trigger: MenuTrigger) {
        tracing::debug!(?trigger, "menu trigger");
        self.ui.nav.apply(trigger);
    }

    /// Queue a scroll to the given section (header links, hero CTA).
    pub fn navigate_to(&mut self, section: Section) {
        self.ui.scroll.request(section);
    }

    /// A navigation link inside the overlay panel: close, then scroll.
    pub fn activate_overlay_link(&mut self, section: Section) {
        self.handle_menu_trigger(MenuTrigger::NavLink);
        self.navigate_to(section);
    }

    /// Open an external target (`mailto:`, `tel:`, `https:`) with the OS
    /// handler. Failures are logged, never fatal.
    pub fn open_external(&self, target: &str) {
        if let Err(err) = open::that(target) {
            tracing::warn!("Failed to open {target}: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> PortfolioController {
        PortfolioController::new(Profile::default(), &AppConfig::default())
    }

    #[test]
    fn hamburger_opens_and_backdrop_closes() {
        let mut controller = controller();
        controller.handle_menu_trigger(MenuTrigger::Hamburger);
        assert!(controller.ui.nav.is_open());
        controller.handle_menu_trigger(MenuTrigger::Backdrop);
        assert!(!controller.ui.nav.is_open());
    }

    #[test]
    fn overlay_link_closes_and_requests_scroll() {
        let mut controller = controller();
        controller.handle_menu_trigger(MenuTrigger::Hamburger);
        controller.activate_overlay_link(Section::Contact);
        assert!(!controller.ui.nav.is_open());
        assert_eq!(controller.ui.scroll.take(), Some(Section::Contact));
    }

    #[test]
    fn widening_the_layout_closes_an_open_menu() {
        let mut controller = controller();
        controller.set_layout_narrow(true);
        controller.handle_menu_trigger(MenuTrigger::Hamburger);
        controller.set_layout_narrow(false);
        assert!(!controller.ui.nav.is_open());
    }

    #[test]
    fn narrowing_alone_never_opens_the_menu() {
        let mut controller = controller();
        controller.set_layout_narrow(false);
        controller.set_layout_narrow(true);
        assert!(!controller.ui.nav.is_open());
    }
}
