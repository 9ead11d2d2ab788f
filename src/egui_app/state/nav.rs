//! State machine for the slide-in navigation overlay.
//!
//! The whole overlay is driven by one boolean. Panel translation and backdrop
//! opacity are derived from it at render time, so no inconsistent visual
//! state is representable.

/// User gestures that drive a menu transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuTrigger {
    /// Hamburger button in the header.
    Hamburger,
    /// Close button inside the panel.
    CloseButton,
    /// Click on the backdrop outside the panel.
    Backdrop,
    /// Navigation link inside the panel.
    NavLink,
}

impl MenuTrigger {
    /// Whether the trigger belongs to the close class.
    ///
    /// Everything except the hamburger closes the menu; a click inside the
    /// panel that is not one of these triggers does not transition at all.
    pub fn closes(self) -> bool {
        !matches!(self, Self::Hamburger)
    }
}

/// Visibility state of the navigation overlay.
///
/// The flag is private so every mutation goes through the transition
/// methods; both are total and idempotent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenuState {
    open: bool,
}

impl NavMenuState {
    /// Whether the overlay is currently open.
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Open the overlay. Repeated calls are no-ops.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the overlay. Repeated calls are no-ops.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Fold one trigger into the state.
    pub fn apply(&mut self, trigger: MenuTrigger) {
        if trigger.closes() {
            self.close();
        } else {
            self.open();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!NavMenuState::default().is_open());
    }

    #[test]
    fn open_and_close_are_idempotent() {
        let mut menu = NavMenuState::default();
        menu.open();
        let once = menu;
        menu.open();
        assert_eq!(menu, once);

        menu.close();
        let once = menu;
        menu.close();
        assert_eq!(menu, once);
    }

    #[test]
    fn every_close_class_trigger_closes() {
        for trigger in [
            MenuTrigger::CloseButton,
            MenuTrigger::Backdrop,
            MenuTrigger::NavLink,
        ] {
            let mut menu = NavMenuState::default();
            menu.open();
            menu.apply(trigger);
            assert!(!menu.is_open(), "{trigger:?} should close the menu");
        }
    }

    #[test]
    fn final_state_is_the_fold_over_triggers() {
        let sequence = [
            MenuTrigger::Hamburger,
            MenuTrigger::NavLink,
            MenuTrigger::Hamburger,
            MenuTrigger::Hamburger,
            MenuTrigger::Backdrop,
            MenuTrigger::CloseButton,
            MenuTrigger::Hamburger,
        ];
        let mut menu = NavMenuState::default();
        for trigger in sequence {
            menu.apply(trigger);
        }
        let expected = sequence
            .iter()
            .fold(false, |_open, trigger| !trigger.closes());
        assert_eq!(menu.is_open(), expected);
        assert!(menu.is_open());
    }
}
