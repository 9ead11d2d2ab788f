//! Behavior of the navigation overlay through the public controller API.

use folio::config::AppConfig;
use folio::egui_app::controller::PortfolioController;
use folio::egui_app::state::{MenuTrigger, NavMenuState};
use folio::profile::{Profile, Section};

fn controller() -> PortfolioController {
    PortfolioController::new(Profile::default(), &AppConfig::default())
}

#[test]
fn starts_closed_and_hamburger_opens() {
    let mut controller = controller();
    assert!(!controller.ui.nav.is_open());
    controller.handle_menu_trigger(MenuTrigger::Hamburger);
    assert!(controller.ui.nav.is_open());
}

#[test]
fn backdrop_click_closes() {
    let mut controller = controller();
    controller.handle_menu_trigger(MenuTrigger::Hamburger);
    controller.handle_menu_trigger(MenuTrigger::Backdrop);
    assert!(!controller.ui.nav.is_open());
}

#[test]
fn overlay_link_closes_and_navigates() {
    let mut controller = controller();
    controller.handle_menu_trigger(MenuTrigger::Hamburger);
    controller.activate_overlay_link(Section::About);
    assert!(!controller.ui.nav.is_open());
    assert_eq!(controller.ui.scroll.take(), Some(Section::About));
}

#[test]
fn clicks_without_a_trigger_leave_the_menu_open() {
    // A click on a non-interactive area inside the panel produces no
    // trigger at all; only close-class triggers may close the menu.
    let mut controller = controller();
    controller.handle_menu_trigger(MenuTrigger::Hamburger);
    assert!(controller.ui.nav.is_open());
    assert!(MenuTrigger::CloseButton.closes());
    assert!(MenuTrigger::Backdrop.closes());
    assert!(MenuTrigger::NavLink.closes());
    assert!(!MenuTrigger::Hamburger.closes());
}

#[test]
fn repeated_triggers_are_idempotent() {
    let mut once = NavMenuState::default();
    once.open();
    let mut twice = NavMenuState::default();
    twice.open();
    twice.open();
    assert_eq!(once, twice);

    once.close();
    twice.close();
    twice.close();
    assert_eq!(once, twice);
}

#[test]
fn final_state_folds_over_any_trigger_sequence() {
    let sequences: &[&[MenuTrigger]] = &[
        &[MenuTrigger::Hamburger],
        &[MenuTrigger::Hamburger, MenuTrigger::Backdrop],
        &[
            MenuTrigger::Hamburger,
            MenuTrigger::Hamburger,
            MenuTrigger::NavLink,
        ],
        &[
            MenuTrigger::Backdrop,
            MenuTrigger::Hamburger,
            MenuTrigger::CloseButton,
            MenuTrigger::Hamburger,
        ],
        &[MenuTrigger::CloseButton],
    ];
    for sequence in sequences {
        let mut menu = NavMenuState::default();
        for trigger in *sequence {
            menu.apply(*trigger);
        }
        let expected = sequence
            .iter()
            .fold(false, |_open, trigger| !trigger.closes());
        assert_eq!(menu.is_open(), expected, "sequence {sequence:?}");
    }
}

#[test]
fn header_navigation_does_not_touch_the_menu() {
    let mut controller = controller();
    controller.navigate_to(Section::Contact);
    assert!(!controller.ui.nav.is_open());
    assert_eq!(controller.ui.scroll.take(), Some(Section::Contact));
}

#[test]
fn widening_the_window_dismisses_an_open_menu() {
    let mut controller = controller();
    controller.set_layout_narrow(true);
    controller.handle_menu_trigger(MenuTrigger::Hamburger);
    controller.set_layout_narrow(false);
    assert!(!controller.ui.nav.is_open());
    // Narrowing again must not resurrect it.
    controller.set_layout_narrow(true);
    assert!(!controller.ui.nav.is_open());
}
