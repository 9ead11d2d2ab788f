//! The slide-in navigation overlay: dimming backdrop plus a panel that
//! slides in from the right edge.
//!
//! Panel translation and backdrop opacity are derived from the single menu
//! flag through one animation clock, so both always agree. The backdrop only
//! claims pointer input while the menu is open; during the closing fade the
//! page beneath is already interactive again.

use super::layout::PANEL_WIDTH;
use super::overlay_layers::{self, OverlayLayer};
use super::style;
use crate::egui_app::controller::PortfolioController;
use crate::egui_app::state::MenuTrigger;
use eframe::egui::{
    self, Align, Id, Layout, Margin, Rect, RichText, Sense, Stroke, UiBuilder, pos2,
};

/// Slide/fade duration in seconds.
pub(super) const SLIDE_DURATION_SECS: f32 = 0.3;

/// Backdrop opacity while fully open (60% black).
const BACKDROP_MAX_ALPHA: u8 = 153;

/// Render the overlay for the current frame.
pub(super) fn render_nav_overlay(ctx: &egui::Context, controller: &mut PortfolioController) {
    let open = controller.ui.nav.is_open();
    let reveal = if controller.reduce_motion() {
        if open { 1.0 } else { 0.0 }
    } else {
        ctx.animate_bool_with_time(Id::new("nav_overlay_reveal"), open, SLIDE_DURATION_SECS)
    };
    if reveal <= 0.0 {
        return;
    }

    if overlay_layers::dimming_backdrop(
        ctx,
        Id::new("nav_overlay"),
        backdrop_alpha(reveal),
        open,
    ) {
        controller.handle_menu_trigger(MenuTrigger::Backdrop);
    }

    let rect = panel_rect(ctx.viewport_rect(), reveal);
    egui::Area::new(Id::new("nav_overlay_panel"))
        .order(OverlayLayer::Panel.order())
        .fixed_pos(rect.min)
        .constrain(false)
        .show(ctx, |ui| {
            let palette = style::palette();
            // Claim the whole panel so clicks inside it never fall through
            // to the backdrop.
            let _ = ui.allocate_rect(rect, Sense::click_and_drag());
            ui.painter().rect_filled(rect, 0.0, palette.surface);
            ui.painter().vline(
                rect.left(),
                rect.y_range(),
                Stroke::new(1.0, palette.outline),
            );
            ui.scope_builder(UiBuilder::new().max_rect(rect), |ui| {
                render_panel_contents(ui, controller);
            });
        });
}

fn render_panel_contents(ui: &mut egui::Ui, controller: &mut PortfolioController) {
    let palette = style::palette();
    let nav_links = controller.profile().nav_links.clone();

    egui::Frame::new()
        .inner_margin(Margin::symmetric(16, 12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Menu")
                        .size(18.0)
                        .strong()
                        .color(palette.text_strong),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let close = ui
                        .add(
                            egui::Label::new(
                                RichText::new("✖").size(16.0).color(palette.text_body),
                            )
                            .sense(egui::Sense::click()),
                        )
                        .on_hover_cursor(egui::CursorIcon::PointingHand);
                    if close.clicked() {
                        controller.handle_menu_trigger(MenuTrigger::CloseButton);
                    }
                });
            });
        });
    ui.separator();

    egui::Frame::new()
        .inner_margin(Margin::symmetric(16, 12))
        .show(ui, |ui| {
            ui.vertical(|ui| {
                for link in &nav_links {
                    let response =
                        ui.link(RichText::new(&link.label).size(18.0).color(palette.text_body));
                    if response.clicked() {
                        controller.activate_overlay_link(link.section);
                    }
                    ui.add_space(8.0);
                }
            });
        });
}

/// Panel rect for the current reveal fraction: off-screen at 0, flush with
/// the right edge at 1.
fn panel_rect(viewport: Rect, reveal: f32) -> Rect {
    let left = viewport.right() - PANEL_WIDTH * reveal;
    Rect::from_min_max(
        pos2(left, viewport.top()),
        pos2(left + PANEL_WIDTH, viewport.bottom()),
    )
}

fn backdrop_alpha(reveal: f32) -> u8 {
    (f32::from(BACKDROP_MAX_ALPHA) * reveal.clamp(0.0, 1.0)).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_is_off_screen_when_hidden() {
        let viewport = Rect::from_min_max(pos2(0.0, 0.0), pos2(800.0, 600.0));
        let rect = panel_rect(viewport, 0.0);
        assert_eq!(rect.left(), viewport.right());
        assert_eq!(rect.width(), PANEL_WIDTH);
    }

    #[test]
    fn panel_is_flush_with_the_edge_when_open() {
        let viewport = Rect::from_min_max(pos2(0.0, 0.0), pos2(800.0, 600.0));
        let rect = panel_rect(viewport, 1.0);
        assert_eq!(rect.right(), viewport.right());
        assert_eq!(rect.left(), viewport.right() - PANEL_WIDTH);
        assert_eq!(rect.top(), viewport.top());
        assert_eq!(rect.bottom(), viewport.bottom());
    }

    #[test]
    fn backdrop_alpha_matches_the_animation_endpoints() {
        assert_eq!(backdrop_alpha(0.0), 0);
        assert_eq!(backdrop_alpha(1.0), 153);
        assert!(backdrop_alpha(0.5) > 0);
        assert_eq!(backdrop_alpha(2.0), 153);
    }
}
