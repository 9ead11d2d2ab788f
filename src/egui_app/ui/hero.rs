use eframe::egui::{self, Margin, Rect, RichText, Ui};

use super::layout::{CONTENT_MAX_WIDTH, HEADER_HEIGHT};
use super::style;
use crate::egui_app::controller::PortfolioController;
use crate::profile::Section;

/// Hero section: name, role, tagline, call-to-action. Fills the first
/// window-height of the page.
pub(super) fn render(ui: &mut Ui, controller: &mut PortfolioController) -> Rect {
    let palette = style::palette();
    let profile = controller.profile().clone();
    let fill_height = (ui.ctx().viewport_rect().height() - HEADER_HEIGHT).max(360.0);
    let mut contact_requested = false;

    let scope = ui.scope(|ui| {
        ui.set_min_height(fill_height);
        egui::Frame::new()
            .inner_margin(Margin::symmetric(16, 0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.add_space(fill_height * 0.28);
                ui.vertical_centered(|ui| {
                    ui.set_max_width(CONTENT_MAX_WIDTH);
                    ui.label(
                        RichText::new(&profile.owner_name)
                            .size(56.0)
                            .strong()
                            .color(palette.text_strong),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(&profile.role)
                            .size(44.0)
                            .strong()
                            .color(palette.accent),
                    );
                    ui.add_space(24.0);
                    ui.scope(|ui| {
                        ui.set_max_width(576.0);
                        ui.label(
                            RichText::new(&profile.tagline)
                                .size(18.0)
                                .color(palette.text_muted),
                        );
                    });
                    ui.add_space(32.0);
                    let cta = ui.add(
                        egui::Button::new(
                            RichText::new(&profile.cta_label)
                                .size(17.0)
                                .strong()
                                .color(palette.surface),
                        )
                        .fill(palette.accent)
                        .corner_radius(8.0)
                        .min_size(egui::vec2(200.0, 48.0)),
                    );
                    if cta.clicked() {
                        contact_requested = true;
                    }
                });
            });
    });

    if contact_requested {
        controller.navigate_to(Section::Contact);
    }
    scope.response.rect
}
