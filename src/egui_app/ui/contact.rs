use eframe::egui::{self, CursorIcon, Margin, Rect, RichText, Sense, Ui};

use super::layout::{CONTACT_COLUMN_WIDTH, SECTION_PADDING};
use super::style;
use crate::egui_app::controller::PortfolioController;
use crate::profile::ContactEntry;

/// Contact section: heading, lead line, then one row per contact channel.
/// Rows with a target open it; targetless rows are plain.
pub(super) fn render(ui: &mut Ui, controller: &mut PortfolioController) -> Rect {
    let palette = style::palette();
    let profile = controller.profile().clone();
    let mut activated: Option<String> = None;

    let scope = ui.scope(|ui| {
        egui::Frame::new()
            .inner_margin(Margin::symmetric(16, SECTION_PADDING as i8))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(&profile.contact_heading)
                            .size(32.0)
                            .strong()
                            .color(palette.text_strong),
                    );
                    ui.add_space(12.0);
                    ui.scope(|ui| {
                        ui.set_max_width(672.0);
                        ui.label(
                            RichText::new(&profile.contact_lead)
                                .size(18.0)
                                .color(palette.text_muted),
                        );
                    });
                    ui.add_space(36.0);
                    ui.scope(|ui| {
                        ui.set_max_width(CONTACT_COLUMN_WIDTH);
                        for entry in &profile.contacts {
                            if contact_row(ui, entry) {
                                activated = entry.target.clone();
                            }
                            ui.add_space(16.0);
                        }
                    });
                });
            });
    });

    if let Some(target) = activated {
        controller.open_external(&target);
    }
    scope.response.rect
}

/// Render one contact row; returns true when an interactive row was clicked.
fn contact_row(ui: &mut Ui, entry: &ContactEntry) -> bool {
    let palette = style::palette();
    let frame = egui::Frame::new()
        .fill(palette.row_fill)
        .corner_radius(8.0)
        .inner_margin(Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(&entry.icon).size(24.0).color(palette.accent));
                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(&entry.label)
                            .size(13.0)
                            .color(palette.text_muted),
                    );
                    ui.label(
                        RichText::new(&entry.value)
                            .size(16.0)
                            .strong()
                            .color(palette.text_strong),
                    );
                });
            });
        });

    if entry.target.is_none() {
        return false;
    }
    let response = ui
        .interact(
            frame.response.rect,
            ui.id().with(&entry.label),
            Sense::click(),
        )
        .on_hover_cursor(CursorIcon::PointingHand);
    response.clicked()
}
