use eframe::egui::{self, Margin, Rect, RichText, Stroke, Ui};

use super::layout::{CONTENT_MAX_WIDTH, SECTION_PADDING, skills_columns};
use super::style;
use crate::egui_app::controller::PortfolioController;
use crate::profile::SkillEntry;

const CARD_GAP: f32 = 16.0;
const BADGE_SIZE: f32 = 48.0;

/// About section: biography paragraphs followed by the skills grid. Rendered
/// on a white surface to set it off from the page background.
pub(super) fn render(ui: &mut Ui, controller: &mut PortfolioController) -> Rect {
    let palette = style::palette();
    let profile = controller.profile().clone();

    let scope = ui.scope(|ui| {
        egui::Frame::new()
            .fill(palette.surface)
            .inner_margin(Margin::symmetric(16, SECTION_PADDING as i8))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.set_max_width(CONTENT_MAX_WIDTH);
                    ui.label(
                        RichText::new(&profile.about_heading)
                            .size(32.0)
                            .strong()
                            .color(palette.text_strong),
                    );
                    ui.add_space(12.0);
                    ui.label(
                        RichText::new(&profile.about_lead)
                            .size(18.0)
                            .color(palette.text_muted),
                    );
                    ui.add_space(32.0);
                    ui.scope(|ui| {
                        ui.set_max_width(768.0);
                        for paragraph in &profile.about_paragraphs {
                            ui.label(
                                RichText::new(paragraph).size(16.0).color(palette.text_body),
                            );
                            ui.add_space(16.0);
                        }
                    });
                    ui.add_space(40.0);
                    ui.label(
                        RichText::new(&profile.skills_heading)
                            .size(26.0)
                            .strong()
                            .color(palette.text_strong),
                    );
                    ui.add_space(28.0);
                    render_skills_grid(ui, &profile.skills);
                });
            });
    });
    scope.response.rect
}

fn render_skills_grid(ui: &mut Ui, skills: &[SkillEntry]) {
    let columns = skills_columns(ui.available_width());
    let card_width =
        ((ui.available_width() - CARD_GAP * (columns as f32 - 1.0)) / columns as f32).max(96.0);
    for row in skills.chunks(columns) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = CARD_GAP;
            for entry in row {
                skill_card(ui, entry, card_width);
            }
        });
        ui.add_space(CARD_GAP);
    }
}

fn skill_card(ui: &mut Ui, entry: &SkillEntry, width: f32) {
    let palette = style::palette();
    egui::Frame::new()
        .fill(palette.surface)
        .stroke(Stroke::new(1.0, palette.outline))
        .corner_radius(8.0)
        .inner_margin(Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(width - 32.0);
            ui.vertical_centered(|ui| {
                badge(ui, &entry.badge());
                ui.add_space(10.0);
                ui.label(
                    RichText::new(&entry.name)
                        .size(16.0)
                        .strong()
                        .color(palette.text_strong),
                );
            });
        });
}

/// Rounded square with the technology's first letter.
fn badge(ui: &mut Ui, glyph: &str) {
    let palette = style::palette();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(BADGE_SIZE, BADGE_SIZE), egui::Sense::hover());
    ui.painter().rect_filled(rect, 10.0, palette.accent_soft);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        glyph,
        egui::FontId::proportional(22.0),
        palette.accent,
    );
}
