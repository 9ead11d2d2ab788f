use eframe::egui::{self, Align, Layout, Margin, RichText, Ui};
use time::OffsetDateTime;

use super::style;
use crate::egui_app::controller::PortfolioController;

/// Footer: copyright line and attribution link on a white surface.
pub(super) fn render(ui: &mut Ui, controller: &mut PortfolioController) {
    let palette = style::palette();
    let profile = controller.profile().clone();
    let mut attribution_clicked = false;

    ui.separator();
    egui::Frame::new()
        .fill(palette.surface)
        .inner_margin(Margin::symmetric(16, 20))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!(
                        "© {} {}. Všechna práva vyhrazena.",
                        current_year(),
                        profile.owner_name
                    ))
                    .size(13.0)
                    .color(palette.text_muted),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let link = ui.link(
                        RichText::new(&profile.attribution.label)
                            .size(13.0)
                            .color(palette.accent),
                    );
                    if link.clicked() {
                        attribution_clicked = true;
                    }
                    ui.label(
                        RichText::new("Vytvořeno s láskou od")
                            .size(13.0)
                            .color(palette.text_muted),
                    );
                });
            });
        });

    if attribution_clicked {
        controller.open_external(&profile.attribution.url);
    }
}

fn current_year() -> i32 {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .year()
}
