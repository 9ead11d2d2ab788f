use eframe::egui::{self, Align, Frame, Layout, Margin, RichText};

use super::PortfolioApp;
use super::layout;
use super::style;
use crate::egui_app::state::MenuTrigger;
use crate::profile::Section;

impl PortfolioApp {
    /// Fixed header bar: brand on the left, inline links or the hamburger
    /// trigger on the right depending on the layout class.
    pub(super) fn render_header(&mut self, ctx: &egui::Context, narrow: bool) {
        let palette = style::palette();
        let brand = self.controller.profile().owner_name.clone();
        let nav_links = self.controller.profile().nav_links.clone();

        egui::TopBottomPanel::top("header")
            .exact_height(layout::HEADER_HEIGHT)
            .frame(
                Frame::new()
                    .fill(palette.surface)
                    .inner_margin(Margin::symmetric(16, 0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    let brand_label = ui
                        .add(
                            egui::Label::new(
                                RichText::new(brand)
                                    .size(22.0)
                                    .strong()
                                    .color(palette.text_strong),
                            )
                            .sense(egui::Sense::click()),
                        )
                        .on_hover_cursor(egui::CursorIcon::PointingHand);
                    if brand_label.clicked() {
                        self.controller.navigate_to(Section::Home);
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if narrow {
                            let hamburger = ui
                                .add(
                                    egui::Label::new(
                                        RichText::new("☰").size(20.0).color(palette.text_strong),
                                    )
                                    .sense(egui::Sense::click()),
                                )
                                .on_hover_cursor(egui::CursorIcon::PointingHand);
                            if hamburger.clicked() {
                                self.controller.handle_menu_trigger(MenuTrigger::Hamburger);
                            }
                        } else {
                            // right_to_left lays the links out in reverse.
                            for link in nav_links.iter().rev() {
                                let response = ui.link(
                                    RichText::new(&link.label).size(16.0).color(palette.text_body),
                                );
                                if response.clicked() {
                                    self.controller.navigate_to(link.section);
                                }
                                ui.add_space(24.0);
                            }
                        }
                    });
                });
            });
    }
}
