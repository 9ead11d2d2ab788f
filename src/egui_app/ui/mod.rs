//! egui renderer for the portfolio page.

mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod input;
mod layout;
mod nav_overlay;
mod overlay_layers;
mod style;

use eframe::egui;

use crate::config::AppConfig;
use crate::egui_app::controller::PortfolioController;
use crate::egui_app::state::MenuTrigger;
use crate::profile::{Profile, Section};
use input::InputSnapshot;

/// Smallest viewport the page lays out sensibly in.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::Vec2::new(360.0, 480.0);

/// Default window size on first launch.
pub const INITIAL_VIEWPORT_SIZE: egui::Vec2 = egui::Vec2::new(1100.0, 800.0);

/// Renders the portfolio page using the shared controller state.
pub struct PortfolioApp {
    controller: PortfolioController,
    style_applied: bool,
}

impl PortfolioApp {
    /// Create the app for the given content and settings.
    pub fn new(profile: Profile, config: &AppConfig) -> Self {
        Self {
            controller: PortfolioController::new(profile, config),
            style_applied: false,
        }
    }

    fn apply_style(&mut self, ctx: &egui::Context) {
        if self.style_applied {
            return;
        }
        let mut visuals = egui::Visuals::light();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        if self.controller.reduce_motion() {
            ctx.style_mut(|style| {
                style.animation_time = 0.0;
                style.scroll_animation = egui::style::ScrollAnimation::none();
            });
        }
        self.style_applied = true;
    }

    fn render_page(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        let pending = self.controller.ui.scroll.take();
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(palette.page_fill))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("page_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        let hero_rect = hero::render(ui, &mut self.controller);
                        let about_rect = about::render(ui, &mut self.controller);
                        let contact_rect = contact::render(ui, &mut self.controller);
                        footer::render(ui, &mut self.controller);
                        if let Some(section) = pending {
                            let target = match section {
                                Section::Home => hero_rect,
                                Section::About => about_rect,
                                Section::Contact => contact_rect,
                            };
                            ui.scroll_to_rect(target, Some(egui::Align::TOP));
                        }
                    });
            });
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_style(ctx);
        let input = InputSnapshot::capture(ctx);
        let narrow = layout::is_narrow(ctx.viewport_rect().width());
        self.controller.set_layout_narrow(narrow);
        if input.escape && self.controller.ui.nav.is_open() {
            self.controller.handle_menu_trigger(MenuTrigger::CloseButton);
        }

        self.render_header(ctx, narrow);
        self.render_page(ctx);
        nav_overlay::render_nav_overlay(ctx, &mut self.controller);
    }
}
