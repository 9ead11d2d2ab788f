#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based folio UI.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use folio::config::{self, AppConfig};
use folio::egui_app::ui::{INITIAL_VIEWPORT_SIZE, MIN_VIEWPORT_SIZE, PortfolioApp};
use folio::icon;
use folio::logging;
use folio::profile::Profile;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let (config, profile, startup_error) = load_startup_state();
    let title = profile.window_title.clone();

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(INITIAL_VIEWPORT_SIZE)
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_icon(icon::window_icon(&profile.initials()));
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        native_options,
        Box::new(move |_cc| match startup_error {
            None => Ok(Box::new(PortfolioApp::new(profile, &config))),
            Some(message) => Ok(Box::new(LaunchError { message })),
        }),
    )?;
    Ok(())
}

/// Load config and profile, falling back to defaults so the window can still
/// come up and display what went wrong.
fn load_startup_state() -> (AppConfig, Profile, Option<String>) {
    let config = match config::load_or_default() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Failed to load config: {err}");
            return (
                AppConfig::default(),
                Profile::default(),
                Some(format!("Failed to load config: {err}")),
            );
        }
    };
    match config::load_profile(&config) {
        Ok(profile) => (config, profile, None),
        Err(err) => {
            tracing::error!("Failed to load profile: {err}");
            (
                config,
                Profile::default(),
                Some(format!("Failed to load profile: {err}")),
            )
        }
    }
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
