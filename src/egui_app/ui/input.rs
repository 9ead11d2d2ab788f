use eframe::egui;

/// Keys observed once per frame.
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct InputSnapshot {
    pub escape: bool,
}

impl InputSnapshot {
    pub(super) fn capture(ctx: &egui::Context) -> Self {
        ctx.input(|i| Self {
            escape: i.key_pressed(egui::Key::Escape),
        })
    }
}
