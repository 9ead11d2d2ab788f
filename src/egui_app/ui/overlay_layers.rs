use eframe::egui::{self, Color32, Id, LayerId, Order};

/// Stacking tiers for the navigation overlay.
///
/// The panel sits strictly above the backdrop, so egui's hit testing gives
/// in-panel clicks to the panel and they can never reach the backdrop's
/// close handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum OverlayLayer {
    /// Dimming layer behind the panel.
    Backdrop,
    /// The slide-in panel itself.
    Panel,
}

impl OverlayLayer {
    /// Return the egui order used for the tier.
    pub(super) fn order(self) -> Order {
        match self {
            Self::Backdrop => Order::Foreground,
            Self::Panel => Order::Tooltip,
        }
    }

    /// Create a layer id in this tier for custom painters.
    pub(super) fn layer_id(self, id: impl Into<Id>) -> LayerId {
        LayerId::new(self.order(), id.into())
    }
}

/// Paint the dimming backdrop over the whole viewport.
///
/// While `interactive` the backdrop also claims pointer input (blocking the
/// page beneath) and the return value reports a click on it. While fading
/// out it is paint-only, so the page stays interactive.
pub(super) fn dimming_backdrop(
    ctx: &egui::Context,
    id: impl Into<Id>,
    alpha: u8,
    interactive: bool,
) -> bool {
    let id = id.into();
    let rect = ctx.viewport_rect();
    let painter = ctx.layer_painter(OverlayLayer::Backdrop.layer_id(id.with("backdrop_paint")));
    painter.rect_filled(rect, 0.0, Color32::from_black_alpha(alpha));
    if !interactive {
        return false;
    }
    let mut clicked = false;
    egui::Area::new(id.with("backdrop_blocker"))
        .order(OverlayLayer::Backdrop.order())
        .fixed_pos(rect.min)
        .show(ctx, |ui| {
            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
            clicked = response.clicked();
        });
    clicked
}
