//! Light palette and widget styling for the page.
//!
//! Near-white page background, white surfaces, a gray text ramp, and an
//! indigo accent.

use eframe::egui::{Color32, Stroke, Visuals};

/// Named colors used across the page.
#[derive(Clone, Copy)]
pub struct Palette {
    /// Page background behind the sections.
    pub page_fill: Color32,
    /// White surfaces: header, cards, overlay panel, alternating sections.
    pub surface: Color32,
    /// Fill of the contact rows.
    pub row_fill: Color32,
    /// Card and panel outlines.
    pub outline: Color32,
    /// Headings and the brand.
    pub text_strong: Color32,
    /// Body copy.
    pub text_body: Color32,
    /// Lead lines, captions, the footer.
    pub text_muted: Color32,
    /// Indigo accent: role line, links, call-to-action.
    pub accent: Color32,
    /// Pressed/hovered accent.
    pub accent_strong: Color32,
    /// Soft accent used behind skill badges.
    pub accent_soft: Color32,
}

/// The page palette.
pub fn palette() -> Palette {
    Palette {
        page_fill: Color32::from_rgb(249, 250, 251),
        surface: Color32::WHITE,
        row_fill: Color32::from_rgb(243, 244, 246),
        outline: Color32::from_rgb(229, 231, 235),
        text_strong: Color32::from_rgb(17, 24, 39),
        text_body: Color32::from_rgb(55, 65, 81),
        text_muted: Color32::from_rgb(107, 114, 128),
        accent: Color32::from_rgb(79, 70, 229),
        accent_strong: Color32::from_rgb(67, 56, 202),
        accent_soft: Color32::from_rgb(238, 242, 255),
    }
}

/// Apply the palette to egui's light visuals.
pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.surface;
    visuals.panel_fill = palette.page_fill;
    visuals.hyperlink_color = palette.accent;
    visuals.extreme_bg_color = palette.surface;
    visuals.faint_bg_color = palette.row_fill;
    visuals.selection.bg_fill = palette.accent_soft;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.widgets.noninteractive.bg_fill = palette.surface;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_body);
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, palette.outline);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, palette.text_body);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, palette.text_strong);
    visuals.widgets.active.fg_stroke = Stroke::new(1.5, palette.text_strong);
}
