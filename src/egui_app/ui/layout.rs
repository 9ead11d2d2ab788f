//! Layout constants and responsive breakpoints.

/// Height of the fixed header bar.
pub(super) const HEADER_HEIGHT: f32 = 64.0;

/// Below this window width the header collapses into the hamburger trigger.
pub(super) const NARROW_BREAKPOINT: f32 = 768.0;

/// Width of the slide-in navigation panel.
pub(super) const PANEL_WIDTH: f32 = 256.0;

/// Maximum width of a section's content column.
pub(super) const CONTENT_MAX_WIDTH: f32 = 896.0;

/// Maximum width of the centered contact-row column.
pub(super) const CONTACT_COLUMN_WIDTH: f32 = 448.0;

/// Vertical padding above and below a section's content.
pub(super) const SECTION_PADDING: f32 = 80.0;

/// Whether the given window width uses the narrow (hamburger) layout.
pub(super) fn is_narrow(width: f32) -> bool {
    width < NARROW_BREAKPOINT
}

/// Number of columns in the skills grid for the given content width.
pub(super) fn skills_columns(width: f32) -> usize {
    if width < 560.0 {
        2
    } else if width < 820.0 {
        3
    } else {
        5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_below_breakpoint_only() {
        assert!(is_narrow(NARROW_BREAKPOINT - 0.5));
        assert!(!is_narrow(NARROW_BREAKPOINT));
        assert!(!is_narrow(1280.0));
    }

    #[test]
    fn skills_grid_widens_with_the_window() {
        assert_eq!(skills_columns(400.0), 2);
        assert_eq!(skills_columns(700.0), 3);
        assert_eq!(skills_columns(880.0), 5);
    }
}
