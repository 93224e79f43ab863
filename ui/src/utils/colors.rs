//! Shared color constants for the UI.

use egui::Color32;

/// Error text.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Detail panel background, light and dark themes.
pub const COLOR_PANEL_LIGHT: Color32 = Color32::from_rgb(243, 244, 246);
pub const COLOR_PANEL_DARK: Color32 = Color32::from_rgb(40, 42, 46);

pub fn panel_fill(visuals: &egui::Visuals) -> Color32 {
    if visuals.dark_mode {
        COLOR_PANEL_DARK
    } else {
        COLOR_PANEL_LIGHT
    }
}
