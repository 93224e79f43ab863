//! Cell rendering for the user list table.

use egui::{RichText, Ui};

#[inline]
pub fn render_id_cell(ui: &mut Ui, id: u64) {
    ui.label(RichText::new(id.to_string()).monospace());
}

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.label(text);
}

/// Absent nested values render as an empty cell.
#[inline]
pub fn render_optional_cell(ui: &mut Ui, text: Option<&str>) {
    ui.label(text.unwrap_or_default());
}

/// Returns `true` if the button was clicked.
#[inline]
pub fn render_select_button(ui: &mut Ui) -> bool {
    ui.button("Select").clicked()
}
