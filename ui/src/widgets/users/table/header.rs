//! Header row for the user list table.

use egui::Ui;
use egui_extras::TableRow;

pub const HEADERS: [&str; 9] = [
    "ID",
    "Name",
    "Username",
    "Email",
    "City",
    "Phone",
    "Website",
    "Company Name",
    "Actions",
];

#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>) {
    for label in HEADERS {
        header.col(|ui| {
            render_header_cell(ui, label);
        });
    }
}

#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) {
    ui.strong(label);
}
