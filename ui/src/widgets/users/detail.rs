use egui::{CornerRadius, Frame, Margin, Ui};
use userlist_business::UserRecord;

use crate::utils::colors::panel_fill;

pub const DETAIL_HEADING: &str = "Selected User Details";

/// Name, email and phone of the selected user.
pub fn render_detail_panel(ui: &mut Ui, user: &UserRecord) {
    Frame::new()
        .fill(panel_fill(ui.visuals()))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.heading(DETAIL_HEADING);
            ui.add_space(4.0);
            detail_line(ui, "Name:", &user.name);
            detail_line(ui, "Email:", &user.email);
            detail_line(ui, "Phone:", &user.phone);
        });
}

fn detail_line(ui: &mut Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.strong(label);
        ui.label(value);
    });
}
