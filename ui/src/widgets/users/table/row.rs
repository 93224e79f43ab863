//! Row rendering for the user list table.

use egui_extras::TableRow;
use userlist_business::UserRecord;

use super::cells::{render_id_cell, render_optional_cell, render_select_button, render_text_cell};

/// Renders every cell of `user`'s row. Returns `true` if its Select button was
/// clicked.
#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, user: &UserRecord) -> bool {
    let mut select = false;

    row.col(|ui| render_id_cell(ui, user.id));
    row.col(|ui| render_text_cell(ui, &user.name));
    row.col(|ui| render_text_cell(ui, &user.username));
    row.col(|ui| render_text_cell(ui, &user.email));
    row.col(|ui| render_optional_cell(ui, user.city()));
    row.col(|ui| render_text_cell(ui, &user.phone));
    row.col(|ui| render_text_cell(ui, &user.website));
    row.col(|ui| render_optional_cell(ui, user.company_name()));
    row.col(|ui| {
        select = render_select_button(ui);
    });

    select
}
