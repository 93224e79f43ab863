//! Table components for the user list.
//!
//! - `columns`: column definitions and widths
//! - `header`: header row
//! - `row`: one user row
//! - `cells`: per-cell rendering

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::Ui;
use egui_extras::TableBuilder;
use userlist_business::{UserRecord, ViewState};

use columns::{HEADER_HEIGHT, MAX_SCROLL_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_user_row;

/// Renders one row per user in server order.
///
/// Returns the user whose Select button was clicked this frame.
pub fn render_users_table(ui: &mut Ui, view: &ViewState) -> Option<UserRecord> {
    let mut clicked = None;

    let mut builder = TableBuilder::new(ui)
        .id_salt("user_list_table")
        .striped(true)
        .max_scroll_height(MAX_SCROLL_HEIGHT)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
    for column in table_columns() {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            render_table_header(&mut header);
        })
        .body(|mut body| {
            for user in view.users() {
                body.row(ROW_HEIGHT, |mut row| {
                    row.set_selected(view.is_selected(user));
                    if render_user_row(&mut row, user) {
                        clicked = Some(user.clone());
                    }
                });
            }
        });

    clicked
}
