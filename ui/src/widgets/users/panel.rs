use egui::{Button, Ui};
use userlist_business::UserRecord;

use super::detail::render_detail_panel;
use super::table::render_users_table;
use crate::state::State;
use crate::utils::colors::COLOR_RED;

pub const LOADING_TEXT: &str = "Loading...";
pub const REFRESH_LABEL: &str = "🔄 Refresh";

/// The user list: loading indicator, error text or table, then the detail panel.
///
/// The first call mounts the component and starts the initial fetch.
pub fn user_list_panel(ui: &mut Ui, state: &mut State) {
    state.mount(ui.ctx());
    state.sync();

    let mut selected: Option<UserRecord> = None;
    let mut refresh = false;
    let view = state.view();

    ui.horizontal(|ui| {
        ui.heading("Users");
        refresh = ui
            .add_enabled(!view.is_loading(), Button::new(REFRESH_LABEL))
            .clicked();
    });
    ui.separator();

    if view.is_loading() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(LOADING_TEXT);
        });
    } else if let Some(error) = view.error() {
        ui.colored_label(COLOR_RED, error);
    } else {
        selected = render_users_table(ui, view);
    }

    if let Some(user) = view.selected() {
        ui.add_space(12.0);
        render_detail_panel(ui, user);
    }

    if let Some(user) = selected {
        state.select(user);
    }
    if refresh {
        state.refresh();
    }
}
