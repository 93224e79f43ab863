use crate::{state::State, widgets};

pub struct UserListApp {
    state: State,
}

impl UserListApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }
}

impl eframe::App for UserListApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::user_list_panel(ui, &mut self.state);
        });
    }
}
