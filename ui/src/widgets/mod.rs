pub mod users;

pub use users::user_list_panel;
