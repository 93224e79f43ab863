//! Column definitions for the user list table.

use egui_extras::Column;

pub const ID_WIDTH: f32 = 40.0;
pub const ACTIONS_WIDTH: f32 = 70.0;
pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 24.0;
pub const MAX_SCROLL_HEIGHT: f32 = 420.0;

/// Columns in order: ID, Name, Username, Email, City, Phone, Website,
/// Company Name, Actions.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::exact(ID_WIDTH),                  // ID
        Column::auto().at_least(110.0).clip(true), // Name
        Column::auto().at_least(80.0).clip(true),  // Username
        Column::auto().at_least(140.0).clip(true), // Email
        Column::auto().at_least(90.0).clip(true),  // City
        Column::auto().at_least(110.0).clip(true), // Phone
        Column::auto().at_least(90.0).clip(true),  // Website
        Column::remainder().at_least(110.0),       // Company Name
        Column::exact(ACTIONS_WIDTH),              // Actions
    ]
}
