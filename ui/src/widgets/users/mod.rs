//! User list widget.
//!
//! - `panel`: entry point; mounts the fetch and switches between loading, error and table
//! - `detail`: the selected user's detail panel
//! - `table`: table rendering components (columns, header, row, cells)

mod detail;
mod panel;
pub mod table;

pub use detail::render_detail_panel;
pub use panel::user_list_panel;
