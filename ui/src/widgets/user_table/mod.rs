//! User table widget.
//!
//! - `panel`: load-status handling and layout of the whole view
//! - `filters`: the four filter inputs with their clear buttons
//! - `table`: column definitions, header and rows
//! - `cells`: highlighted cell rendering

pub mod cells;
pub mod filters;
mod panel;
pub mod table;

pub use panel::user_table;
