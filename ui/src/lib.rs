//! egui front end of the roster app: [`RosterApp`] and the user table widget.

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod state;
pub mod utils;
pub mod widgets;

pub use app::RosterApp;
