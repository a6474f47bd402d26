//! Typed state container for the roster app.
//!
//! States are plain Rust values keyed by type. The UI thread owns the
//! [`StateCtx`]; background work publishes through an [`Updater`].

mod basic_state;
mod command;
mod ctx;
mod error;
mod state;

pub use basic_state::Time;
pub use command::Command;
pub use ctx::StateCtx;
pub use error::Error;
pub use state::{State, Updater};
