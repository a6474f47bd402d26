use crate::{Error, StateCtx, Updater};

/// A side effect dispatched explicitly through [`StateCtx::dispatch`].
///
/// Commands read the current states from the context and publish results
/// through the [`Updater`]; they may hand the updater to async work that
/// finishes after `run` returns.
pub trait Command {
    fn run(&self, ctx: &StateCtx, updater: Updater) -> Result<(), Error>;
}
