use std::any::{Any, TypeId};
use std::fmt;

use flume::Sender;
use log::warn;

/// A value stored in [`StateCtx`](crate::StateCtx), keyed by its type.
///
/// States must be `Send` so background work (HTTP callbacks) can hand a new
/// value to the UI thread through an [`Updater`].
pub trait State: Any + Send {}

pub(crate) type Update = (TypeId, &'static str, Box<dyn Any + Send>);

/// Cross-thread handle that queues replacement values for states.
///
/// Queued values are applied by [`StateCtx::sync`](crate::StateCtx::sync),
/// in the order they were sent.
#[derive(Clone)]
pub struct Updater {
    send: Sender<Update>,
}

impl Updater {
    pub(crate) fn new(send: Sender<Update>) -> Self {
        Self { send }
    }

    pub fn set<T: State>(&self, state: T) {
        let name = std::any::type_name::<T>();
        if self
            .send
            .send((TypeId::of::<T>(), name, Box::new(state)))
            .is_err()
        {
            warn!("Updater: state context dropped, discarding update for {name}");
        }
    }
}

impl fmt::Debug for Updater {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Updater")
            .field("queued", &self.send.len())
            .finish()
    }
}
