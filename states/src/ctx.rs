use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;
use std::fmt;

use flume::{Receiver, Sender};
use log::{debug, warn};

use crate::state::Update;
use crate::{Command, Error, State, Updater};

struct Slot {
    name: &'static str,
    value: Box<dyn Any + Send>,
}

/// Owns every registered state of the app.
///
/// Reads and writes from the UI thread go straight to the storage. Updates
/// from other threads are queued through an [`Updater`] and applied by
/// [`StateCtx::sync`], which the app calls once at the top of each frame.
pub struct StateCtx {
    storage: BTreeMap<TypeId, Slot>,
    send: Sender<Update>,
    recv: Receiver<Update>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateCtx")
            .field(
                "states",
                &self.storage.values().map(|slot| slot.name).collect::<Vec<_>>(),
            )
            .field("queued", &self.recv.len())
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            storage: BTreeMap::new(),
            send,
            recv,
        }
    }

    /// Registers `state`, replacing any previous value of the same type.
    pub fn add_state<T: State>(&mut self, state: T) {
        self.storage.insert(
            TypeId::of::<T>(),
            Slot {
                name: type_name::<T>(),
                value: Box::new(state),
            },
        );
    }

    pub fn contains<T: State>(&self) -> bool {
        self.storage.contains_key(&TypeId::of::<T>())
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.storage
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.value.downcast_ref::<T>())
            .ok_or_else(Error::state_not_found::<T>)
    }

    pub fn try_state_mut<T: State>(&mut self) -> Result<&mut T, Error> {
        self.storage
            .get_mut(&TypeId::of::<T>())
            .and_then(|slot| slot.value.downcast_mut::<T>())
            .ok_or_else(Error::state_not_found::<T>)
    }

    /// # Panics
    /// Panics if `T` was never registered with [`StateCtx::add_state`].
    pub fn state<T: State>(&self) -> &T {
        match self.try_state::<T>() {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    /// # Panics
    /// Panics if `T` was never registered with [`StateCtx::add_state`].
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        match self.try_state_mut::<T>() {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    /// Mutates a registered state in place.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) -> Result<(), Error> {
        f(self.try_state_mut::<T>()?);
        Ok(())
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    /// Applies every queued update and returns how many were applied.
    ///
    /// Updates for types that are not registered are dropped with a warning.
    pub fn sync(&mut self) -> usize {
        let mut applied = 0;
        for (id, name, value) in self.recv.try_iter() {
            match self.storage.get_mut(&id) {
                Some(slot) => {
                    debug!("StateCtx: applied update for {name}");
                    slot.value = value;
                    applied += 1;
                }
                None => warn!("StateCtx: dropping update for unregistered state {name}"),
            }
        }
        applied
    }

    /// Runs `command` against the current states, then syncs so anything the
    /// command published synchronously is visible to the caller.
    pub fn dispatch<C: Command>(&mut self, command: &C) -> Result<(), Error> {
        command.run(self, self.updater())?;
        self.sync();
        Ok(())
    }
}
