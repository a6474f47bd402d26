use chrono::{DateTime, Utc};

use crate::State;

/// Frame clock.
///
/// Refreshed once per frame by the app; tests set it directly so anything
/// time based (debouncing) stays deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct Time {
    virt: DateTime<Utc>,
}

impl Time {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { virt: at }
    }

    pub fn now() -> Self {
        Self::new(Utc::now())
    }

    pub fn refresh(&mut self) {
        self.virt = Utc::now();
    }
}

impl State for Time {}

impl AsMut<DateTime<Utc>> for Time {
    fn as_mut(&mut self) -> &mut DateTime<Utc> {
        &mut self.virt
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.virt
    }
}
