use roster_business::{BusinessConfig, FetchService, FetchState, UserTableState, UsersState};
use roster_states::{StateCtx, Time};

/// The main application state.
#[derive(Debug)]
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        let config = BusinessConfig::from_env().unwrap_or_else(|err| {
            log::warn!("Falling back to default configuration: {err}");
            BusinessConfig::default()
        });
        Self::new(config)
    }
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        Self::with_fetch(config, FetchState::default())
    }

    /// State wired to an arbitrary fetch backend.
    pub fn with_service(config: BusinessConfig, service: impl FetchService + 'static) -> Self {
        Self::with_fetch(config, FetchState::new(service))
    }

    /// State for tests: talks to `base_url` and applies filters without delay.
    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(base_url).with_filter_debounce_ms(0))
    }

    fn with_fetch(config: BusinessConfig, fetch: FetchState) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(Time::now());
        ctx.add_state(UserTableState::new(config.filter_debounce()));
        ctx.add_state(UsersState::default());
        ctx.add_state(fetch);
        ctx.add_state(config);

        Self { ctx }
    }
}
