//! Domain layer of the roster table: user records, the users slice and its
//! fetch command, per-column filtering, match highlighting and debouncing.

mod config;
mod debounce;
mod fetch_service;
mod fetch_state;
mod fetch_users;
mod filter;
mod highlight;
mod user;
mod user_table;
mod users_state;

pub use config::{
    BusinessConfig, ConfigError, DEFAULT_API_BASE_URL, DEFAULT_FILTER_DEBOUNCE_MS,
    MAX_FILTER_DEBOUNCE_MS,
};
pub use debounce::Debounced;
#[cfg(any(test, feature = "test-utils"))]
pub use fetch_service::MockFetcher;
pub use fetch_service::{EhttpFetcher, FetchResult, FetchService, HttpResponse, OnDone};
pub use fetch_state::FetchState;
pub use fetch_users::{FetchError, FetchUsersCommand, parse_users_response};
pub use filter::{FilterField, UserFilter};
pub use highlight::{Highlighter, Segment, highlight};
pub use user::User;
pub use user_table::{FilterInput, UserTableState};
pub use users_state::{LoadStatus, UsersState};
