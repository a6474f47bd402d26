//! Loads the users slice.
//!
//! The request is a side effect, so it lives in a command dispatched by the
//! view rather than in anything that runs implicitly. The command only acts
//! while the slice is `Idle`, which makes the fetch happen once per view
//! lifetime: `Loading` is published before the request goes out and the
//! callback replaces it with `Succeeded` or `Failed`.

use log::{debug, error, info};
use roster_states::{Command, Error as StateError, StateCtx, Updater};
use thiserror::Error;

use crate::{BusinessConfig, FetchResult, FetchState, User, UsersState};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Transport(String),
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Decodes the body of `GET /users`: a JSON array of users.
pub fn parse_users_response(status: u16, body: &[u8]) -> Result<Vec<User>, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }
    Ok(serde_json::from_slice(body)?)
}

fn into_users(result: FetchResult) -> Result<Vec<User>, FetchError> {
    let response = result.map_err(FetchError::Transport)?;
    parse_users_response(response.status, &response.body)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FetchUsersCommand;

impl Command for FetchUsersCommand {
    fn run(&self, ctx: &StateCtx, updater: Updater) -> Result<(), StateError> {
        if !ctx.try_state::<UsersState>()?.is_idle() {
            debug!("FetchUsersCommand: users already requested, skipping");
            return Ok(());
        }

        let url = ctx.try_state::<BusinessConfig>()?.users_url();
        let service = ctx.try_state::<FetchState>()?.service();

        info!("FetchUsersCommand: fetching users from {url}");
        updater.set(UsersState::loading());

        service.get(
            &url,
            Box::new(move |result| match into_users(result) {
                Ok(users) => {
                    info!("FetchUsersCommand: fetched {} users", users.len());
                    updater.set(UsersState::succeeded(users));
                }
                Err(err) => {
                    error!("FetchUsersCommand: {err}");
                    updater.set(UsersState::failed(err.to_string()));
                }
            }),
        );

        Ok(())
    }
}
