//! The users slice: fetched records plus their load status.

use roster_states::State;

use crate::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// No fetch attempted yet.
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersState {
    pub status: LoadStatus,
    pub users: Vec<User>,
    pub error: Option<String>,
}

impl UsersState {
    pub fn loading() -> Self {
        Self {
            status: LoadStatus::Loading,
            ..Self::default()
        }
    }

    pub fn succeeded(users: Vec<User>) -> Self {
        Self {
            status: LoadStatus::Succeeded,
            users,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: LoadStatus::Failed,
            users: Vec::new(),
            error: Some(message.into()),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.status == LoadStatus::Idle
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl State for UsersState {}
