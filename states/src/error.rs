use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("State not found: {name}")]
    StateNotFound { name: &'static str },
}

impl Error {
    pub fn state_not_found<T>() -> Self {
        Self::StateNotFound {
            name: std::any::type_name::<T>(),
        }
    }
}
