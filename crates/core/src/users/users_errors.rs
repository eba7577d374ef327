use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Username must not be empty")]
    EmptyUsername,
}
