use thiserror::Error;

/// Failure taxonomy for session operations.
///
/// Every reason maps to a distinct user-facing message so the views can
/// tell a bad password from a dead network. `Stale` is an internal
/// concurrency-control outcome and is never shown to the user.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Login rejected by the server.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Registration rejected: the user id or email is already taken.
    #[error("identifier already registered")]
    DuplicateIdentifier,

    /// Registration rejected by server-side validation.
    #[error("registration rejected: {0}")]
    Validation(String),

    /// Transport failure, no server response.
    #[error("network error: {0}")]
    Network(String),

    /// 5xx-class response or a body the client could not parse.
    #[error("server error: {0}")]
    Server(String),

    /// The profile update committed but the canonical re-fetch failed; the
    /// stored snapshot is stale until a refresh succeeds.
    #[error("profile saved, but refreshing it failed: {0}")]
    StaleProfile(String),

    /// Completion superseded by a newer session operation and discarded.
    #[error("superseded by a newer session operation")]
    Stale,
}

impl AuthError {
    /// Short message for toast-style surfaces.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials => "Invalid user id or password.".to_owned(),
            Self::DuplicateIdentifier => "That user id or email is already registered.".to_owned(),
            Self::Validation(msg) => format!("Registration rejected: {msg}"),
            Self::Network(_) => "Could not reach the server. Check your connection.".to_owned(),
            Self::Server(_) => "The server reported an error. Try again shortly.".to_owned(),
            Self::StaleProfile(_) => {
                "Your changes were saved, but the profile could not be refreshed.".to_owned()
            }
            Self::Stale => String::new(),
        }
    }
}
