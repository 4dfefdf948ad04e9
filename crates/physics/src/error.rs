use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhysicsError {
    #[error("no body with handle {0}")]
    UnknownBody(usize),
    #[error("no trigger with handle {0}")]
    UnknownTrigger(usize),
}
