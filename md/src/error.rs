//! Error types for mediator-demo

use thiserror::Error;

/// Errors raised by components, the mediator, and the console
#[derive(Debug, Error)]
pub enum Error {
    /// An operation ran before any mediator was wired into the component
    #[error("Mediator not configured for {component}")]
    MediatorNotConfigured { component: &'static str },

    /// The component was wired, but its mediator has since been dropped
    #[error("Mediator for {component} has been released")]
    MediatorReleased { component: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the errors raised when an operation's mediator precondition fails
    pub fn is_precondition_violation(&self) -> bool {
        matches!(self, Self::MediatorNotConfigured { .. } | Self::MediatorReleased { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
