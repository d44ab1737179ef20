use crate::error::foundation::FoundationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine the stacks directory")]
    DetermineStacksRootFailed(#[source] FoundationError),
}
