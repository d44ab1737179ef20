use crate::error::require_stack::RequireStackError;
use crate::error::stack_manager::StackManagerError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RemoveStackError {
    #[error(transparent)]
    RequireStack(#[from] RequireStackError),

    #[error(transparent)]
    Load(StackManagerError),

    #[error(transparent)]
    Stop(StackManagerError),

    #[error(transparent)]
    Remove(StackManagerError),

    #[error("Failed to write output")]
    WriteOutputFailed(#[source] std::io::Error),
}
