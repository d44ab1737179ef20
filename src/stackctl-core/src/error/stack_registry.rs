use crate::error::fs::{ReadDirError, ReadMetadataError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StackRegistryError {
    #[error("'{0}' is not a valid stack name: use lowercase letters, digits, '_' and '-', starting with a letter or digit")]
    InvalidStackName(String),

    #[error("Failed to list stacks")]
    ListStacksFailed(#[source] ReadDirError),

    #[error("Failed to look up stack")]
    LookupStackFailed(#[source] ReadMetadataError),
}
