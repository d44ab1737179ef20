use crate::error::fs::{
    ReadDirError, ReadFileError, ReadMetadataError, RemoveDirectoryAndContentsError,
};
use std::fs::{Metadata, ReadDir};
use std::path::Path;

pub fn read(path: &Path) -> Result<Vec<u8>, ReadFileError> {
    std::fs::read(path).map_err(|source| ReadFileError {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_dir(path: &Path) -> Result<ReadDir, ReadDirError> {
    path.read_dir().map_err(|source| ReadDirError {
        path: path.to_path_buf(),
        source,
    })
}

/// Like `std::fs::metadata`, but a path that does not exist is `Ok(None)`.
pub fn try_metadata(path: &Path) -> Result<Option<Metadata>, ReadMetadataError> {
    match std::fs::metadata(path) {
        Ok(metadata) => Ok(Some(metadata)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ReadMetadataError {
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub fn remove_dir_all(path: &Path) -> Result<(), RemoveDirectoryAndContentsError> {
    std::fs::remove_dir_all(path).map_err(|source| RemoveDirectoryAndContentsError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_metadata_of_missing_path_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(try_metadata(&dir.path().join("missing")).unwrap().is_none());
        assert!(try_metadata(dir.path()).unwrap().unwrap().is_dir());
    }

    #[test]
    fn remove_dir_all_deletes_nested_contents() {
        let dir = tempfile::tempdir().unwrap();
        let stack = dir.path().join("demo");
        std::fs::create_dir_all(stack.join("data").join("postgres")).unwrap();
        std::fs::write(stack.join("stack.json"), "{}").unwrap();

        remove_dir_all(&stack).unwrap();

        assert!(!stack.exists());
        assert!(dir.path().exists());
    }

    #[test]
    fn remove_dir_all_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let err = remove_dir_all(&missing).unwrap_err();
        assert_eq!(err.path, missing);
    }
}
