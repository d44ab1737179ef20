use crate::error::fs::ReadDirError;
use crate::error::stack_registry::StackRegistryError;
use crate::error::stack_registry::StackRegistryError::{
    InvalidStackName, ListStacksFailed, LookupStackFailed,
};
use crate::stack::stack_dir;
use std::path::{Path, PathBuf};

/// Knows which stacks exist.
pub trait StackRegistry {
    fn exists(&self, name: &str) -> Result<bool, StackRegistryError>;

    /// Names of all stacks, sorted.
    fn list(&self) -> Result<Vec<String>, StackRegistryError>;
}

/// A stack is a directory under the stacks root.
pub struct DiskStackRegistry {
    stacks_root: PathBuf,
}

impl DiskStackRegistry {
    pub fn new(stacks_root: &Path) -> Self {
        Self {
            stacks_root: stacks_root.to_path_buf(),
        }
    }
}

/// A stack name is also its compose project name, so it follows compose's
/// rules: lowercase letters, digits, `_` and `-`, starting with a letter or
/// digit. That also keeps it to a single directory below the stacks root.
pub fn validate_stack_name(name: &str) -> Result<(), StackRegistryError> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
    let valid_rest =
        chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
    if !(valid_start && valid_rest) {
        return Err(InvalidStackName(name.to_string()));
    }
    Ok(())
}

impl StackRegistry for DiskStackRegistry {
    fn exists(&self, name: &str) -> Result<bool, StackRegistryError> {
        validate_stack_name(name)?;
        let metadata = crate::fs::try_metadata(&stack_dir(&self.stacks_root, name))
            .map_err(LookupStackFailed)?;
        Ok(metadata.is_some_and(|m| m.is_dir()))
    }

    fn list(&self) -> Result<Vec<String>, StackRegistryError> {
        if !self.stacks_root.exists() {
            return Ok(vec![]);
        }
        let mut names = vec![];
        for entry in crate::fs::read_dir(&self.stacks_root).map_err(ListStacksFailed)? {
            let entry = entry.map_err(|source| {
                ListStacksFailed(ReadDirError {
                    path: self.stacks_root.clone(),
                    source,
                })
            })?;
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_dir && validate_stack_name(&name).is_ok() {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn existing_directory_is_a_stack() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("demo")).unwrap();
        std::fs::write(root.path().join("notes"), "").unwrap();

        let registry = DiskStackRegistry::new(root.path());
        assert!(registry.exists("demo").unwrap());
        assert!(!registry.exists("ghost").unwrap());
        assert!(!registry.exists("notes").unwrap());
    }

    #[test]
    fn missing_root_has_no_stacks() {
        let root = tempfile::tempdir().unwrap();
        let registry = DiskStackRegistry::new(&root.path().join("stacks"));
        assert!(!registry.exists("demo").unwrap());
        assert!(registry.list().unwrap().is_empty());
    }

    #[test]
    fn lists_stack_directories_sorted() {
        let root = tempfile::tempdir().unwrap();
        for name in ["zeta", "alpha", "mid"] {
            std::fs::create_dir(root.path().join(name)).unwrap();
        }
        std::fs::write(root.path().join("README"), "").unwrap();
        std::fs::create_dir(root.path().join("Not.A.Stack")).unwrap();

        let registry = DiskStackRegistry::new(root.path());
        assert_eq!(registry.list().unwrap(), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn rejects_names_escaping_the_root() {
        let root = tempfile::tempdir().unwrap();
        let registry = DiskStackRegistry::new(&root.path().join("stacks"));
        for name in [
            "", ".", "..", "../stacks", "a/b", "a\\b", "My.Stack", "my.stack", "Demo", "-demo",
            "_demo",
        ] {
            assert!(
                matches!(registry.exists(name), Err(InvalidStackName(n)) if n == name),
                "{name:?} should be rejected"
            );
        }
    }

    proptest! {
        #[test]
        fn compose_project_names_are_valid(name in "[a-z0-9][a-z0-9_-]{0,30}") {
            prop_assert!(validate_stack_name(&name).is_ok());
        }

        #[test]
        fn uppercase_and_dots_are_invalid(prefix in "[a-z0-9]{0,8}", bad in "[A-Z.]", suffix in "[a-z0-9]{0,8}") {
            let name = format!("{prefix}{bad}{suffix}");
            prop_assert!(validate_stack_name(&name).is_err());
        }

        #[test]
        fn names_with_separators_are_invalid(prefix in "[a-z]{0,8}", suffix in "[a-z]{0,8}", sep in "[/\\\\]") {
            let name = format!("{prefix}{sep}{suffix}");
            prop_assert!(validate_stack_name(&name).is_err());
        }
    }
}
