use crate::lib::error::StackResult;
use stackctl_core::config::directories::get_stacks_root;
use stackctl_core::runtime::DockerRuntime;
use std::path::{Path, PathBuf};

pub trait Environment {
    fn get_logger(&self) -> &slog::Logger;

    /// The directory holding one subdirectory per stack.
    fn get_stacks_root(&self) -> &Path;

    fn get_runtime(&self) -> &DockerRuntime;

    /// Positive for `-v`, negative for `-q`.
    fn get_verbose_level(&self) -> i64;

    /// Whether stack manager calls should stream compose output.
    fn is_verbose(&self) -> bool {
        self.get_verbose_level() > 0
    }
}

pub struct EnvironmentImpl {
    stacks_root: PathBuf,
    runtime: DockerRuntime,

    logger: Option<slog::Logger>,
    verbose_level: i64,
}

impl EnvironmentImpl {
    /// `stacks_dir` overrides the default stacks root; `docker` overrides the
    /// container runtime program.
    pub fn new(stacks_dir: Option<PathBuf>, docker: Option<String>) -> StackResult<Self> {
        let stacks_root = match stacks_dir {
            Some(dir) => dir,
            None => get_stacks_root()?,
        };
        Ok(EnvironmentImpl {
            stacks_root,
            runtime: DockerRuntime::new(docker),
            logger: None,
            verbose_level: 0,
        })
    }

    pub fn with_logger(mut self, logger: slog::Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_verbose_level(mut self, verbose_level: i64) -> Self {
        self.verbose_level = verbose_level;
        self
    }
}

impl Environment for EnvironmentImpl {
    fn get_logger(&self) -> &slog::Logger {
        self.logger
            .as_ref()
            .expect("Log was not setup, but is being used.")
    }

    fn get_stacks_root(&self) -> &Path {
        &self.stacks_root
    }

    fn get_runtime(&self) -> &DockerRuntime {
        &self.runtime
    }

    fn get_verbose_level(&self) -> i64 {
        self.verbose_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacks_dir_override() {
        let env = EnvironmentImpl::new(Some(PathBuf::from("/tmp/my-stacks")), None)
            .unwrap()
            .with_verbose_level(2);
        assert_eq!(env.get_stacks_root(), Path::new("/tmp/my-stacks"));
        assert!(env.is_verbose());
    }

    #[test]
    fn quiet_is_not_verbose() {
        let env = EnvironmentImpl::new(Some(PathBuf::from("/tmp/my-stacks")), None)
            .unwrap()
            .with_verbose_level(-1);
        assert!(!env.is_verbose());
    }
}
