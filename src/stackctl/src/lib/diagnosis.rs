use anyhow::Error as AnyhowError;
use stackctl_core::error::remove_stack::RemoveStackError;
use stackctl_core::error::require_stack::RequireStackError;
use stackctl_core::error::runtime::ContainerRuntimeError;
use stackctl_core::error::stop_stack::StopStackError;

/// Contains two Option<Strings> that can be displayed to the user:
///   - Error explanation: Goes into a bit of detail on what the error is and/or where the user can find out more about it.
///   - Action suggestion: Tells the user how to move forward to resolve the error.
pub type Diagnosis = (Option<String>, Option<String>);
pub const NULL_DIAGNOSIS: Diagnosis = (None, None);

/// Attempts to give helpful suggestions on how to resolve errors.
pub fn diagnose(err: &AnyhowError) -> Diagnosis {
    match require_stack_error(err) {
        Some(RequireStackError::RuntimeUnavailable(runtime_err)) => diagnose_runtime(runtime_err),
        Some(RequireStackError::StackDoesNotExist(_)) => (
            None,
            Some("Run 'stackctl list' to see the stacks that exist.".to_string()),
        ),
        _ => NULL_DIAGNOSIS,
    }
}

fn require_stack_error(err: &AnyhowError) -> Option<&RequireStackError> {
    if let Some(RemoveStackError::RequireStack(e)) = err.downcast_ref::<RemoveStackError>() {
        Some(e)
    } else if let Some(StopStackError::RequireStack(e)) = err.downcast_ref::<StopStackError>() {
        Some(e)
    } else {
        err.downcast_ref::<RequireStackError>()
    }
}

fn diagnose_runtime(err: &ContainerRuntimeError) -> Diagnosis {
    match err {
        ContainerRuntimeError::DockerNotFound(program, _) => (
            Some(format!(
                "Stacks run on Docker Compose, but the '{program}' executable could not be found."
            )),
            Some(
                "Install Docker (https://docs.docker.com/get-docker/), or point --docker (or STACKCTL_DOCKER) at the docker executable."
                    .to_string(),
            ),
        ),
        ContainerRuntimeError::ComposeUnavailable(_) | ContainerRuntimeError::Process(_) => (
            Some("'docker compose version' did not succeed.".to_string()),
            Some(
                "Make sure the Docker daemon is running and the Compose plugin is installed."
                    .to_string(),
            ),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackctl_core::runtime::{ContainerRuntimeGuard, DockerRuntime};

    #[test]
    fn missing_docker_suggests_installing_it() {
        let runtime_err = DockerRuntime::new(Some("stackctl-no-such-docker".to_string()))
            .check()
            .unwrap_err();
        let err = AnyhowError::new(RemoveStackError::RequireStack(
            RequireStackError::RuntimeUnavailable(runtime_err),
        ));

        let (explanation, suggestion) = diagnose(&err);
        assert!(explanation.unwrap().contains("'stackctl-no-such-docker'"));
        assert!(suggestion.unwrap().contains("STACKCTL_DOCKER"));
    }

    #[test]
    fn unknown_stack_suggests_listing() {
        let err = AnyhowError::new(StopStackError::RequireStack(
            RequireStackError::StackDoesNotExist("ghost".to_string()),
        ));
        let (explanation, suggestion) = diagnose(&err);
        assert!(explanation.is_none());
        assert!(suggestion.unwrap().contains("stackctl list"));
    }

    #[test]
    fn other_errors_have_no_diagnosis() {
        let err = AnyhowError::new(RequireStackError::NoStackSpecified());
        assert_eq!(diagnose(&err), NULL_DIAGNOSIS);
        assert_eq!(diagnose(&anyhow::anyhow!("boom")), NULL_DIAGNOSIS);
    }
}
