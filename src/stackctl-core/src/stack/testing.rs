//! Test doubles for the stack collaborators.
use crate::cli::Confirmer;
use crate::error::runtime::ContainerRuntimeError;
use crate::error::stack_manager::StackManagerError;
use crate::error::stack_registry::StackRegistryError;
use crate::runtime::ContainerRuntimeGuard;
use crate::stack::manager::StackManager;
use crate::stack::registry::{validate_stack_name, StackRegistry};
use slog::{Drain, Logger, Never, OwnedKVList, Record};
use std::cell::{Cell, RefCell};
use std::sync::{Arc, Mutex};

pub struct FakeRuntime {
    available: bool,
}

impl FakeRuntime {
    pub fn available() -> Self {
        Self { available: true }
    }

    pub fn unavailable() -> Self {
        Self { available: false }
    }
}

impl ContainerRuntimeGuard for FakeRuntime {
    fn check(&self) -> Result<(), ContainerRuntimeError> {
        if self.available {
            Ok(())
        } else {
            Err(ContainerRuntimeError::ComposeUnavailable(
                "Cannot connect to the Docker daemon".to_string(),
            ))
        }
    }
}

pub struct FakeRegistry {
    stacks: Vec<String>,
    lookups: Cell<usize>,
}

impl FakeRegistry {
    pub fn with_stacks(stacks: &[&str]) -> Self {
        Self {
            stacks: stacks.iter().map(|s| s.to_string()).collect(),
            lookups: Cell::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }
}

impl StackRegistry for FakeRegistry {
    fn exists(&self, name: &str) -> Result<bool, StackRegistryError> {
        self.lookups.set(self.lookups.get() + 1);
        validate_stack_name(name)?;
        Ok(self.stacks.iter().any(|s| s == name))
    }

    fn list(&self) -> Result<Vec<String>, StackRegistryError> {
        let mut stacks = self.stacks.clone();
        stacks.sort();
        Ok(stacks)
    }
}

/// Records every call, and fails the one named in `fail_on`.
#[derive(Default)]
pub struct FakeManager {
    pub calls: Vec<String>,
    pub fail_on: Option<&'static str>,
}

impl FakeManager {
    pub fn failing_on(operation: &'static str) -> Self {
        Self {
            calls: vec![],
            fail_on: Some(operation),
        }
    }

    fn record(&mut self, call: String, operation: &str) -> Result<(), StackManagerError> {
        self.calls.push(call);
        if self.fail_on == Some(operation) {
            return Err(StackManagerError::ComposeCommandFailed {
                command: format!("docker compose {operation}"),
                code: Some(1),
                stderr: format!("{operation} went wrong"),
            });
        }
        Ok(())
    }
}

impl StackManager for FakeManager {
    fn load(&mut self, name: &str, verbose: bool) -> Result<(), StackManagerError> {
        self.record(format!("load {name} verbose={verbose}"), "load")
    }

    fn stop(&mut self, verbose: bool) -> Result<(), StackManagerError> {
        self.record(format!("stop verbose={verbose}"), "stop")
    }

    fn remove(&mut self, verbose: bool) -> Result<(), StackManagerError> {
        self.record(format!("remove verbose={verbose}"), "remove")
    }
}

/// Records warnings and prompts, in order, as `warn: ...` / `ask: ...`.
pub struct FakeConfirmer {
    answer: bool,
    pub events: RefCell<Vec<String>>,
}

impl FakeConfirmer {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            events: RefCell::new(vec![]),
        }
    }
}

impl Confirmer for FakeConfirmer {
    fn warn(&self, message: &str) {
        self.events.borrow_mut().push(format!("warn: {message}"));
    }

    fn ask(&self, prompt: &str) -> bool {
        self.events.borrow_mut().push(format!("ask: {prompt}"));
        self.answer
    }
}

/// A slog drain keeping `LEVEL: message` lines for assertions.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<String>>>);

impl CapturedLogs {
    pub fn logger(&self) -> Logger {
        Logger::root(self.clone(), slog::o!())
    }

    pub fn lines(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Drain for CapturedLogs {
    type Ok = ();
    type Err = Never;

    fn log(&self, record: &Record<'_>, _values: &OwnedKVList) -> Result<(), Never> {
        self.0
            .lock()
            .unwrap()
            .push(format!("{}: {}", record.level().as_str(), record.msg()));
        Ok(())
    }
}
