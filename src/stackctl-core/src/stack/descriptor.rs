use serde::Deserialize;

pub const STACK_DESCRIPTOR_FILE: &str = "stack.json";
pub const DEFAULT_COMPOSE_FILE: &str = "docker-compose.yml";

/// The `stack.json` file at the root of every stack directory.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StackDescriptor {
    pub name: String,

    #[serde(default)]
    pub exposed_ports: Vec<u16>,

    #[serde(default)]
    compose_file: Option<String>,
}

impl StackDescriptor {
    pub fn compose_file(&self) -> &str {
        self.compose_file.as_deref().unwrap_or(DEFAULT_COMPOSE_FILE)
    }
}
