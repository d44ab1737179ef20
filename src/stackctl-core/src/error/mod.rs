pub mod config;
pub mod foundation;
pub mod fs;
pub mod process;
pub mod remove_stack;
pub mod require_stack;
pub mod runtime;
pub mod stack_manager;
pub mod stack_registry;
pub mod stop_stack;
pub mod structured_file;
