pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod json;
pub mod process;
pub mod runtime;
pub mod stack;
