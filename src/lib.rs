pub mod commands;
pub mod config;
pub mod launch;
pub mod probe;
pub mod shell;
