// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod deploy;
pub mod error;
pub mod file;
pub mod report;
pub mod specs;

pub use data::{Category, Movement, MovementPage};
pub use error::{Result, ToolError};
