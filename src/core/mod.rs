// src/core/mod.rs

pub mod html;
pub mod sanitize;
pub mod shell;

pub use html::{Element, Tag};
pub use shell::{Shell, SystemShell};
