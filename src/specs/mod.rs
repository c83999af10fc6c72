//! # Markup “specs”
//!
//! Page-specific extraction rules. Each spec knows where the data lives in
//! one saved page and how to read it with the `core::html` scanner.
//!
//! - Specs only extract. Printing, JSON and file output live in `report`.
//! - Missing sections are not errors: a spec returns empty lists and lets
//!   the caller decide whether that matters.
//! - Selectors are class-token based and tolerant of attribute order,
//!   whitespace and tag case.
//!
//! Specs are tested offline against inline fixtures.
pub mod movements;
