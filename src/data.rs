// src/data.rs
use serde::{Deserialize, Serialize};

/// Sidebar category with its display color (`#RRGGBB`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub name: String,
    pub category_name: String,
    /// 1-based position in the page's movement list.
    pub ordinal: usize,
}

/// Everything extracted from one saved movements page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementPage {
    pub categories: Vec<Category>,
    pub current_category: String,
    pub movements: Vec<Movement>,
}
