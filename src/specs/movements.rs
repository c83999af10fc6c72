// src/specs/movements.rs
//! Spec for the Rebrand Fitness *movements* page (saved HTML).
//!
//! Layout the extractor relies on:
//! - Sidebar `<aside class="sticky ...">` with one `<li>` per category. The
//!   name sits in a `<p>` whose class contains `text-sm`; the color comes
//!   from the inline `rgb(...)` style of an `<input type="color">`.
//! - Main pane `<main class="flex-1 ...">` with the selected category in
//!   the first `<h3>` and its movements in `<ul class="space-y-2">`, one
//!   `<li>` each, name in a `<p>` whose class contains `text-base`.
//!
//! Anything missing yields empty lists, never an error.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::consts::{DEFAULT_CATEGORY_COLOR, UNKNOWN_CATEGORY};
use crate::core::html::{self, Element, Tag};
use crate::data::{Category, Movement, MovementPage};

pub fn extract(doc: &str) -> MovementPage {
    let categories = extract_categories(doc);
    let (current_category, movements) = extract_movements(doc);

    logf!(
        categories = categories.len(),
        movements = movements.len(),
        current = %current_category,
        "extracted movements page"
    );

    MovementPage { categories, current_category, movements }
}

/// Sidebar categories in document order.
pub fn extract_categories(doc: &str) -> Vec<Category> {
    let Some(sidebar) = html::find_element(doc, "aside", |t| t.has_class("sticky"), 0) else {
        logd!("no sticky sidebar; no categories");
        return Vec::new();
    };

    sidebar
        .find_all("li", any)
        .iter()
        .filter_map(|li| {
            let name = li.find("p", |t| t.class_contains("text-sm"))?.text();
            let color = li
                .find("input", is_color_input)
                .and_then(|input| input.tag.attr("style"))
                .and_then(|style| rgb_to_hex(&style))
                .unwrap_or_else(|| s!(DEFAULT_CATEGORY_COLOR));
            Some(Category { name, color })
        })
        .collect()
}

/// Current category heading plus its movement list.
/// Ordinals count every `<li>`, including the ones that get skipped.
pub fn extract_movements(doc: &str) -> (String, Vec<Movement>) {
    let Some(main) = html::find_element(doc, "main", |t| t.has_class("flex-1"), 0) else {
        logd!("no flex-1 main pane; no movements");
        return (s!(UNKNOWN_CATEGORY), Vec::new());
    };

    let current = main
        .find("h3", any)
        .map(|h3| h3.text())
        .unwrap_or_else(|| s!(UNKNOWN_CATEGORY));

    let Some(list) = main.find("ul", |t| t.has_class("space-y-2")) else {
        logd!(current = %current, "no space-y-2 list under main pane");
        return (current, Vec::new());
    };

    let movements = list
        .find_all("li", any)
        .iter()
        .enumerate()
        .filter_map(|(idx, li)| {
            let name = movement_name(li)?;
            // the heading sometimes repeats as the first list row
            if name == current {
                return None;
            }
            Some(Movement { name, category_name: current.clone(), ordinal: idx + 1 })
        })
        .collect();

    (current, movements)
}

fn movement_name(li: &Element) -> Option<String> {
    li.find("p", |t| t.class_contains("text-base")).map(|p| p.text())
}

fn any(_: &Tag) -> bool {
    true
}

fn is_color_input(t: &Tag) -> bool {
    t.attr("type").as_deref() == Some("color")
}

fn rgb_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"rgb\(([0-9]+),\s*([0-9]+),\s*([0-9]+)\)").expect("static rgb pattern")
    })
}

/// First `rgb(r, g, b)` in an inline style → `#RRGGBB` (upper-case).
pub fn rgb_to_hex(style: &str) -> Option<String> {
    let caps = rgb_re().captures(style)?;
    let channel = |i: usize| caps.get(i)?.as_str().parse::<u64>().ok();
    let (r, g, b) = (channel(1)?, channel(2)?, channel(3)?);
    Some(format!("#{r:02X}{g:02X}{b:02X}"))
}
