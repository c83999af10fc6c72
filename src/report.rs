// src/report.rs
use std::io::Write;

use crate::config::options::ReportMode;
use crate::data::MovementPage;
use crate::error::Result;

/// Pretty JSON with 2-space indent: `categories`, `currentCategory`, `movements`.
pub fn to_json(page: &MovementPage) -> Result<String> {
    Ok(serde_json::to_string_pretty(page)?)
}

/// Human-readable summary, then the JSON document.
pub fn write_report<W: Write + ?Sized>(out: &mut W, page: &MovementPage, mode: &ReportMode) -> Result<()> {
    let json = to_json(page)?;

    if *mode == ReportMode::JsonOnly {
        writeln!(out, "{json}")?;
        return Ok(());
    }

    let current = &page.current_category;
    writeln!(out, "Found {} categories", page.categories.len())?;
    writeln!(out, "Found {} movements for '{current}'", page.movements.len())?;

    writeln!(out, "\n=== CATEGORIES ===")?;
    for cat in &page.categories {
        writeln!(out, "{}: {}", cat.name, cat.color)?;
    }

    writeln!(out, "\n=== MOVEMENTS for {current} ===")?;
    for mov in &page.movements {
        writeln!(out, "{}. {}", mov.ordinal, mov.name)?;
    }

    writeln!(out, "\n=== JSON ===")?;
    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Category, Movement};

    fn page() -> MovementPage {
        MovementPage {
            categories: vec![Category { name: s!("Carry"), color: s!("#FFC8AA") }],
            current_category: s!("Carry"),
            movements: vec![Movement { name: s!("Farmer Carry"), category_name: s!("Carry"), ordinal: 2 }],
        }
    }

    fn render(mode: ReportMode) -> String {
        let mut buf: Vec<u8> = Vec::new();
        write_report(&mut buf, &page(), &mode).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn full_report_layout() {
        let text = render(ReportMode::Full);
        let head: Vec<&str> = text.lines().take(9).collect();
        assert_eq!(
            head,
            vec![
                "Found 1 categories",
                "Found 1 movements for 'Carry'",
                "",
                "=== CATEGORIES ===",
                "Carry: #FFC8AA",
                "",
                "=== MOVEMENTS for Carry ===",
                "2. Farmer Carry",
                "",
            ]
        );
        assert!(text.contains("=== JSON ===\n{"));
    }

    #[test]
    fn json_keys_are_camel_case_and_ordered() {
        let json = to_json(&page()).unwrap();
        let cats = json.find("\"categories\"").unwrap();
        let cur = json.find("\"currentCategory\"").unwrap();
        let movs = json.find("\"movements\"").unwrap();
        assert!(cats < cur && cur < movs);
        assert!(json.contains("\"categoryName\": \"Carry\""));
        assert!(json.contains("\"ordinal\": 2"));
        assert!(json.starts_with("{\n  \"categories\""));
    }

    #[test]
    fn json_only_has_no_summary() {
        let text = render(ReportMode::JsonOnly);
        assert!(text.starts_with('{'));
        assert!(!text.contains("=== JSON ==="));
        let back: MovementPage = serde_json::from_str(&text).unwrap();
        assert_eq!(back, page());
    }
}
