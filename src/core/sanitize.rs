// src/core/sanitize.rs
use std::borrow::Cow;

/// Named references that also decode without a trailing `;`.
const LEGACY_ENTITIES: &[&str] = &[
    "AElig", "AMP", "Aacute", "Acirc", "Agrave", "Aring", "Atilde", "Auml", "COPY", "Ccedil",
    "ETH", "Eacute", "Ecirc", "Egrave", "Euml", "GT", "Iacute", "Icirc", "Igrave", "Iuml", "LT",
    "Ntilde", "Oacute", "Ocirc", "Ograve", "Oslash", "Otilde", "Ouml", "QUOT", "REG", "THORN",
    "Uacute", "Ucirc", "Ugrave", "Uuml", "Yacute", "aacute", "acirc", "acute", "aelig", "agrave",
    "amp", "aring", "atilde", "auml", "brvbar", "ccedil", "cedil", "cent", "copy", "curren",
    "deg", "divide", "eacute", "ecirc", "egrave", "eth", "euml", "frac12", "frac14", "frac34",
    "gt", "iacute", "icirc", "iexcl", "igrave", "iquest", "iuml", "laquo", "lt", "macr", "micro",
    "middot", "nbsp", "not", "ntilde", "oacute", "ocirc", "ograve", "ordf", "ordm", "oslash",
    "otilde", "ouml", "para", "plusmn", "pound", "quot", "raquo", "reg", "sect", "shy", "sup1",
    "sup2", "sup3", "szlig", "thorn", "times", "uacute", "ucirc", "ugrave", "uml", "uuml",
    "yacute", "yen", "yuml",
];

/// Longest run a named reference can span.
const MAX_NAME: usize = 32;

/// Decode HTML character references the way a browser reads text:
/// every HTML5 named reference, numeric references with or without `;`,
/// and the legacy names that may drop their `;`. Anything else stays as-is.
pub fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s!(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];

        let decoded = if after.starts_with('#') {
            decode_numeric(&after[1..]).map(|(ch, used)| (ch.to_string(), used + 1))
        } else {
            decode_named(after)
        };

        match decoded {
            Some((text, used)) => {
                out.push_str(&text);
                rest = &after[used..];
            }
            None => {
                out.push('&');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// `65;`, `x41`, ... → (char, bytes consumed). Out-of-range code points become U+FFFD.
fn decode_numeric(s: &str) -> Option<(char, usize)> {
    let (digits, radix, prefix) = match s.strip_prefix(|c| c == 'x' || c == 'X') {
        Some(hex) => (hex, 16, 1),
        None => (s, 10, 0),
    };
    let len = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if len == 0 {
        return None;
    }

    let code = u32::from_str_radix(&digits[..len], radix).unwrap_or(u32::MAX);
    let ch = match code {
        0 => '\u{fffd}',
        c => char::from_u32(c).unwrap_or('\u{fffd}'),
    };
    let semi = usize::from(digits[len..].starts_with(';'));
    Some((ch, prefix + len + semi))
}

/// `rsquo;`, `amp`, `ampx` → (decoded, bytes consumed).
fn decode_named(s: &str) -> Option<(String, usize)> {
    let name_len = s
        .char_indices()
        .take(MAX_NAME)
        .find(|&(_, c)| matches!(c, '\t' | '\n' | '\x0c' | ' ' | '<' | '&' | '#' | ';'))
        .map_or_else(|| s.char_indices().nth(MAX_NAME).map_or(s.len(), |(i, _)| i), |(i, _)| i);
    let name = &s[..name_len];
    if name.is_empty() {
        return None;
    }

    if s[name_len..].starts_with(';') {
        if let Some(text) = lookup(name) {
            return Some((text, name_len + 1));
        }
    }

    // no `;`: the longest legacy name that prefixes the run
    (2..=name.len())
        .rev()
        .filter(|&end| name.is_char_boundary(end))
        .find_map(|end| {
            let prefix = &name[..end];
            if !LEGACY_ENTITIES.contains(&prefix) {
                return None;
            }
            lookup(prefix).map(|text| (text, end))
        })
}

/// Resolve `&name;` against the full HTML5 table.
/// A whole reference expands to one or two code points; anything longer
/// only matched a prefix of `name`.
fn lookup(name: &str) -> Option<String> {
    let reference = format!("&{name};");
    match html_escape::decode_html_entities(&reference) {
        Cow::Owned(text) if text.chars().count() <= 2 => Some(text),
        _ => None,
    }
}

/// Decode and trim one text node; `None` when nothing visible is left.
pub fn clean_text_node(raw: &str) -> Option<String> {
    let decoded = decode_entities(raw);
    let trimmed = decoded.trim();
    if trimmed.is_empty() { None } else { Some(s!(trimmed)) }
}
