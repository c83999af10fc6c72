// src/core/html.rs
//! Tolerant, allocation-light HTML tag scanning.
//!
//! Not a parser: it walks tags in document order, matches same-name
//! open/close pairs by depth, and never fails on broken markup. Good enough
//! for saved app pages where the structure is known up front.

use super::sanitize::{clean_text_node, decode_entities};

/// Elements that never have a body.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Elements whose body is raw text, not markup.
const RAW_TEXT_TAGS: &[&str] = &["script", "style"];

pub fn to_lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagKind {
    Open,
    Close,
    /// Comments, doctype, processing instructions.
    Markup,
}

#[derive(Clone, Debug)]
pub struct Tag<'a> {
    pub kind: TagKind,
    /// Lower-cased tag name (empty for `Markup`).
    pub name: String,
    pub start: usize,
    /// Byte offset just past the closing `>`.
    pub end: usize,
    pub self_closing: bool,
    raw_attrs: &'a str,
}

impl<'a> Tag<'a> {
    pub fn is_open(&self, name: &str) -> bool {
        self.kind == TagKind::Open && self.name == name
    }

    pub fn is_close(&self, name: &str) -> bool {
        self.kind == TagKind::Close && self.name == name
    }

    fn has_body(&self) -> bool {
        self.kind == TagKind::Open
            && !self.self_closing
            && !VOID_TAGS.contains(&self.name.as_str())
    }

    /// All attributes as (lower-cased name, decoded value). Bare attributes get "".
    pub fn attrs(&self) -> Vec<(String, String)> {
        parse_attrs(self.raw_attrs)
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        self.attrs()
            .into_iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    fn classes(&self) -> Vec<String> {
        self.attr("class")
            .map(|c| c.split_ascii_whitespace().map(String::from).collect())
            .unwrap_or_default()
    }

    /// Exact class token match, e.g. `sticky` in `class="sticky top-0"`.
    pub fn has_class(&self, token: &str) -> bool {
        self.classes().iter().any(|c| c == token)
    }

    /// Substring match on any class token, e.g. `text-sm` hits `md:text-sm`.
    pub fn class_contains(&self, fragment: &str) -> bool {
        self.classes().iter().any(|c| c.contains(fragment))
    }
}

/// Iterator over every tag in `doc`, in document order.
/// Raw-text bodies (`<script>`, `<style>`) are stepped over.
pub struct Tags<'a> {
    doc: &'a str,
    pos: usize,
}

impl<'a> Tags<'a> {
    pub fn new(doc: &'a str, from: usize) -> Self {
        Self { doc, pos: from.min(doc.len()) }
    }
}

impl<'a> Iterator for Tags<'a> {
    type Item = Tag<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let b = self.doc.as_bytes();
        let n = b.len();

        while self.pos < n {
            let lt = self.pos + self.doc[self.pos..].find('<')?;

            let tag = match b.get(lt + 1) {
                Some(b'!') | Some(b'?') => Some(scan_markup(self.doc, lt)),
                Some(b'/') if b.get(lt + 2).is_some_and(|c| c.is_ascii_alphabetic()) => {
                    Some(scan_tag(self.doc, lt, TagKind::Close))
                }
                Some(c) if c.is_ascii_alphabetic() => Some(scan_tag(self.doc, lt, TagKind::Open)),
                _ => None,
            };

            let Some(tag) = tag else {
                // stray '<' in text
                self.pos = lt + 1;
                continue;
            };

            self.pos = tag.end;
            if tag.kind == TagKind::Open
                && !tag.self_closing
                && RAW_TEXT_TAGS.contains(&tag.name.as_str())
            {
                let close = join_close(&tag.name);
                self.pos = to_lower(&self.doc[tag.end..])
                    .find(&close)
                    .map(|i| tag.end + i)
                    .unwrap_or(n);
            }
            return Some(tag);
        }
        None
    }
}

fn join_close(name: &str) -> String {
    format!("</{name}")
}

/// `<!-- ... -->`, `<!DOCTYPE ...>`, `<?...?>`
fn scan_markup(doc: &str, lt: usize) -> Tag<'_> {
    let end = if doc[lt..].starts_with("<!--") {
        doc[lt + 4..].find("-->").map(|i| lt + 4 + i + 3)
    } else {
        doc[lt..].find('>').map(|i| lt + i + 1)
    }
    .unwrap_or(doc.len());

    Tag {
        kind: TagKind::Markup,
        name: s!(),
        start: lt,
        end,
        self_closing: true,
        raw_attrs: "",
    }
}

/// Scan one `<name ...>` or `</name ...>`; quotes may hide a `>`.
fn scan_tag(doc: &str, lt: usize, kind: TagKind) -> Tag<'_> {
    let b = doc.as_bytes();
    let n = b.len();
    let name_start = if kind == TagKind::Close { lt + 2 } else { lt + 1 };

    let mut i = name_start;
    while i < n && !(b[i].is_ascii_whitespace() || b[i] == b'>' || b[i] == b'/') {
        i += 1;
    }
    let name = to_lower(&doc[name_start..i]);
    let attrs_start = i;

    // A quote only opens a string where a value starts; `alt=coach's` is unquoted.
    let mut gt = None;
    while i < n {
        match b[i] {
            b'>' => {
                gt = Some(i);
                break;
            }
            b'=' => {
                i += 1;
                while i < n && b[i].is_ascii_whitespace() {
                    i += 1;
                }
                if i < n && (b[i] == b'"' || b[i] == b'\'') {
                    i = match doc[i + 1..].find(b[i] as char) {
                        Some(off) => i + off + 2,
                        None => n,
                    };
                }
            }
            _ => i += 1,
        }
    }

    let (attrs_end, end) = match gt {
        Some(g) => (g, g + 1),
        None => (n, n),
    };
    let raw = &doc[attrs_start..attrs_end];
    let self_closing = raw.trim_end().ends_with('/');

    Tag {
        kind,
        name,
        start: lt,
        end,
        self_closing,
        raw_attrs: raw,
    }
}

fn parse_attrs(raw: &str) -> Vec<(String, String)> {
    let b = raw.as_bytes();
    let n = b.len();
    let mut out = Vec::new();
    let mut i = 0usize;

    let skip_ws = |mut i: usize| {
        while i < n && (b[i].is_ascii_whitespace() || b[i] == b'/') {
            i += 1;
        }
        i
    };

    loop {
        i = skip_ws(i);
        if i >= n {
            break;
        }

        let name_start = i;
        while i < n && !(b[i].is_ascii_whitespace() || b[i] == b'=' || b[i] == b'/') {
            i += 1;
        }
        let name = to_lower(&raw[name_start..i]);

        let mut j = i;
        while j < n && b[j].is_ascii_whitespace() {
            j += 1;
        }

        if j < n && b[j] == b'=' {
            j += 1;
            while j < n && b[j].is_ascii_whitespace() {
                j += 1;
            }
            let value = match b.get(j) {
                Some(&q) if q == b'"' || q == b'\'' => {
                    let vs = j + 1;
                    let ve = raw[vs..].find(q as char).map(|e| vs + e).unwrap_or(n);
                    i = (ve + 1).min(n);
                    &raw[vs..ve]
                }
                _ => {
                    let vs = j;
                    let mut ve = j;
                    while ve < n && !b[ve].is_ascii_whitespace() {
                        ve += 1;
                    }
                    i = ve;
                    &raw[vs..ve]
                }
            };
            out.push((name, decode_entities(value)));
        } else {
            out.push((name, s!()));
        }
    }
    out
}

/// A matched element: its opening tag plus the span of its body.
#[derive(Clone, Debug)]
pub struct Element<'a> {
    doc: &'a str,
    pub tag: Tag<'a>,
    inner_end: usize,
    /// Byte offset just past the closing tag (or end of text if it was never closed).
    pub end: usize,
}

impl<'a> Element<'a> {
    pub fn inner(&self) -> &'a str {
        &self.doc[self.tag.end..self.inner_end]
    }

    pub fn outer(&self) -> &'a str {
        &self.doc[self.tag.start..self.end]
    }

    /// Stripped text of every visible text node, concatenated with no separator.
    pub fn text(&self) -> String {
        text_content(self.inner())
    }

    pub fn find(&self, name: &str, pred: impl Fn(&Tag) -> bool) -> Option<Element<'a>> {
        find_element(self.inner(), name, pred, 0)
    }

    pub fn find_all(&self, name: &str, pred: impl Fn(&Tag) -> bool) -> Vec<Element<'a>> {
        find_all(self.inner(), name, pred)
    }
}

/// Build the element whose opening tag is `open`, depth-matching same-name tags.
fn close_element<'a>(doc: &'a str, open: Tag<'a>) -> Element<'a> {
    if !open.has_body() {
        let end = open.end;
        return Element { doc, tag: open, inner_end: end, end };
    }

    let mut depth = 1usize;
    for t in Tags::new(doc, open.end) {
        if t.name != open.name {
            continue;
        }
        match t.kind {
            TagKind::Open if t.has_body() => depth += 1,
            TagKind::Close => {
                depth -= 1;
                if depth == 0 {
                    return Element { doc, tag: open, inner_end: t.start, end: t.end };
                }
            }
            _ => {}
        }
    }

    let n = doc.len();
    Element { doc, tag: open, inner_end: n, end: n }
}

/// First `<name ...>` at or after byte `from` whose tag satisfies `pred`.
pub fn find_element<'a>(
    doc: &'a str,
    name: &str,
    pred: impl Fn(&Tag) -> bool,
    from: usize,
) -> Option<Element<'a>> {
    let name = to_lower(name);
    let open = Tags::new(doc, from).find(|t| t.is_open(&name) && pred(t))?;
    Some(close_element(doc, open))
}

/// Every matching element in document order, nested ones included.
pub fn find_all<'a>(doc: &'a str, name: &str, pred: impl Fn(&Tag) -> bool) -> Vec<Element<'a>> {
    let name = to_lower(name);
    Tags::new(doc, 0)
        .filter(|t| t.is_open(&name) && pred(t))
        .map(|open| close_element(doc, open))
        .collect()
}

/// Visible text of a markup fragment: each text node decoded and trimmed,
/// empty nodes dropped, the rest concatenated. Script/style bodies and
/// comments never contribute.
pub fn text_content(fragment: &str) -> String {
    let mut out = s!();
    let mut pos = 0usize;
    let mut raw_body = false;

    for t in Tags::new(fragment, 0) {
        if !raw_body {
            if let Some(txt) = clean_text_node(&fragment[pos..t.start]) {
                out.push_str(&txt);
            }
        }
        raw_body = t.kind == TagKind::Open
            && !t.self_closing
            && RAW_TEXT_TAGS.contains(&t.name.as_str());
        pos = t.end;
    }
    if !raw_body {
        if let Some(txt) = clean_text_node(&fragment[pos.min(fragment.len())..]) {
            out.push_str(&txt);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn any(_: &Tag) -> bool {
        true
    }

    #[test]
    fn tags_skip_comments_and_stray_lt() {
        let doc = "<!-- <p>no</p> --><p>a < b</p>";
        let names: Vec<_> = Tags::new(doc, 0)
            .filter(|t| t.kind != TagKind::Markup)
            .map(|t| (t.kind, t.name))
            .collect();
        assert_eq!(names, vec![(TagKind::Open, s!("p")), (TagKind::Close, s!("p"))]);
    }

    #[test]
    fn quoted_gt_does_not_end_tag() {
        let doc = r#"<input data-x="a>b" type=color style='rgb(1, 2, 3)'>"#;
        let t = Tags::new(doc, 0).next().unwrap();
        assert_eq!(t.end, doc.len());
        assert_eq!(t.attr("type").as_deref(), Some("color"));
        assert_eq!(t.attr("data-x").as_deref(), Some("a>b"));
        assert_eq!(t.attr("style").as_deref(), Some("rgb(1, 2, 3)"));
    }

    #[test]
    fn apostrophe_in_unquoted_value_is_literal() {
        let doc = "<img alt=coach's src=x.png><p>after</p>";
        let t = Tags::new(doc, 0).next().unwrap();
        assert_eq!(&doc[t.start..t.end], "<img alt=coach's src=x.png>");
        assert_eq!(t.attr("alt").as_deref(), Some("coach's"));
        assert_eq!(find_element(doc, "p", any, 0).unwrap().text(), "after");
    }

    #[test]
    fn bare_attributes_and_case() {
        let doc = r#"<INPUT Disabled CLASS="A b">"#;
        let t = Tags::new(doc, 0).next().unwrap();
        assert_eq!(t.name, "input");
        assert_eq!(t.attr("disabled").as_deref(), Some(""));
        assert!(t.has_class("A"));
        assert!(!t.has_class("a"));
    }

    #[test]
    fn class_token_vs_fragment() {
        let doc = r#"<p class="font-bold md:text-sm-tight">x</p>"#;
        let el = find_element(doc, "p", any, 0).unwrap();
        assert!(el.tag.class_contains("text-sm"));
        assert!(!el.tag.has_class("text-sm"));
    }

    #[test]
    fn nested_same_name_elements_are_depth_matched() {
        let doc = "<ul><li>a<ul><li>b</li></ul></li><li>c</li></ul>";
        let outer = find_element(doc, "ul", any, 0).unwrap();
        assert_eq!(outer.outer(), doc);

        let items = outer.find_all("li", any);
        let texts: Vec<_> = items.iter().map(|e| e.text()).collect();
        assert_eq!(texts, vec!["ab", "b", "c"]);
    }

    #[test]
    fn unclosed_element_runs_to_end() {
        let doc = "<main><h3>Hinge";
        let main = find_element(doc, "main", any, 0).unwrap();
        assert_eq!(main.inner(), "<h3>Hinge");
        assert_eq!(main.find("h3", any).unwrap().text(), "Hinge");
    }

    #[test]
    fn void_and_self_closing_have_no_body() {
        let doc = "<li><input type=color><br/><p>x</p></li>";
        let input = find_element(doc, "input", any, 0).unwrap();
        assert_eq!(input.inner(), "");
        let li = find_element(doc, "li", any, 0).unwrap();
        assert_eq!(li.text(), "x");
    }

    #[test]
    fn text_joins_stripped_nodes() {
        assert_eq!(text_content("  Curl <b> -EZ </b>Bar  "), "Curl-EZBar");
        assert_eq!(text_content("Curl  -  EZ Bar"), "Curl  -  EZ Bar");
        assert_eq!(text_content("A &amp; B"), "A & B");
        assert_eq!(text_content("x<script>var a = '<p>';</script>y<!-- z -->"), "xy");
    }

    #[test]
    fn find_element_from_offset() {
        let doc = "<p>a</p><p>b</p>";
        let first = find_element(doc, "p", any, 0).unwrap();
        let second = find_element(doc, "p", any, first.end).unwrap();
        assert_eq!(second.text(), "b");
    }
}
