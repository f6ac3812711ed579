// src/core/html.rs
//
// Just enough HTML handling for the qualifying pages: pull out an
// element's inner span and strip what's left. Tag matching is ASCII
// case-insensitive; nesting of the same tag is not handled (the slot
// tables never nest tr/td).

/// Case-insensitive substring search, ASCII only.
fn find_ci(s: &str, pat: &str, from: usize) -> Option<usize> {
    let hay = s.as_bytes();
    let pat = pat.as_bytes();
    if pat.is_empty() || from > hay.len() {
        return None;
    }
    hay[from..]
        .windows(pat.len())
        .position(|w| w.eq_ignore_ascii_case(pat))
        .map(|p| p + from)
}

/// Inner span of the next `<tag ...>…</tag>` element at or after `from`,
/// plus the offset just past its close tag (for walking repeated
/// elements like table rows). Attributes on the open tag are skipped.
pub fn element_inner<'a>(s: &'a str, tag: &str, from: usize) -> Option<(&'a str, usize)> {
    let open = format!("<{tag}");
    let close = format!("</{tag}>");

    let start = find_ci(s, &open, from)?;
    let body = s[start..].find('>')? + start + 1;
    let end = find_ci(s, &close, body)?;
    Some((&s[body..end], end + close.len()))
}

/// Drop every tag, keep the text, collapse the whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let mut out = String::new();
    let mut rest = s.as_ref();

    while let Some(lt) = rest.find('<') {
        out.push_str(&rest[..lt]);
        match rest[lt..].find('>') {
            Some(gt) => rest = &rest[lt + gt + 1..],
            None => rest = "", // unterminated tag swallows the remainder
        }
    }
    out.push_str(rest);

    super::sanitize::normalize_ws(&out)
}
