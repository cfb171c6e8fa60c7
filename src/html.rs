//! HTML-to-visible-text extraction.
//!
//! A tolerant scanner, not a conforming parser: tags and comments are
//! stripped, `script`/`style`/`noscript` content is dropped wholesale, and
//! common character entities are decoded. Malformed markup never produces an
//! error — extraction is best-effort and the worst outcome is lost text.
//!
//! Every stripped construct is replaced by a single space so markup
//! boundaries never glue two words together.

/// Elements whose text content is never visible.
const RAW_TEXT_ELEMENTS: [&str; 3] = ["script", "style", "noscript"];

/// Extract the visible text of an HTML document.
pub fn visible_text(html: &str) -> String {
    let bytes = html.as_bytes();
    let mut out = String::with_capacity(html.len() / 4);
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' if starts_tag(bytes, i) => {
                if html[i..].starts_with("<!--") {
                    i = skip_comment(html, i);
                } else if let Some(name) = raw_element_at(html, i) {
                    i = skip_raw_element(html, i, name);
                } else {
                    i = skip_tag(bytes, i);
                }
                out.push(' ');
            }
            b'&' => {
                let (decoded, consumed) = decode_entity(&html[i..]);
                match decoded {
                    Some(c) => out.push(c),
                    None => out.push('&'),
                }
                i += consumed;
            }
            _ => {
                // A stray '<' not opening a tag falls through here as text.
                match html[i..].chars().next() {
                    Some(c) => {
                        out.push(c);
                        i += c.len_utf8();
                    }
                    None => break,
                }
            }
        }
    }

    out
}

/// A '<' opens a tag only when followed by a name, a close slash, or a
/// declaration/processing-instruction marker. Anything else is literal text.
fn starts_tag(bytes: &[u8], lt: usize) -> bool {
    match bytes.get(lt + 1) {
        Some(b) => b.is_ascii_alphabetic() || *b == b'/' || *b == b'!' || *b == b'?',
        None => false,
    }
}

/// Skip from `<` past the closing `>`, honoring quoted attribute values so a
/// `>` inside an attribute does not end the tag. An unterminated tag runs to
/// end of input.
fn skip_tag(bytes: &[u8], lt: usize) -> usize {
    let mut i = lt + 1;
    let mut quote: Option<u8> = None;
    while i < bytes.len() {
        match (quote, bytes[i]) {
            (Some(q), b) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"') => quote = Some(b'"'),
            (None, b'\'') => quote = Some(b'\''),
            (None, b'>') => return i + 1,
            (None, _) => {}
        }
        i += 1;
    }
    bytes.len()
}

/// Skip a `<!-- ... -->` comment. Unterminated comments run to end of input.
fn skip_comment(html: &str, lt: usize) -> usize {
    match html[lt + 4..].find("-->") {
        Some(pos) => lt + 4 + pos + 3,
        None => html.len(),
    }
}

/// If the tag opening at `lt` is a raw-text element, return its name.
fn raw_element_at(html: &str, lt: usize) -> Option<&'static str> {
    // Byte-wise comparison: slicing the &str here could land mid-character
    // on markup like `<stylé>`.
    let rest = &html.as_bytes()[lt + 1..];
    for name in RAW_TEXT_ELEMENTS {
        let n = name.as_bytes();
        if rest.len() >= n.len() && rest[..n.len()].eq_ignore_ascii_case(n) {
            // The name must end here: "<scripted>" is not "<script>".
            match rest.get(n.len()) {
                Some(b) if b.is_ascii_whitespace() || *b == b'>' || *b == b'/' => return Some(name),
                None => return Some(name),
                _ => {}
            }
        }
    }
    None
}

/// Skip a raw-text element from its opening `<` past its closing tag's `>`.
/// An unterminated element swallows the rest of the input, matching how
/// browsers treat an unclosed `<script>`.
fn skip_raw_element(html: &str, lt: usize, name: &str) -> usize {
    let open_end = skip_tag(html.as_bytes(), lt);
    let closing = format!("</{}", name);
    match find_ignore_ascii_case(&html[open_end..], &closing) {
        Some(pos) => skip_tag(html.as_bytes(), open_end + pos),
        None => html.len(),
    }
}

fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    (0..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

/// Decode one character entity at the start of `s` (which begins with `&`).
/// Returns the decoded character and the bytes consumed; an unrecognized or
/// unterminated entity decodes to nothing and consumes only the ampersand.
fn decode_entity(s: &str) -> (Option<char>, usize) {
    // Entities are short; a ';' further away than this is unrelated markup.
    const MAX_ENTITY_LEN: usize = 32;

    let semi = match s[1..].find(';') {
        Some(pos) if pos < MAX_ENTITY_LEN => pos,
        _ => return (None, 1),
    };
    let body = &s[1..1 + semi];
    let consumed = semi + 2;

    let decoded = match body {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => body.strip_prefix('#').and_then(|num| {
            let code = match num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
                Some(hex) => u32::from_str_radix(hex, 16).ok(),
                None => num.parse::<u32>().ok(),
            };
            code.and_then(char::from_u32)
        }),
    };

    match decoded {
        Some(c) => (Some(c), consumed),
        None => (None, 1),
    }
}
