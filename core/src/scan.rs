//! Character-level scanning primitives shared by hover and signature help.
//!
//! Everything here works on byte offsets into UTF-8 text. The characters the
//! scanners care about (quotes, parentheses, identifier characters) are all
//! ASCII, so a byte never matches unless it is the whole character and any
//! span returned starts and ends on a char boundary.

#[inline]
pub fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[inline]
fn is_escaped(bytes: &[u8], idx: usize) -> bool {
    idx > 0 && bytes[idx - 1] == b'\\'
}

/// Count unescaped `"` between the start of the line containing `offset` and
/// `offset` itself (inclusive).
///
/// An odd count means `offset` sits inside a string literal. The count never
/// looks past a `\n`, so string state does not carry across lines.
pub fn quote_count(text: &str, offset: usize) -> usize {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return 0;
    }
    let mut idx = offset.min(bytes.len() - 1);
    let mut count = 0;
    loop {
        match bytes[idx] {
            b'\n' => break,
            b'"' if !is_escaped(bytes, idx) => count += 1,
            _ => {}
        }
        if idx == 0 {
            break;
        }
        idx -= 1;
    }
    count
}

/// Whether `offset` lies inside a string literal on its line.
pub fn in_string_at(text: &str, offset: usize) -> bool {
    quote_count(text, offset) % 2 == 1
}

/// Maximal identifier touching `offset`.
///
/// The span grows left from `offset` (inclusive) and right from `offset + 1`,
/// so when `offset` is a separator the identifier starting just after it is
/// returned. Empty when neither side has identifier characters.
pub fn identifier_at(text: &str, offset: usize) -> &str {
    identifier_around(text, offset.saturating_add(1))
}

/// Maximal identifier around a boundary position (between two bytes).
pub(crate) fn identifier_around(text: &str, boundary: usize) -> &str {
    let bytes = text.as_bytes();
    let boundary = boundary.min(bytes.len());
    let mut start = boundary;
    while start > 0 && is_ident_byte(bytes[start - 1]) {
        start -= 1;
    }
    let mut end = boundary;
    while end < bytes.len() && is_ident_byte(bytes[end]) {
        end += 1;
    }
    // `boundary` may fall inside a multi-byte character
    if start == end {
        return "";
    }
    &text[start..end]
}

/// Read the identifier that ends at or before `offset`, walking backward.
///
/// One run of whitespace directly at `offset` is skipped first, then one run
/// of identifier characters is taken. Anything else stops the walk, so in
/// `int foo (` scanning from before the paren yields `foo`, never `int`.
pub fn identifier_before(text: &str, offset: usize) -> Option<&str> {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    let mut idx = offset.min(bytes.len() - 1) as isize;
    let mut right = idx + 1;
    let mut left: Option<isize> = None;

    while idx >= 0 {
        let b = bytes[idx as usize];
        if b.is_ascii_whitespace() {
            if left.is_some() {
                break;
            }
            right = idx;
        } else if is_ident_byte(b) {
            left = Some(idx);
        } else {
            break;
        }
        idx -= 1;
    }

    left.map(|l| &text[l as usize..right as usize])
}
