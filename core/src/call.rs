use serde::Serialize;

use crate::scan::{identifier_before, in_string_at};

/// The call enclosing a cursor, as found by [`locate_call`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CallContext {
    pub function_name: Option<String>,
    /// Commas seen at nesting depth 0 between the opening paren and the cursor.
    pub active_parameter: usize,
}

impl CallContext {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_call(&self) -> bool {
        self.function_name.is_some()
    }
}

/// Find the innermost unclosed call around `offset` (the character just
/// before the cursor) by scanning backward.
///
/// Parentheses inside string literals are ignored, nested calls are skipped
/// by depth counting, and the scan gives up at the previous `;` outside a
/// string. A `(` with no identifier in front of it (a grouping paren) does
/// not stop the scan; the comma count carries on to the next candidate.
pub fn locate_call(text: &str, offset: usize) -> CallContext {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return CallContext::none();
    }

    let mut idx = offset.min(bytes.len() - 1);
    let mut in_string = in_string_at(text, idx);
    let mut nest_level = 0usize;
    let mut param_num = 0usize;

    loop {
        let b = bytes[idx];
        if in_string {
            if (b == b'"' && (idx == 0 || bytes[idx - 1] != b'\\')) || b == b'\n' {
                in_string = false;
            }
        } else {
            match b {
                b';' => break,
                b'"' => in_string = true,
                b'(' if nest_level == 0 => {
                    let name = idx.checked_sub(1).and_then(|prev| identifier_before(text, prev));
                    if let Some(name) = name {
                        return CallContext {
                            function_name: Some(name.to_string()),
                            active_parameter: param_num,
                        };
                    }
                }
                b'(' => nest_level -= 1,
                b')' => nest_level += 1,
                b',' if nest_level == 0 => param_num += 1,
                _ => {}
            }
        }

        if idx == 0 {
            break;
        }
        idx -= 1;
    }

    CallContext::none()
}

/// [`locate_call`] for a cursor position; a cursor at the very start of the
/// document has no character before it and never sits in a call.
pub fn locate_call_at_cursor(text: &str, cursor: usize) -> CallContext {
    match cursor.checked_sub(1) {
        Some(offset) => locate_call(text, offset),
        None => CallContext::none(),
    }
}
