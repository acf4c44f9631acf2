/// Find the `}` that closes the `{` at `open`.
///
/// Braces inside single or double quoted strings are ignored, and a quote
/// only closes its string when it is not preceded by a backslash. Returns
/// `None` when `open` is not a `{` or the text ends before the block closes.
pub fn find_matching_brace(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.get(open) != Some(&b'{') {
        return None;
    }

    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut i = open;

    while i < bytes.len() {
        let c = bytes[i];
        match quote {
            Some(q) => {
                if c == b'\\' {
                    // skip the escaped byte
                    i += 1;
                } else if c == q {
                    quote = None;
                }
            }
            None => match c {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i);
                    }
                }
                b'"' | b'\'' => quote = Some(c),
                _ => {}
            },
        }
        i += 1;
    }
    None
}

/// Find the `;` that ends a block-less at-rule such as `@import url(...);`.
///
/// Semicolons inside quotes or parentheses are skipped. Returns `None` when
/// a top-level `{` comes first or the text ends without a `;`.
pub fn find_statement_end(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut parens = 0usize;
    let mut quote: Option<u8> = None;
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        match quote {
            Some(q) => {
                if c == b'\\' {
                    i += 1;
                } else if c == q {
                    quote = None;
                }
            }
            None => match c {
                b'"' | b'\'' => quote = Some(c),
                b'(' => parens += 1,
                b')' => parens = parens.saturating_sub(1),
                b';' if parens == 0 => return Some(i),
                b'{' if parens == 0 => return None,
                _ => {}
            },
        }
        i += 1;
    }
    None
}
