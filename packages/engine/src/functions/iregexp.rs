//! I-Regexp (RFC 9485) to `regex` crate syntax
//!
//! I-Regexp is close to a subset of the `regex` dialect. The differences
//! handled here:
//! - `.` never matches `\n` or `\r`
//! - `^` and `$` are ordinary characters
//! - inside a class, `&`, `~` and `[` carry no set-operation meaning

/// Translate an I-Regexp pattern
///
/// With `anchored`, the result matches only the whole input.
#[must_use]
pub fn translate(pattern: &str, anchored: bool) -> String {
    let mut out = String::with_capacity(pattern.len() + 12);
    if anchored {
        out.push_str(r"\A(?:");
    }

    let mut in_class = false;
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push('\\');
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            '[' if in_class => out.push_str(r"\["),
            '[' => {
                in_class = true;
                out.push('[');
            }
            ']' if in_class => {
                in_class = false;
                out.push(']');
            }
            '&' | '~' if in_class => {
                out.push('\\');
                out.push(c);
            }
            '.' if !in_class => out.push_str(r"[^\n\r]"),
            '^' | '$' if !in_class => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }

    if anchored {
        out.push_str(r")\z");
    }
    out
}
