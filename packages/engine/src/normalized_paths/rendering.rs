//! Bracketed and JSON Pointer renderings of normalized paths

use std::fmt::{self, Write};

use serde::{Serialize, Serializer};

use super::types::{NormalizedPath, PathElement};

/// Write a member name with RFC 9535 section 2.7 escaping
fn write_escaped_name(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    f.write_char('\'')?;
    for c in name.chars() {
        match c {
            '\u{8}' => f.write_str(r"\b")?,
            '\u{c}' => f.write_str(r"\f")?,
            '\n' => f.write_str(r"\n")?,
            '\r' => f.write_str(r"\r")?,
            '\t' => f.write_str(r"\t")?,
            '\'' => f.write_str(r"\'")?,
            '\\' => f.write_str(r"\\")?,
            c if u32::from(c) < 0x20 => write!(f, "\\u{:04x}", u32::from(c))?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('\'')
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "[{index}]"),
            Self::Name(name) => {
                f.write_char('[')?;
                write_escaped_name(f, name)?;
                f.write_char(']')
            }
        }
    }
}

/// `$['store']['book'][0]`
impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('$')?;
        self.elements()
            .iter()
            .try_for_each(|element| write!(f, "{element}"))
    }
}

impl NormalizedPath {
    /// RFC 6901 JSON Pointer for the same location; the root is `""`
    #[must_use]
    pub fn to_json_pointer(&self) -> String {
        let mut pointer = String::new();
        for element in self.elements() {
            pointer.push('/');
            match element {
                PathElement::Index(index) => pointer.push_str(&index.to_string()),
                PathElement::Name(name) => {
                    pointer.push_str(&name.replace('~', "~0").replace('/', "~1"));
                }
            }
        }
        pointer
    }
}

impl Serialize for NormalizedPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
