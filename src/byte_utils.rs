//! Utilities for working [u8]

use std::fmt::Write;

/// Render bytes for logs and fuzzer reports.
///
/// Printable ASCII passes through, everything else is escaped the way a
/// Rust byte string literal would be.
pub fn as_bstr(input: &[u8]) -> String {
    let mut result = String::with_capacity(input.len());

    for &e in input {
        match e {
            b'\n' => result.push_str("\\n"),
            b'\r' => result.push_str("\\r"),
            b'\t' => result.push_str("\\t"),
            b'\0' => result.push_str("\\0"),
            b'"' => result.push_str("\\\""),
            b'\\' => result.push_str("\\\\"),
            c if c == b' ' || c.is_ascii_graphic() => result.push(c as char),
            // Writing to a String can not fail
            _ => {
                let _ = write!(result, "\\x{e:02x}");
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::as_bstr;

    #[test]
    fn test_as_bstr() {
        assert_eq!(as_bstr(b"\n\r").len(), 4);
        assert_eq!(as_bstr(b"a\" '"), "a\\\" '");
        assert_eq!(as_bstr(b"abc def"), "abc def");
        assert_eq!(as_bstr(b">>[+-,.]<<!"), ">>[+-,.]<<!");
        assert_eq!(as_bstr(b"ab\x03c"), "ab\\x03c");
        assert_eq!(as_bstr(b"\\a\t"), "\\\\a\\t");
        assert_eq!(as_bstr(b"ab\r\nc"), "ab\\r\\nc");
        assert_eq!(as_bstr(&[0, 255]), "\\0\\xff");
    }
}
