/// Escape HTML special characters
pub fn escape_html(text: &str) -> String {
    text.replace("&", "&amp;")
        .replace("<", "&lt;")
        .replace(">", "&gt;")
        .replace("\"", "&quot;")
        .replace("'", "&#39;")
}

/// Escape HTML attribute values
pub fn escape_attr(text: &str) -> String {
    escape_html(text)
}

/// Extract a named field from an `application/x-www-form-urlencoded`
/// request body. A missing field is an empty value, not an error.
pub fn form_value(raw: &[u8], name: &str) -> Vec<u8> {
    for pair in raw.split(|&b| b == b'&') {
        let mut parts = pair.splitn(2, |&b| b == b'=');
        let key = parts.next().unwrap_or(&[]);
        let value = parts.next().unwrap_or(&[]);
        if percent_decode(key) == name.as_bytes() {
            return percent_decode(value);
        }
    }
    Vec::new()
}

/// Decode percent-escapes and `+` from a form-encoded component.
/// Malformed escapes pass through verbatim rather than failing.
fn percent_decode(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;
    while i < input.len() {
        match input[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                if let (Some(hi), Some(lo)) = (
                    input.get(i + 1).copied().and_then(hex_val),
                    input.get(i + 2).copied().and_then(hex_val),
                ) {
                    out.push(hi << 4 | lo);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    out
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_html_metacharacters() {
        assert_eq!(
            escape_html("<b>\"a\" & 'b'</b>"),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn extracts_named_form_field() {
        assert_eq!(form_value(b"body=hello", "body"), b"hello");
        assert_eq!(form_value(b"a=1&body=hello&c=3", "body"), b"hello");
    }

    #[test]
    fn missing_field_is_empty() {
        assert_eq!(form_value(b"other=x", "body"), b"");
        assert_eq!(form_value(b"", "body"), b"");
    }

    #[test]
    fn empty_value_is_empty() {
        assert_eq!(form_value(b"body=", "body"), b"");
        assert_eq!(form_value(b"body=&a=1", "body"), b"");
    }

    #[test]
    fn decodes_spaces_and_escapes() {
        assert_eq!(form_value(b"body=hello+world", "body"), b"hello world");
        assert_eq!(form_value(b"body=hello%20world", "body"), b"hello world");
        assert_eq!(form_value(b"body=a%26b%3Dc", "body"), b"a&b=c");
        assert_eq!(form_value(b"body=100%25", "body"), b"100%");
    }

    #[test]
    fn malformed_escape_passes_through() {
        assert_eq!(form_value(b"body=50%", "body"), b"50%");
        assert_eq!(form_value(b"body=%zz", "body"), b"%zz");
    }

    #[test]
    fn decodes_multibyte_utf8() {
        assert_eq!(
            form_value(b"body=caf%C3%A9", "body"),
            "café".as_bytes()
        );
    }
}
