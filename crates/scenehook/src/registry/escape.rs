//! Escaping of script bodies for single-line listing records
//!
//! Listing renders every script as a quote-delimited record on one line, so
//! control characters in the body are escaped:
//!
//! | input | output |
//! | ----- | ------ |
//! | `\`   | `\\`   |
//! | `=`   | `\"`   |
//! | LF    | `\n`   |
//! | TAB   | `\t`   |
//! | CR    | `\r`   |
//!
//! The `=` row is a historical mapping that scripts parsing the listing rely
//! on. It is kept as is; [`unescape`] reverses it.

/// Escape a script body for a listing record
pub fn escape(body: &str) -> String {
    let mut escaped = String::with_capacity(body.len());
    for c in body.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '=' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Reverse [`escape`]
///
/// Unknown escape sequences and a trailing lone backslash are kept verbatim.
pub fn unescape(escaped: &str) -> String {
    let mut body = String::with_capacity(escaped.len());
    let mut chars = escaped.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            body.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => body.push('\\'),
            Some('"') => body.push('='),
            Some('n') => body.push('\n'),
            Some('t') => body.push('\t'),
            Some('r') => body.push('\r'),
            Some(other) => {
                body.push('\\');
                body.push(other);
            }
            None => body.push('\\'),
        }
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_control_characters() {
        assert_eq!(escape("a\\b"), "a\\\\b");
        assert_eq!(escape("line1\nline2"), "line1\\nline2");
        assert_eq!(escape("a\tb\r"), "a\\tb\\r");
    }

    #[test]
    fn test_equals_maps_to_escaped_quote() {
        assert_eq!(escape("$x = 1;"), "$x \\\" 1;");
        assert_eq!(unescape("$x \\\" 1;"), "$x = 1;");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape("print('saved')"), "print('saved')");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_double_quote_not_escaped() {
        assert_eq!(escape("say \"hi\""), "say \"hi\"");
    }

    #[test]
    fn test_unescape_lenient() {
        assert_eq!(unescape("a\\qb"), "a\\qb");
        assert_eq!(unescape("trailing\\"), "trailing\\");
    }

    #[test]
    fn test_round_trip() {
        let body = "if (`file -q -ex $f`) {\n\tprint \"C:\\\\tmp\";\r\n}";
        assert_eq!(unescape(&escape(body)), body);
    }
}
