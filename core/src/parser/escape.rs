/// Resolve backslash escapes in the body of a quoted literal.
///
/// Handles `\n \t \r \b \f \\ \' \"` and `\uXXXX`. Anything else, including
/// a malformed `\u`, is kept verbatim.
pub fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('u') => {
                let hex: String = chars.clone().skip(1).take(4).collect();
                match decode_unicode(&hex) {
                    Some(decoded) => {
                        out.push(decoded);
                        // Skip the 'u' and four hex digits.
                        for _ in 0..5 {
                            chars.next();
                        }
                    }
                    None => out.push('\\'),
                }
                continue;
            }
            _ => {
                out.push('\\');
                continue;
            }
        }
        chars.next();
    }
    out
}

fn decode_unicode(hex: &str) -> Option<char> {
    if hex.len() != 4 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

#[cfg(test)]
mod tests {
    use super::unescape;

    #[test]
    fn test_simple_escapes() {
        assert_eq!(unescape(r"a\n\t\\"), "a\n\t\\");
        assert_eq!(unescape(r#"say \"hi\""#), "say \"hi\"");
    }

    #[test]
    fn test_unicode_escape() {
        assert_eq!(unescape(r"\u0041bc"), "Abc");
        assert_eq!(unescape(r"caf\u00e9"), "café");
    }

    #[test]
    fn test_unknown_and_malformed_escapes_are_kept() {
        assert_eq!(unescape(r"\q"), r"\q");
        assert_eq!(unescape(r"\u12"), r"\u12");
        assert_eq!(unescape(r"end\"), r"end\");
        assert_eq!(unescape(r"\uD800"), r"\uD800");
    }
}
