use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email pattern")
});

/// Whether `text`, ignoring surrounding whitespace, looks like an address.
pub fn is_valid(text: &str) -> bool {
    EMAIL.is_match(text.trim())
}

#[cfg(test)]
mod tests {
    use super::is_valid;

    #[test]
    fn test_valid_addresses() {
        for text in ["j.doe@example.com", " ada+tag@mail.example.co.uk ", "x_1%@a-b.io"] {
            assert!(is_valid(text), "{text}");
        }
    }

    #[test]
    fn test_invalid_addresses() {
        for text in ["", "doe", "doe@", "@example.com", "j doe@example.com", "j@example.c", "j@example"] {
            assert!(!is_valid(text), "{text}");
        }
    }
}
