//! Restores concatenation signs lost to URL decoding.
//!
//! A `+` in a query string decodes to a space, so `first+last` arrives as
//! `first last`. Outside quotes, a whitespace run that starts with a space
//! and sits between the end of one operand and the start of the next is
//! rewritten to ` + `.

use tracing::trace;

#[derive(Debug, Default)]
struct Quotes {
    single: bool,
    double: bool,
}

impl Quotes {
    fn toggle(&mut self, quote: char) {
        match quote {
            '\'' if !self.double => self.single = !self.single,
            '"' if !self.single => self.double = !self.double,
            _ => {}
        }
    }

    fn open(&self) -> bool {
        self.single || self.double
    }
}

pub fn normalize(expression: &str) -> String {
    let chars: Vec<char> = expression.chars().collect();
    let mut out = String::with_capacity(expression.len() + 8);
    let mut quotes = Quotes::default();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\'' | '"' => quotes.toggle(c),
            ' ' if !quotes.open() && implied_plus(&chars, i) => {
                out.push_str(" + ");
                i = skip_whitespace(&chars, i);
                continue;
            }
            _ => {}
        }
        out.push(c);
        i += 1;
    }

    trace!(before = expression, after = %out, "normalized expression");
    out
}

fn implied_plus(chars: &[char], at: usize) -> bool {
    let before = chars[..at].iter().rev().find(|c| !c.is_whitespace());
    let after = chars[at + 1..].iter().find(|c| !c.is_whitespace());
    matches!(
        (before, after),
        (Some(&b), Some(&a)) if ends_operand(b) && starts_operand(a)
    )
}

fn ends_operand(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, ')' | '\'' | '"')
}

fn starts_operand(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '(' | '\'' | '"')
}

fn skip_whitespace(chars: &[char], from: usize) -> usize {
    chars[from..]
        .iter()
        .position(|c| !c.is_whitespace())
        .map_or(chars.len(), |offset| from + offset)
}
