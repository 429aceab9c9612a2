//! `date(format, value)`: parse text with a locale-invariant date pattern
//! and render it as canonical ISO-8601.
//!
//! Pattern letters follow the familiar `yyyy-MM-dd'T'HH:mm:ss` convention
//! and are translated into a chrono format string before parsing:
//!
//! | Letters | Field | Letters | Field |
//! |---------|-------|---------|-------|
//! | `yyyy` `uuuu` | year | `yy` | two-digit year |
//! | `M` `MM` | month number | `MMM` / `MMMM` | month name |
//! | `d` `dd` | day of month | `EEE` / `EEEE` | weekday name |
//! | `H` `HH` | hour 0-23 | `h` `hh` + `a` | hour 1-12, AM/PM |
//! | `mm` | minute | `ss` | second |
//! | `SSS` `SSSSSS` `SSSSSSSSS` | fraction | `X` `XXX` | offset or `Z` |
//! | `x` `Z` | numeric offset | `'...'` | literal, `''` is a quote |

use chrono::format::{Parsed, StrftimeItems, parse};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use tracing::trace;

use crate::evaluator::{Arg, EvalError};
use crate::values::Value;

use super::{ArgContract, FunctionProvider};

pub struct DateProvider;

impl FunctionProvider for DateProvider {
    fn name(&self) -> &'static str {
        "date"
    }

    fn contract(&self) -> ArgContract {
        ArgContract::exact(2)
    }

    fn call(&self, args: &[Arg<'_>]) -> Result<Value, EvalError> {
        let format = args[0].eval()?;
        let value = args[1].eval()?;
        let format = format.first_or_empty();
        let value = value.first_or_empty();

        let fail = |reason: String| EvalError::InvalidDateFormat {
            pattern: format.to_string(),
            value: value.to_string(),
            reason,
        };
        if format.trim().is_empty() {
            return Err(fail("date(format, value): format must be a non-empty string".into()));
        }
        if value.trim().is_empty() {
            return Err(fail("date(format, value): value must be a non-empty string".into()));
        }

        let strftime = translate(&format).map_err(fail)?;
        trace!(pattern = %format, strftime = %strftime, "translated date pattern");
        let iso = parse_iso(&strftime, &value).map_err(fail)?;
        Ok(Value::DateTime(iso))
    }
}

// ============================================================================
// Pattern translation
// ============================================================================

/// Translate a date pattern into a chrono strftime string.
pub(crate) fn translate(pattern: &str) -> Result<String, String> {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                if chars.next_if_eq(&'\'').is_some() {
                    out.push('\'');
                    continue;
                }
                let mut closed = false;
                while let Some(c) = chars.next() {
                    if c == '\'' {
                        if chars.next_if_eq(&'\'').is_some() {
                            out.push('\'');
                            continue;
                        }
                        closed = true;
                        break;
                    }
                    push_literal(&mut out, c);
                }
                if !closed {
                    return Err(format!("Pattern ends inside a quoted literal: {pattern}"));
                }
            }
            c if c.is_ascii_alphabetic() => {
                let mut width = 1;
                while chars.next_if_eq(&c).is_some() {
                    width += 1;
                }
                out.push_str(field(c, width)?);
            }
            '[' | ']' | '{' | '}' | '#' => {
                return Err(format!("Pattern character '{c}' is reserved"));
            }
            c => push_literal(&mut out, c),
        }
    }
    Ok(out)
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

fn field(letter: char, width: usize) -> Result<&'static str, String> {
    Ok(match (letter, width) {
        ('y' | 'u', 2) => "%y",
        ('y' | 'u', _) => "%Y",
        ('M', 1 | 2) => "%m",
        ('M', 3) => "%b",
        ('M', 4) => "%B",
        ('d', 1 | 2) => "%d",
        ('H', 1 | 2) => "%H",
        ('h', 1 | 2) => "%I",
        ('m', 1 | 2) => "%M",
        ('s', 1 | 2) => "%S",
        ('S', 1..=3) => "%3f",
        ('S', 4..=6) => "%6f",
        ('S', 7..=9) => "%9f",
        ('a', 1) => "%p",
        ('E', 1..=3) => "%a",
        ('E', 4) => "%A",
        ('X', 1..=3) => "%#z",
        ('x' | 'Z', 1..=3) => "%z",
        _ => {
            let run: String = core::iter::repeat_n(letter, width).collect();
            return Err(format!("Unknown pattern letters: {run}"));
        }
    })
}

// ============================================================================
// Parsing and ISO rendering
// ============================================================================

/// Parse `value` and render the most specific form the parsed fields
/// support: offset date-time, then local date-time, then date.
fn parse_iso(strftime: &str, value: &str) -> Result<String, String> {
    let mut parsed = Parsed::new();
    parse(&mut parsed, value, StrftimeItems::new(strftime)).map_err(|e| e.to_string())?;

    if parsed.hour_mod_12().is_some() && parsed.minute().is_none() {
        parsed.set_minute(0).map_err(|e| e.to_string())?;
    }

    if parsed.offset().is_some() {
        let datetime = parsed.to_datetime().map_err(|e| e.to_string())?;
        return Ok(iso_offset_datetime(&datetime));
    }

    let date = parsed.to_naive_date().map_err(|e| e.to_string())?;
    if parsed.hour_mod_12().is_some() {
        let time = parsed.to_naive_time().map_err(|e| e.to_string())?;
        return Ok(iso_local_datetime(&date.and_time(time)));
    }
    Ok(iso_date(&date))
}

fn iso_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `HH:mm`, then `:ss` when seconds or fraction are non-zero, then the
/// fraction in groups of three digits.
fn iso_time(time: &NaiveTime) -> String {
    let mut out = format!("{:02}:{:02}", time.hour(), time.minute());
    let nanos = time.nanosecond();
    if time.second() > 0 || nanos > 0 {
        out.push_str(&format!(":{:02}", time.second()));
        if nanos > 0 {
            if nanos % 1_000_000 == 0 {
                out.push_str(&format!(".{:03}", nanos / 1_000_000));
            } else if nanos % 1_000 == 0 {
                out.push_str(&format!(".{:06}", nanos / 1_000));
            } else {
                out.push_str(&format!(".{:09}", nanos));
            }
        }
    }
    out
}

fn iso_local_datetime(datetime: &NaiveDateTime) -> String {
    format!("{}T{}", iso_date(&datetime.date()), iso_time(&datetime.time()))
}

fn iso_offset_datetime(datetime: &DateTime<FixedOffset>) -> String {
    format!(
        "{}{}",
        iso_local_datetime(&datetime.naive_local()),
        iso_offset(datetime.offset())
    )
}

fn iso_offset(offset: &FixedOffset) -> String {
    let total = offset.local_minus_utc();
    if total == 0 {
        return "Z".to_string();
    }
    let sign = if total < 0 { '-' } else { '+' };
    let total = total.unsigned_abs();
    let (hours, minutes, seconds) = (total / 3600, total / 60 % 60, total % 60);
    if seconds > 0 {
        format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{sign}{hours:02}:{minutes:02}")
    }
}
