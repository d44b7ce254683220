//! Pattern-based decimal formatting
//!
//! Patterns follow the familiar decimal-format shape: an optional literal
//! prefix, integer digits (`#`, `0`, `,`), an optional `.` followed by
//! fraction digits, and an optional literal suffix. A `%` anywhere in the
//! prefix or suffix scales the value by 100. Text inside single quotes is
//! literal, so `'No. '0` keeps its dot and `'%'` does not scale; `''` is a
//! literal quote.
//!
//! ```rust
//! use sugars_prims::format::{Formats, NumberPattern};
//!
//! let money = NumberPattern::parse("$#,##0.00")?;
//! assert_eq!(money.format(-1234.5), "-$1,234.50");
//! assert_eq!(Formats::format(0.256, "#%")?, "26%");
//! # Ok::<(), sugars_prims::Error>(())
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use hashbrown::HashMap;
use parking_lot::RwLock;

use crate::error::{Error, Result};

/// A compiled number pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPattern {
    source: String,
    prefix: String,
    suffix: String,
    min_int: usize,
    grouping: Option<usize>,
    min_frac: usize,
    max_frac: usize,
    multiplier: u32,
}

fn is_pattern_char(c: char) -> bool {
    matches!(c, '#' | '0' | ',' | '.')
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Prefix,
    Body,
    Suffix,
}

/// Splits a pattern into unquoted prefix, digit body and suffix, and reports
/// whether an unquoted `%` appeared in the literals.
fn split_literals(pattern: &str) -> std::result::Result<(String, String, String, bool), &'static str> {
    let mut prefix = String::new();
    let mut body = String::new();
    let mut suffix = String::new();
    let mut percent = false;
    let mut quoted = false;
    let mut section = Section::Prefix;

    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        let literal = if c == '\'' {
            if chars.peek() != Some(&'\'') {
                quoted = !quoted;
                continue;
            }
            chars.next();
            '\''
        } else if !quoted && section != Section::Suffix && is_pattern_char(c) {
            section = Section::Body;
            body.push(c);
            continue;
        } else {
            percent |= !quoted && c == '%';
            c
        };
        match section {
            Section::Prefix => prefix.push(literal),
            Section::Body | Section::Suffix => {
                section = Section::Suffix;
                suffix.push(literal);
            }
        }
    }
    if quoted {
        return Err("unterminated quote");
    }
    Ok((prefix, body, suffix, percent))
}

impl NumberPattern {
    /// Compiles `pattern`.
    pub fn parse(pattern: &str) -> Result<Self> {
        let invalid = |reason: &'static str| Error::InvalidPattern {
            pattern: pattern.to_string(),
            reason,
        };

        let (prefix, body, suffix, percent) = split_literals(pattern).map_err(invalid)?;
        let body = body.as_str();
        if body.is_empty() {
            return Err(invalid("no digit characters"));
        }

        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
        if frac_part.contains('.') {
            return Err(invalid("more than one decimal separator"));
        }

        let mut int_digits = 0;
        let mut min_int = 0;
        let mut since_comma = 0;
        let mut has_comma = false;
        for c in int_part.chars() {
            match c {
                '#' if min_int > 0 => return Err(invalid("'#' follows '0' in the integer part")),
                '#' | '0' => {
                    int_digits += 1;
                    since_comma += 1;
                    if c == '0' {
                        min_int += 1;
                    }
                }
                _ => {
                    has_comma = true;
                    since_comma = 0;
                }
            }
        }
        if has_comma && since_comma == 0 {
            return Err(invalid("grouping separator ends the integer part"));
        }

        let mut min_frac = 0;
        let mut max_frac = 0;
        for c in frac_part.chars() {
            match c {
                '0' if max_frac > min_frac => return Err(invalid("'0' follows '#' in the fraction")),
                '0' => {
                    min_frac += 1;
                    max_frac += 1;
                }
                '#' => max_frac += 1,
                _ => return Err(invalid("grouping separator in the fraction")),
            }
        }
        if int_digits == 0 && max_frac == 0 {
            return Err(invalid("no digit characters"));
        }

        let multiplier = if percent { 100 } else { 1 };
        Ok(Self {
            source: pattern.to_string(),
            prefix,
            suffix,
            min_int,
            grouping: has_comma.then_some(since_comma),
            min_frac,
            max_frac,
            multiplier,
        })
    }

    /// The pattern text this was compiled from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Literal text before the number.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Literal text after the number.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Minimum integer digits.
    pub fn min_int(&self) -> usize {
        self.min_int
    }

    /// Digits per group, if grouping is on.
    pub fn grouping(&self) -> Option<usize> {
        self.grouping
    }

    /// Minimum fraction digits.
    pub fn min_frac(&self) -> usize {
        self.min_frac
    }

    /// Maximum fraction digits.
    pub fn max_frac(&self) -> usize {
        self.max_frac
    }

    /// Scale applied before formatting: 100 for percent patterns, else 1.
    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    /// Formats `value`, rounding half-even to `max_frac` digits.
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        let scaled = value * f64::from(self.multiplier);
        if scaled.is_infinite() {
            let sign = if scaled < 0.0 { "-" } else { "" };
            return format!("{sign}{}∞{}", self.prefix, self.suffix);
        }

        let text = format!("{:.*}", self.max_frac, scaled.abs());
        let (int_digits, frac_digits) = text.split_once('.').unwrap_or((text.as_str(), ""));
        self.assemble(scaled.is_sign_negative(), int_digits, frac_digits)
    }

    /// Formats an integer exactly, without a detour through `f64`.
    pub fn format_integer(&self, value: i64) -> String {
        let scaled = i128::from(value) * i128::from(self.multiplier);
        let int_digits = scaled.unsigned_abs().to_string();
        let frac_digits = "0".repeat(self.min_frac);
        self.assemble(scaled < 0, &int_digits, &frac_digits)
    }

    fn assemble(&self, negative: bool, int_digits: &str, frac_digits: &str) -> String {
        let mut frac = frac_digits.trim_end_matches('0');
        if frac.len() < self.min_frac {
            frac = &frac_digits[..self.min_frac];
        }

        let significant = int_digits.trim_start_matches('0');
        let mut int = format!("{significant:0>width$}", width = self.min_int);
        if int.is_empty() && frac.is_empty() {
            int.push('0');
        }
        let all_zero = int.bytes().chain(frac.bytes()).all(|b| b == b'0');

        let mut out = String::with_capacity(int.len() + frac.len() + self.prefix.len() + self.suffix.len() + 8);
        if negative && !all_zero {
            out.push('-');
        }
        out.push_str(&self.prefix);
        self.push_grouped(&mut out, &int);
        if !frac.is_empty() {
            out.push('.');
            out.push_str(frac);
        }
        out.push_str(&self.suffix);
        out
    }

    fn push_grouped(&self, out: &mut String, int: &str) {
        let size = match self.grouping {
            Some(size) if size > 0 => size,
            _ => {
                out.push_str(int);
                return;
            }
        };
        let len = int.len();
        for (i, c) in int.chars().enumerate() {
            if i > 0 && (len - i) % size == 0 {
                out.push(',');
            }
            out.push(c);
        }
    }
}

impl fmt::Display for NumberPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for NumberPattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

type PatternCache = RwLock<HashMap<String, Arc<NumberPattern>>>;

static PATTERNS: OnceLock<PatternCache> = OnceLock::new();

fn patterns() -> &'static PatternCache {
    PATTERNS.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Process-wide cache of compiled patterns.
pub struct Formats;

impl Formats {
    /// Compiled form of `pattern`, compiling and caching it on first use.
    pub fn pattern(pattern: &str) -> Result<Arc<NumberPattern>> {
        if let Some(compiled) = patterns().read().get(pattern) {
            return Ok(Arc::clone(compiled));
        }
        log::debug!("compiling number pattern {pattern:?}");
        let compiled = Arc::new(NumberPattern::parse(pattern)?);
        let mut cache = patterns().write();
        Ok(Arc::clone(cache.entry(pattern.to_string()).or_insert(compiled)))
    }

    /// Formats `value` with the cached `pattern`.
    pub fn format(value: f64, pattern: &str) -> Result<String> {
        Ok(Self::pattern(pattern)?.format(value))
    }

    /// Formats an integer with the cached `pattern`.
    pub fn format_integer(value: i64, pattern: &str) -> Result<String> {
        Ok(Self::pattern(pattern)?.format_integer(value))
    }

    /// Number of patterns currently cached.
    pub fn cached_patterns() -> usize {
        patterns().read().len()
    }

    /// Drops every cached pattern.
    pub fn clear() {
        patterns().write().clear();
    }
}

fn fixed(source: String, suffix: &str, min_frac: usize, multiplier: u32) -> NumberPattern {
    NumberPattern {
        source,
        prefix: String::new(),
        suffix: suffix.to_string(),
        min_int: 1,
        grouping: Some(3),
        min_frac,
        max_frac: min_frac,
        multiplier,
    }
}

/// `value` with thousands separators, as `#,##0`.
pub fn format_grouped(value: i64) -> String {
    fixed("#,##0".to_string(), "", 0, 1).format_integer(value)
}

/// `value` as a percentage with exactly `decimals` fraction digits.
///
/// ```rust
/// use sugars_prims::format::format_percent;
///
/// assert_eq!(format_percent(0.1234, 1), "12.3%");
/// assert_eq!(format_percent(12.5, 0), "1,250%");
/// ```
pub fn format_percent(value: f64, decimals: usize) -> String {
    let source = if decimals == 0 {
        "#,##0%".to_string()
    } else {
        format!("#,##0.{}%", "0".repeat(decimals))
    };
    fixed(source, "%", decimals, 100).format(value)
}
