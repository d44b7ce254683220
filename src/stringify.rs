//! Pluggable value-to-text strategies and list layouts
//!
//! A [`Stringifier`] decides how a single value is rendered. A
//! [`ToStringStyle`] decides how the rendered values are laid out.
//! Any `Fn(&T) -> String` closure is a stringifier.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::codec::{self, Radix};
use crate::prims::Integer;

/// Renders one value as text.
pub trait Stringifier<T: ?Sized> {
    /// Text form of `value`.
    fn stringify(&self, value: &T) -> String;
}

impl<T: ?Sized, F> Stringifier<T> for F
where
    F: Fn(&T) -> String,
{
    #[inline]
    fn stringify(&self, value: &T) -> String {
        self(value)
    }
}

/// Uses the `Display` implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayStringifier;

impl<T: fmt::Display + ?Sized> Stringifier<T> for DisplayStringifier {
    #[inline]
    fn stringify(&self, value: &T) -> String {
        value.to_string()
    }
}

/// Uses the `Debug` implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugStringifier;

impl<T: fmt::Debug + ?Sized> Stringifier<T> for DebugStringifier {
    #[inline]
    fn stringify(&self, value: &T) -> String {
        format!("{value:?}")
    }
}

/// Renders integers in a radix with its prefix, e.g. `0xff`.
#[derive(Debug, Clone, Copy)]
pub struct RadixStringifier(pub Radix);

impl<T: Integer> Stringifier<T> for RadixStringifier {
    fn stringify(&self, value: &T) -> String {
        format!("{}{}", self.0.prefix(), codec::to_radix_string(*value, self.0))
    }
}

/// Text that renders as an escaped literal: strings in double quotes, chars
/// in single quotes.
pub trait Quotable {
    /// Escaped, quoted form.
    fn quoted(&self) -> String;
}

impl Quotable for str {
    fn quoted(&self) -> String {
        format!("{self:?}")
    }
}

impl Quotable for String {
    fn quoted(&self) -> String {
        self.as_str().quoted()
    }
}

impl Quotable for char {
    fn quoted(&self) -> String {
        format!("{self:?}")
    }
}

impl<Q: Quotable + ?Sized> Quotable for &Q {
    #[inline]
    fn quoted(&self) -> String {
        (**self).quoted()
    }
}

/// Quotes strings and chars with their escapes, e.g. `"a\\b"` and `'x'`.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuotedStringifier;

impl<T: Quotable + ?Sized> Stringifier<T> for QuotedStringifier {
    #[inline]
    fn stringify(&self, value: &T) -> String {
        value.quoted()
    }
}

/// Layout of a rendered list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ToStringStyle {
    /// Text before the first element
    pub prefix: String,
    /// Text after the last element
    pub suffix: String,
    /// Text between elements
    pub separator: String,
    /// Text for an absent list
    pub null_text: String,
}

impl Default for ToStringStyle {
    fn default() -> Self {
        Self {
            prefix: "[".to_string(),
            suffix: "]".to_string(),
            separator: ", ".to_string(),
            null_text: "null".to_string(),
        }
    }
}

impl ToStringStyle {
    /// Bare comma-separated layout: `1,2,3`.
    pub fn plain() -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
            separator: ",".to_string(),
            ..Self::default()
        }
    }

    /// Replaces the prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Replaces the suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Replaces the separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Replaces the text used for an absent list.
    pub fn with_null_text(mut self, null_text: impl Into<String>) -> Self {
        self.null_text = null_text.into();
        self
    }

    fn wrap<I: Iterator<Item = String>>(&self, parts: I) -> String {
        let mut out = self.prefix.clone();
        for (i, part) in parts.enumerate() {
            if i > 0 {
                out.push_str(&self.separator);
            }
            out.push_str(&part);
        }
        out.push_str(&self.suffix);
        out
    }
}

/// Renders `items` with `stringifier`, laid out by `style`.
pub fn to_string_with<T>(
    items: &[T],
    style: &ToStringStyle,
    stringifier: &dyn Stringifier<T>,
) -> String {
    style.wrap(items.iter().map(|item| stringifier.stringify(item)))
}

/// Like [`to_string_with`], rendering `None` as the style's null text.
pub fn to_string_opt<T>(
    items: Option<&[T]>,
    style: &ToStringStyle,
    stringifier: &dyn Stringifier<T>,
) -> String {
    match items {
        Some(items) => to_string_with(items, style, stringifier),
        None => style.null_text.clone(),
    }
}

/// Renders every item of an iterator.
pub fn join_iter<T, I>(items: I, style: &ToStringStyle, stringifier: &dyn Stringifier<T>) -> String
where
    I: IntoIterator<Item = T>,
{
    style.wrap(items.into_iter().map(|item| stringifier.stringify(&item)))
}

/// Renders a list of lists, applying `style` at both levels.
pub fn nested_to_string<T, S>(
    rows: &[S],
    style: &ToStringStyle,
    stringifier: &dyn Stringifier<T>,
) -> String
where
    S: AsRef<[T]>,
{
    style.wrap(
        rows.iter()
            .map(|row| to_string_with(row.as_ref(), style, stringifier)),
    )
}
