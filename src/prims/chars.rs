//! Char slice conversions.

use crate::error::{Error, Result};

/// Concatenates the chars into a string.
pub fn to_string(chars: &[char]) -> String {
    chars.iter().collect()
}

/// Splits a string into its chars.
pub fn from_str(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Unicode scalar values of each char.
pub fn to_code_points(chars: &[char]) -> Vec<u32> {
    chars.iter().map(|&c| u32::from(c)).collect()
}

/// Chars from scalar values; surrogates and values past `U+10FFFF` are rejected.
pub fn from_code_points(points: &[u32]) -> Result<Vec<char>> {
    points
        .iter()
        .map(|&p| char::from_u32(p).ok_or(Error::InvalidArgument("not a unicode scalar value")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_string_conversion() {
        assert_eq!(to_string(&['h', 'é', '😀']), "hé😀");
        assert_eq!(from_str("hé😀"), vec!['h', 'é', '😀']);
        assert_eq!(to_string(&[]), "");
    }

    #[test]
    fn test_code_points() {
        assert_eq!(to_code_points(&['A', '€']), vec![65, 0x20ac]);
        assert_eq!(from_code_points(&[65, 0x1f600]), Ok(vec!['A', '😀']));
        assert!(from_code_points(&[0xd800]).is_err());
        assert!(from_code_points(&[0x11_0000]).is_err());
    }
}
