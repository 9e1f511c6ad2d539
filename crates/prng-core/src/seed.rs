//! Seed text parsing and clock-derived seeds.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::PrngError;

/// Where a generator's seed comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedSource {
    /// A seed supplied by the caller.
    Explicit(u64),
    /// The current wall-clock time in whole seconds.
    #[default]
    Clock,
}

impl SeedSource {
    /// The concrete seed. `Clock` reads the clock on every call.
    pub fn resolve(self) -> u64 {
        match self {
            Self::Explicit(seed) => seed,
            Self::Clock => clock_seed(),
        }
    }
}

impl std::fmt::Display for SeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Explicit(seed) => write!(f, "{seed}"),
            Self::Clock => write!(f, "clock"),
        }
    }
}

/// Seconds since the Unix epoch, or 0 if the clock reads earlier than that.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Parse a seed written as a C integer literal.
///
/// Accepts leading whitespace and an optional sign, then `0x`/`0X` for hex,
/// a leading `0` for octal, or plain decimal. A `-` sign negates modulo
/// 2^64, so `-1` is `u64::MAX`. Nothing may follow the digits, and values
/// above `u64::MAX` are rejected.
pub fn parse_seed(text: &str) -> Result<u64, PrngError> {
    let invalid = || PrngError::InvalidSeed(text.to_string());

    let s = text.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (16, hex)
    } else if s.len() > 1 && s.starts_with('0') {
        (8, &s[1..])
    } else {
        (10, s)
    };

    // from_str_radix would also take a sign here; only bare digits are valid.
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid());
    }
    let value = u64::from_str_radix(digits, radix).map_err(|_| invalid())?;
    Ok(if negative { value.wrapping_neg() } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        assert_eq!(parse_seed("0").unwrap(), 0);
        assert_eq!(parse_seed("12345").unwrap(), 12345);
        assert_eq!(parse_seed("18446744073709551615").unwrap(), u64::MAX);
    }

    #[test]
    fn test_hex_prefixes() {
        assert_eq!(parse_seed("0x10").unwrap(), 16);
        assert_eq!(parse_seed("0XfF").unwrap(), 255);
        assert_eq!(parse_seed("0xFFFFFFFFFFFFFFFF").unwrap(), u64::MAX);
    }

    #[test]
    fn test_octal_prefix() {
        assert_eq!(parse_seed("010").unwrap(), 8);
        assert_eq!(parse_seed("0777").unwrap(), 511);
        assert!(parse_seed("08").is_err());
    }

    #[test]
    fn test_sign_and_whitespace() {
        assert_eq!(parse_seed("  42").unwrap(), 42);
        assert_eq!(parse_seed("+42").unwrap(), 42);
        assert_eq!(parse_seed("-1").unwrap(), u64::MAX);
        assert_eq!(parse_seed("-0x10").unwrap(), 16u64.wrapping_neg());
    }

    #[test]
    fn test_rejects_garbage() {
        for text in ["", " ", "abc", "12abc", "42 ", "0x", "0xg1", "0x+5", "--1", "1.5"] {
            match parse_seed(text) {
                Err(PrngError::InvalidSeed(t)) => assert_eq!(t, text),
                other => panic!("{text:?} should be invalid, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_rejects_overflow() {
        assert!(parse_seed("18446744073709551616").is_err());
        assert!(parse_seed("0x10000000000000000").is_err());
    }

    #[test]
    fn test_seed_source_resolve() {
        assert_eq!(SeedSource::Explicit(9).resolve(), 9);
        assert!(SeedSource::Clock.resolve() > 1_600_000_000);
        assert_eq!(SeedSource::default(), SeedSource::Clock);
    }
}
