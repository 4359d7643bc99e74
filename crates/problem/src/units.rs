// ABOUTME: Converts judge limit strings such as "2 초" and "256 MB" into milliseconds and bytes.
// ABOUTME: Also provides ByteSize, a human-readable rendering of byte counts for status lines.

//! Limit string conversion.
//!
//! Limit cells have the shape `"<number> <unit-token> [anything else]"`. Only the
//! first two whitespace-separated tokens are inspected. Conversion failures are
//! returned as [`UnitError`] so the caller can fall back to zero and warn.

use std::fmt;

use thiserror::Error;

pub const KIB: u64 = 1 << 10;
pub const MIB: u64 = KIB << 10;
pub const GIB: u64 = MIB << 10;

/// Why a limit string could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("expected \"<number> <unit>\", got {0:?}")]
    TooFewTokens(String),

    #[error("unrecognized unit {0:?}")]
    UnknownUnit(String),

    #[error("invalid number {0:?}")]
    InvalidNumber(String),

    #[error("value {0:?} is out of range")]
    OutOfRange(String),
}

/// Memory unit tokens as printed by the judge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryUnit {
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
    Unknown,
}

impl MemoryUnit {
    /// Maps a unit token to a unit. Matching is exact; anything else is `Unknown`.
    pub fn from_token(token: &str) -> Self {
        match token {
            "B" => MemoryUnit::Bytes,
            "KB" => MemoryUnit::Kilobytes,
            "MB" => MemoryUnit::Megabytes,
            "GB" => MemoryUnit::Gigabytes,
            _ => MemoryUnit::Unknown,
        }
    }

    /// Bytes per unit, or `None` for `Unknown`.
    pub fn multiplier(self) -> Option<u64> {
        match self {
            MemoryUnit::Bytes => Some(1),
            MemoryUnit::Kilobytes => Some(KIB),
            MemoryUnit::Megabytes => Some(MIB),
            MemoryUnit::Gigabytes => Some(GIB),
            MemoryUnit::Unknown => None,
        }
    }
}

/// Splits a limit string into its magnitude and unit tokens.
fn split_limit(s: &str) -> Result<(&str, &str), UnitError> {
    let mut tokens = s.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(number), Some(unit)) => Ok((number, unit)),
        _ => Err(UnitError::TooFewTokens(s.to_string())),
    }
}

fn parse_magnitude(token: &str) -> Result<f64, UnitError> {
    let value: f64 = token
        .parse()
        .map_err(|_| UnitError::InvalidNumber(token.to_string()))?;
    if !value.is_finite() || value < 0.0 {
        return Err(UnitError::InvalidNumber(token.to_string()));
    }
    Ok(value)
}

/// Parses a time limit like `"2 초"` into milliseconds.
///
/// The second token must be one of `seconds_words`. The magnitude may be
/// fractional (`"0.5 초"` is 500 ms); the product is rounded to the nearest
/// millisecond so that float noise such as `4.35 * 1000 = 4349.999..` does not
/// lose a millisecond.
pub fn parse_time_limit_ms<S: AsRef<str>>(s: &str, seconds_words: &[S]) -> Result<u32, UnitError> {
    let (number, unit) = split_limit(s)?;
    if !seconds_words.iter().any(|w| w.as_ref() == unit) {
        return Err(UnitError::UnknownUnit(unit.to_string()));
    }

    let millis = (parse_magnitude(number)? * 1000.0).round();
    if millis > u32::MAX as f64 {
        return Err(UnitError::OutOfRange(number.to_string()));
    }
    Ok(millis as u32)
}

/// Parses a memory limit like `"256 MB"` into bytes.
pub fn parse_memory_limit_bytes(s: &str) -> Result<u64, UnitError> {
    let (number, unit) = split_limit(s)?;
    let multiplier = MemoryUnit::from_token(unit)
        .multiplier()
        .ok_or_else(|| UnitError::UnknownUnit(unit.to_string()))?;

    let bytes = (parse_magnitude(number)? * multiplier as f64).round();
    if bytes > u64::MAX as f64 {
        return Err(UnitError::OutOfRange(number.to_string()));
    }
    Ok(bytes as u64)
}

/// A byte count that displays as `512.00MiB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteSize(pub u64);

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.0;
        let (unit, name) = if size >= GIB {
            (GIB, "GiB")
        } else if size >= MIB {
            (MIB, "MiB")
        } else if size >= KIB {
            (KIB, "KiB")
        } else {
            (1, "B")
        };
        write!(f, "{:.2}{}", size as f64 / unit as f64, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECONDS: &[&str] = &["초"];

    #[test]
    fn test_time_whole_seconds() {
        assert_eq!(parse_time_limit_ms("2 초", SECONDS), Ok(2000));
        assert_eq!(parse_time_limit_ms("1 초", SECONDS), Ok(1000));
    }

    #[test]
    fn test_time_fractional_seconds() {
        assert_eq!(parse_time_limit_ms("0.5 초", SECONDS), Ok(500));
        assert_eq!(parse_time_limit_ms("4.35 초", SECONDS), Ok(4350));
    }

    #[test]
    fn test_time_rounds_to_nearest_millisecond() {
        assert_eq!(parse_time_limit_ms("4.35 초", SECONDS), Ok(4350));
        assert_eq!(parse_time_limit_ms("0.0004 초", SECONDS), Ok(0));
        assert_eq!(parse_time_limit_ms("0.0006 초", SECONDS), Ok(1));
    }

    #[test]
    fn test_memory_rounds_to_nearest_byte() {
        assert_eq!(parse_memory_limit_bytes("1.0005 KB"), Ok(1025));
        assert_eq!(parse_memory_limit_bytes("1.0004 KB"), Ok(1024));
    }

    #[test]
    fn test_time_ignores_trailing_tokens() {
        assert_eq!(parse_time_limit_ms("1 초 (추가 시간 없음)", SECONDS), Ok(1000));
    }

    #[test]
    fn test_time_wrong_unit() {
        assert_eq!(
            parse_time_limit_ms("2 seconds", SECONDS),
            Err(UnitError::UnknownUnit("seconds".to_string()))
        );
        assert_eq!(parse_time_limit_ms("2 seconds", &["seconds", "초"]), Ok(2000));
    }

    #[test]
    fn test_time_too_few_tokens() {
        assert!(matches!(
            parse_time_limit_ms("2초", SECONDS),
            Err(UnitError::TooFewTokens(_))
        ));
        assert!(matches!(
            parse_time_limit_ms("", SECONDS),
            Err(UnitError::TooFewTokens(_))
        ));
    }

    #[test]
    fn test_time_bad_number() {
        assert!(matches!(
            parse_time_limit_ms("two 초", SECONDS),
            Err(UnitError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_time_limit_ms("-1 초", SECONDS),
            Err(UnitError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_time_overflow() {
        assert!(matches!(
            parse_time_limit_ms("5000000 초", SECONDS),
            Err(UnitError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_memory_units() {
        assert_eq!(parse_memory_limit_bytes("100 B"), Ok(100));
        assert_eq!(parse_memory_limit_bytes("64 KB"), Ok(64 * 1024));
        assert_eq!(parse_memory_limit_bytes("256 MB"), Ok(268_435_456));
        assert_eq!(parse_memory_limit_bytes("512 MB"), Ok(536_870_912));
        assert_eq!(parse_memory_limit_bytes("1 GB"), Ok(1 << 30));
    }

    #[test]
    fn test_memory_fractional() {
        assert_eq!(parse_memory_limit_bytes("1.5 GB"), Ok(3 << 29));
    }

    #[test]
    fn test_memory_unknown_unit() {
        assert_eq!(
            parse_memory_limit_bytes("256 MiB"),
            Err(UnitError::UnknownUnit("MiB".to_string()))
        );
        assert_eq!(
            parse_memory_limit_bytes("256 mb"),
            Err(UnitError::UnknownUnit("mb".to_string()))
        );
    }

    #[test]
    fn test_memory_malformed() {
        assert!(matches!(
            parse_memory_limit_bytes("256MB"),
            Err(UnitError::TooFewTokens(_))
        ));
        assert!(matches!(
            parse_memory_limit_bytes("lots MB"),
            Err(UnitError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_memory_unit_mapping() {
        assert_eq!(MemoryUnit::from_token("KB"), MemoryUnit::Kilobytes);
        assert_eq!(MemoryUnit::from_token("TB"), MemoryUnit::Unknown);
        assert_eq!(MemoryUnit::Gigabytes.multiplier(), Some(GIB));
        assert_eq!(MemoryUnit::Unknown.multiplier(), None);
    }

    #[test]
    fn test_byte_size_display() {
        assert_eq!(ByteSize(512).to_string(), "512.00B");
        assert_eq!(ByteSize(1536).to_string(), "1.50KiB");
        assert_eq!(ByteSize(536_870_912).to_string(), "512.00MiB");
        assert_eq!(ByteSize(2 * GIB).to_string(), "2.00GiB");
    }
}
