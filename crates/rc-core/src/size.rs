//! Human readable data sizes such as `500mb` or `10 KB`.
//!
//! Units use binary multipliers (`1kb` is 1024 bytes). A missing unit means
//! bytes. Only whole, positive numbers are accepted since the value is used
//! as an upper bound.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const KIB: u64 = 1 << 10;
const MIB: u64 = 1 << 20;
const GIB: u64 = 1 << 30;
const TIB: u64 = 1 << 40;
const PIB: u64 = 1 << 50;
const EIB: u64 = 1 << 60;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeFormatError {
    #[error("data size is empty")]
    Empty,

    #[error("invalid number in data size {0:?}")]
    InvalidNumber(String),

    #[error("unknown data size unit {0:?}")]
    UnknownUnit(String),

    #[error("data size {0:?} does not fit in 64 bits")]
    Overflow(String),

    #[error("data size must be greater than zero")]
    Zero,
}

/// A positive number of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DataSize(u64);

impl DataSize {
    /// Parse strings like `500mb`, `10b`, `4 KiB` or `1024`.
    pub fn parse(input: &str) -> Result<Self, SizeFormatError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(SizeFormatError::Empty);
        }

        let digits_end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        let (number, rest) = trimmed.split_at(digits_end);
        if number.is_empty() {
            return Err(SizeFormatError::InvalidNumber(input.to_string()));
        }

        let unit = rest.trim_start();
        if unit.starts_with(|c: char| c == '.' || c == ',' || c.is_ascii_digit()) {
            return Err(SizeFormatError::InvalidNumber(input.to_string()));
        }
        let multiplier = unit_multiplier(unit)
            .ok_or_else(|| SizeFormatError::UnknownUnit(unit.to_string()))?;

        let value: u64 = number
            .parse()
            .map_err(|_| SizeFormatError::Overflow(input.to_string()))?;
        let bytes = value
            .checked_mul(multiplier)
            .ok_or_else(|| SizeFormatError::Overflow(input.to_string()))?;

        if bytes == 0 {
            return Err(SizeFormatError::Zero);
        }
        Ok(Self(bytes))
    }

    pub fn bytes(&self) -> u64 {
        self.0
    }
}

fn unit_multiplier(unit: &str) -> Option<u64> {
    let multiplier = match unit.to_ascii_lowercase().as_str() {
        "" | "b" => 1,
        "k" | "kb" | "kib" => KIB,
        "m" | "mb" | "mib" => MIB,
        "g" | "gb" | "gib" => GIB,
        "t" | "tb" | "tib" => TIB,
        "p" | "pb" | "pib" => PIB,
        "e" | "eb" | "eib" => EIB,
        _ => return None,
    };
    Some(multiplier)
}

impl FromStr for DataSize {
    type Err = SizeFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DataSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(s: &str) -> u64 {
        DataSize::parse(s).expect("valid size").bytes()
    }

    #[test]
    fn test_parses_each_unit_with_binary_multipliers() {
        assert_eq!(bytes("10b"), 10);
        assert_eq!(bytes("1kb"), 1024);
        assert_eq!(bytes("1mb"), 1_048_576);
        assert_eq!(bytes("1gb"), 1_073_741_824);
        assert_eq!(bytes("1tb"), 1 << 40);
        assert_eq!(bytes("1pb"), 1 << 50);
        assert_eq!(bytes("1eb"), 1 << 60);
        assert_eq!(bytes("500mb"), 500 * 1024 * 1024);
    }

    #[test]
    fn test_one_megabyte_is_binary_not_decimal() {
        assert_ne!(bytes("1mb"), 1_000_000);
        assert_eq!(bytes("1mb"), bytes("1024kb"));
        assert!(bytes("1mb") > bytes("1000kb"));
    }

    #[test]
    fn test_units_are_case_insensitive_and_allow_short_forms() {
        assert_eq!(bytes("10MB"), bytes("10mb"));
        assert_eq!(bytes("10Mb"), bytes("10mb"));
        assert_eq!(bytes("10m"), bytes("10mb"));
        assert_eq!(bytes("10MiB"), bytes("10mb"));
        assert_eq!(bytes("3K"), 3 * 1024);
    }

    #[test]
    fn test_missing_unit_means_bytes_and_whitespace_is_tolerated() {
        assert_eq!(bytes("1024"), 1024);
        assert_eq!(bytes("  7 kb "), 7 * 1024);
    }

    #[test]
    fn test_parse_is_deterministic() {
        assert_eq!(DataSize::parse("42mb"), DataSize::parse("42mb"));
        assert_eq!("42mb".parse::<DataSize>(), DataSize::parse("42mb"));
    }

    #[test]
    fn test_rejects_missing_number() {
        assert_eq!(
            DataSize::parse("mb"),
            Err(SizeFormatError::InvalidNumber("mb".to_string()))
        );
        assert_eq!(
            DataSize::parse("-5mb"),
            Err(SizeFormatError::InvalidNumber("-5mb".to_string()))
        );
    }

    #[test]
    fn test_rejects_fractional_numbers() {
        assert!(matches!(
            DataSize::parse("1.5mb"),
            Err(SizeFormatError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_unit() {
        assert_eq!(
            DataSize::parse("5 parsecs"),
            Err(SizeFormatError::UnknownUnit("parsecs".to_string()))
        );
    }

    #[test]
    fn test_rejects_empty_and_zero() {
        assert_eq!(DataSize::parse(""), Err(SizeFormatError::Empty));
        assert_eq!(DataSize::parse("   "), Err(SizeFormatError::Empty));
        assert_eq!(DataSize::parse("0mb"), Err(SizeFormatError::Zero));
    }

    #[test]
    fn test_rejects_overflow() {
        assert!(matches!(
            DataSize::parse("16eb"),
            Err(SizeFormatError::Overflow(_))
        ));
        assert!(matches!(
            DataSize::parse("99999999999999999999999"),
            Err(SizeFormatError::Overflow(_))
        ));
    }
}
