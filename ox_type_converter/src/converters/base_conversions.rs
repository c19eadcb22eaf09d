//! Radix conversion functions
//!
//! Decimal values are `i64`. Negative values render as a `-` followed by the
//! digits of their magnitude, never as two's complement.

use crate::error::ConvertError;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub fn dec_to_bin(number: i64) -> String {
    format_radix(number, 2)
}

pub fn bin_to_dec(bin: &str) -> Result<i64, ConvertError> {
    parse_radix(bin, 2)
}

/// Lowercase hex digits, no prefix.
pub fn dec_to_hex(number: i64) -> String {
    format_radix(number, 16)
}

/// Accepts an optional `0x`/`0X` prefix.
pub fn hex_to_dec(hex: &str) -> Result<i64, ConvertError> {
    parse_radix(strip_hex_prefix(hex), 16)
}

pub fn dec_to_oct(number: i64) -> String {
    format_radix(number, 8)
}

/// Accepts an optional `0` or `0o` prefix.
pub fn oct_to_dec(oct: &str) -> Result<i64, ConvertError> {
    let digits = oct
        .strip_prefix("0o")
        .or_else(|| oct.strip_prefix("0O"))
        .unwrap_or(oct);
    parse_radix(digits, 8)
}

pub fn hex_to_bin(hex: &str) -> Result<String, ConvertError> {
    hex_to_dec(hex).map(dec_to_bin)
}

pub fn bin_to_hex(bin: &str) -> Result<String, ConvertError> {
    bin_to_dec(bin).map(dec_to_hex)
}

/// Re-encode `number` from `from_base` digits into `to_base` digits.
/// Both bases must lie in `2..=36`.
pub fn base_convert(number: &str, from_base: u32, to_base: u32) -> Result<String, ConvertError> {
    check_base(from_base)?;
    check_base(to_base)?;
    parse_radix(number, from_base).map(|n| format_radix(n, to_base))
}

fn check_base(base: u32) -> Result<(), ConvertError> {
    if (2..=36).contains(&base) {
        Ok(())
    } else {
        Err(ConvertError::InvalidBase(base))
    }
}

fn strip_hex_prefix(hex: &str) -> &str {
    hex.strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex)
}

fn parse_radix(input: &str, base: u32) -> Result<i64, ConvertError> {
    i64::from_str_radix(input, base).map_err(|source| ConvertError::InvalidDigits {
        input: input.to_string(),
        base,
        source,
    })
}

fn format_radix(number: i64, base: u32) -> String {
    let base = u64::from(base);
    let mut magnitude = number.unsigned_abs();
    if magnitude == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while magnitude > 0 {
        digits.push(DIGITS[(magnitude % base) as usize]);
        magnitude /= base;
    }
    if number < 0 {
        digits.push(b'-');
    }
    digits.iter().rev().map(|&d| char::from(d)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dec_to_bin() {
        assert_eq!(dec_to_bin(8), "1000");
        assert_eq!(dec_to_bin(0), "0");
        assert_eq!(dec_to_bin(-5), "-101");
    }

    #[test]
    fn test_bin_to_dec() {
        assert_eq!(bin_to_dec("1000").unwrap(), 8);
        assert!(matches!(
            bin_to_dec("hello"),
            Err(ConvertError::InvalidDigits { base: 2, .. })
        ));
    }

    #[test]
    fn test_hex_to_bin() {
        assert_eq!(hex_to_bin("123abff").unwrap(), "1001000111010101111111111");
        assert!(hex_to_bin("hello").is_err());
    }

    #[test]
    fn test_bin_to_hex() {
        assert_eq!(bin_to_hex("1001000111010101111111111").unwrap(), "123abff");
        assert!(bin_to_hex("hello").is_err());
    }

    #[test]
    fn test_dec_to_hex() {
        assert_eq!(dec_to_hex(1234567890), "499602d2");
        assert_eq!(dec_to_hex(i64::MIN), "-8000000000000000");
    }

    #[test]
    fn test_hex_to_dec() {
        assert_eq!(hex_to_dec("499602d2").unwrap(), 1234567890);
        let plain = hex_to_dec("123abf").unwrap();
        assert_eq!(hex_to_dec("0x123abf").unwrap(), plain);
        assert_eq!(hex_to_dec("0X123ABF").unwrap(), plain);
    }

    #[test]
    fn test_dec_to_oct() {
        assert_eq!(dec_to_oct(123456789), "726746425");
    }

    #[test]
    fn test_oct_to_dec() {
        assert_eq!(oct_to_dec("726746425").unwrap(), 123456789);
        assert_eq!(oct_to_dec("0726746425").unwrap(), 123456789);
        assert_eq!(oct_to_dec("0o726746425").unwrap(), 123456789);
        assert!(oct_to_dec("789").is_err());
    }

    #[test]
    fn test_base_convert() {
        assert_eq!(base_convert("726746425", 10, 16).unwrap(), "2b514539");
        assert_eq!(base_convert("ff", 16, 2).unwrap(), "11111111");
        assert_eq!(base_convert("zz", 36, 10).unwrap(), "1295");
        assert!(base_convert("hello", 10, 16).is_err());
        assert!(matches!(
            base_convert("10", 1, 10),
            Err(ConvertError::InvalidBase(1))
        ));
        assert!(matches!(
            base_convert("10", 10, 37),
            Err(ConvertError::InvalidBase(37))
        ));
    }

    #[test]
    fn test_round_trips() {
        for n in [0i64, 1, 2, 255, 1234, 1234567890, i64::MAX] {
            assert_eq!(bin_to_dec(&dec_to_bin(n)).unwrap(), n);
            assert_eq!(hex_to_dec(&dec_to_hex(n)).unwrap(), n);
            assert_eq!(oct_to_dec(&dec_to_oct(n)).unwrap(), n);
        }
    }
}
