#![forbid(unsafe_code)]

//! URL-safe base-64 text codec for integers and bit sequences.
//!
//! Both encoders share a 64-symbol alphabet (`0-9`, `a-z`, `A-Z`, `-`, `_`)
//! where each symbol's value is its position.
//!
//! - Integers are written base-64, least significant digit first, with no
//!   terminator. Zero is `"0"`, never the empty string.
//! - Bits are packed six per symbol; bit `j` of a chunk contributes `2^j`.
//!   The last chunk is zero-padded, so unpacking yields a multiple of six and
//!   callers truncate to the count they expect.

use crate::error::{Error, Result};

/// The 64 symbols in value order.
pub const ALPHABET: &[u8; 64] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ-_";

/// Bits carried by one symbol.
pub const BITS_PER_SYMBOL: usize = 6;

const RADIX: u64 = 64;

/// Symbol for a value in `0..64`.
#[inline]
fn symbol(value: u8) -> char {
    ALPHABET[usize::from(value & 0x3f)] as char
}

/// Value of a symbol, or `None` if it is not in the alphabet.
#[must_use]
pub fn symbol_value(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='z' => Some(c as u8 - b'a' + 10),
        'A'..='Z' => Some(c as u8 - b'A' + 36),
        '-' => Some(62),
        '_' => Some(63),
        _ => None,
    }
}

fn checked_symbol_value(c: char) -> Result<u8> {
    symbol_value(c).ok_or_else(|| Error::MalformedBoard(format!("unexpected symbol {c:?}")))
}

/// Encode `n` base-64, least significant digit first.
#[must_use]
pub fn encode_varint(mut n: u64) -> String {
    if n == 0 {
        return symbol(0).to_string();
    }
    let mut out = String::new();
    while n > 0 {
        out.push(symbol((n % RADIX) as u8));
        n /= RADIX;
    }
    out
}

/// Decode a string produced by [`encode_varint`].
///
/// Fails on an empty string, a symbol outside the alphabet, or a value that
/// does not fit in `u64`.
pub fn decode_varint(s: &str) -> Result<u64> {
    if s.is_empty() {
        return Err(Error::MalformedBoard("empty integer".into()));
    }
    let mut value: u64 = 0;
    let mut scale: Option<u64> = Some(1);
    for c in s.chars() {
        let digit = u64::from(checked_symbol_value(c)?);
        if digit != 0 {
            value = scale
                .and_then(|scale| digit.checked_mul(scale))
                .and_then(|term| value.checked_add(term))
                .ok_or_else(|| Error::MalformedBoard(format!("integer {s:?} overflows")))?;
        }
        scale = scale.and_then(|scale| scale.checked_mul(RADIX));
    }
    Ok(value)
}

/// Pack bits six per symbol.
#[must_use]
pub fn pack_bits(bits: &[bool]) -> String {
    bits.chunks(BITS_PER_SYMBOL)
        .map(|chunk| {
            let value = chunk
                .iter()
                .enumerate()
                .fold(0u8, |acc, (j, &bit)| acc | (u8::from(bit) << j));
            symbol(value)
        })
        .collect()
}

/// Unpack every symbol into six bits, padding included.
pub fn unpack_bits(s: &str) -> Result<Vec<bool>> {
    let mut bits = Vec::with_capacity(s.len() * BITS_PER_SYMBOL);
    for c in s.chars() {
        let value = checked_symbol_value(c)?;
        bits.extend((0..BITS_PER_SYMBOL).map(|j| value & (1 << j) != 0));
    }
    Ok(bits)
}

/// Number of symbols needed to pack `bit_count` bits.
#[must_use]
pub fn packed_len(bit_count: usize) -> usize {
    bit_count.div_ceil(BITS_PER_SYMBOL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_values_match_positions() {
        for (i, &b) in ALPHABET.iter().enumerate() {
            assert_eq!(symbol_value(b as char), Some(i as u8));
            assert_eq!(symbol(i as u8), b as char);
        }
        assert_eq!(symbol_value('+'), None);
        assert_eq!(symbol_value('/'), None);
        assert_eq!(symbol_value('='), None);
    }

    #[test]
    fn varint_zero_is_single_symbol() {
        assert_eq!(encode_varint(0), "0");
        assert_eq!(decode_varint("0").unwrap(), 0);
    }

    #[test]
    fn varint_least_significant_first() {
        assert_eq!(encode_varint(11), "b");
        assert_eq!(encode_varint(63), "_");
        assert_eq!(encode_varint(64), "01");
        assert_eq!(encode_varint(65), "11");
        assert_eq!(decode_varint("01").unwrap(), 64);
        assert_eq!(decode_varint("b").unwrap(), 11);
    }

    #[test]
    fn varint_trailing_zero_digits_are_harmless() {
        assert_eq!(decode_varint("b000").unwrap(), 11);
    }

    #[test]
    fn varint_max_roundtrips() {
        assert_eq!(decode_varint(&encode_varint(u64::MAX)).unwrap(), u64::MAX);
    }

    #[test]
    fn varint_errors() {
        assert!(decode_varint("").is_err());
        assert!(decode_varint("a+").is_err());
        // 12 symbols of value 63 exceed u64.
        assert!(decode_varint("____________").is_err());
    }

    #[test]
    fn pack_bits_low_bit_first() {
        assert_eq!(pack_bits(&[true]), "1");
        assert_eq!(pack_bits(&[false, true]), "2");
        assert_eq!(pack_bits(&[true; 6]), "_");
        assert_eq!(pack_bits(&[false, false, false, false, false, true]), "w");
        assert_eq!(pack_bits(&[]), "");
    }

    #[test]
    fn pack_bits_pads_last_chunk() {
        assert_eq!(pack_bits(&[false; 9]), "00");
        assert_eq!(pack_bits(&[true; 7]), "_1");
    }

    #[test]
    fn unpack_bits_yields_six_per_symbol() {
        let bits = unpack_bits("_1").unwrap();
        assert_eq!(bits.len(), 12);
        assert!(bits[..7].iter().all(|&b| b));
        assert!(bits[7..].iter().all(|&b| !b));
    }

    #[test]
    fn unpack_bits_rejects_foreign_symbols() {
        assert!(matches!(unpack_bits("0=0"), Err(Error::MalformedBoard(_))));
    }

    #[test]
    fn packed_len_rounds_up() {
        assert_eq!(packed_len(0), 0);
        assert_eq!(packed_len(6), 1);
        assert_eq!(packed_len(9), 2);
        assert_eq!(packed_len(121), 21);
    }
}
