//! Signed integer to binary / hexadecimal text.
//!
//! Non-negative values use their natural, minimal-width representation.
//! Negative values are shown in two's complement inside a fixed field whose
//! width differs per base: [`BINARY_FIELD_BITS`] for binary and
//! [`HEX_FIELD_BITS`] for hexadecimal. Negatives too large for the field are
//! truncated by the mask, not rejected.

use serde::Serialize;

/// Field width of a negative binary rendering.
pub const BINARY_FIELD_BITS: u32 = 10;

/// Field width of a negative hexadecimal rendering.
pub const HEX_FIELD_BITS: u32 = 32;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// An integer with its binary and hexadecimal renderings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    pub value: i64,
    pub binary: String,
    pub hexadecimal: String,
}

pub fn convert(value: i64) -> ConversionResult {
    ConversionResult {
        value,
        binary: to_binary(value),
        hexadecimal: to_hexadecimal(value),
    }
}

/// Base-2 rendering; negatives as exactly 10 two's-complement digits.
pub fn to_binary(n: i64) -> String {
    if n < 0 {
        fixed_width_digits(twos_complement(n, BINARY_FIELD_BITS), BINARY_FIELD_BITS, 1)
    } else {
        natural_digits(n.unsigned_abs(), 2)
    }
}

/// Base-16 rendering in uppercase; negatives as exactly 8 two's-complement
/// digits.
pub fn to_hexadecimal(n: i64) -> String {
    if n < 0 {
        fixed_width_digits(twos_complement(n, HEX_FIELD_BITS), HEX_FIELD_BITS, 4)
    } else {
        natural_digits(n.unsigned_abs(), 16)
    }
}

/// Low `bits` bits of the two's-complement encoding of `n`.
#[inline]
fn twos_complement(n: i64, bits: u32) -> u64 {
    let mask = (1u64 << bits) - 1;
    (n as u64) & mask
}

/// Most-significant-first digits of `value` spread over a `bits`-wide field,
/// `digit_bits` bits per digit.
fn fixed_width_digits(value: u64, bits: u32, digit_bits: u32) -> String {
    let digit_mask = (1u64 << digit_bits) - 1;
    let digits = bits / digit_bits;
    let mut out = String::with_capacity(digits as usize);
    for i in (0..digits).rev() {
        let digit = (value >> (i * digit_bits)) & digit_mask;
        out.push(char::from(HEX_DIGITS[digit as usize]));
    }
    out
}

/// Digits of `value` in `radix` without leading zeros; `"0"` for zero.
fn natural_digits(mut value: u64, radix: u64) -> String {
    if value == 0 {
        return String::from("0");
    }
    let mut reversed = Vec::new();
    while value > 0 {
        reversed.push(HEX_DIGITS[(value % radix) as usize]);
        value /= radix;
    }
    reversed.iter().rev().map(|&d| char::from(d)).collect()
}
