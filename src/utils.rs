use crypto_bigint::{Encoding, NonZero, U256, U512};

/// Converts a smaller byte array to a larger one, padding with zeros.
///
/// This function is useful for upcasting before reading past the top of an integer. The
/// windowed recodings read a few bits beyond the most significant bit of a scalar, and doing
/// that on a wider integer keeps every index in range.
///
/// # Type Parameters
/// * `N`: The size of the input byte array
/// * `M`: The size of the output byte array
///
/// # Arguments
/// * `smaller_bytes`: A reference to the input byte array of size `N`
///
/// # Returns
/// A new byte array of size `M` with the input bytes copied to the least significant positions
///
/// # Panics
/// If `M` is not greater than `N`
pub(crate) fn to_larger_uint<const N: usize, const M: usize>(smaller_bytes: &[u8; N]) -> [u8; M] {
    assert!(M > N, "Target size must be larger than source size");
    let mut larger_bytes = [0u8; M];
    larger_bytes[M - N..].copy_from_slice(smaller_bytes);
    larger_bytes
}

/// Converts a U256 to a U512.
///
/// # Arguments
/// * `u256`: A reference to the U256 value to be converted
///
/// # Returns
/// A new U512 value with the U256 value in the least significant bits
pub(crate) fn u256_to_u512(u256: &U256) -> U512 {
    U512::from_be_bytes(to_larger_uint::<32, 64>(&u256.to_be_bytes()))
}

/// Parses a big-endian hexadecimal string, with or without a `0x` prefix, into a U256.
///
/// `U256::from_be_hex` panics on malformed input, so the string is validated and left-padded
/// here first.
///
/// # Returns
/// `None` if the string is empty, longer than 64 digits, or contains a non-hex character
pub(crate) fn parse_hex_u256(value: &str) -> Option<U256> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    if digits.is_empty() || digits.len() > 64 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let padded = format!("{:0>64}", digits);
    Some(U256::from_be_hex(&padded))
}

/// Parses a signed hexadecimal string such as `-0xd201000000010000` into an `i128`.
///
/// # Returns
/// `None` for an empty magnitude, a non-hex character, or a value outside the `i128` range
pub(crate) fn parse_signed_hex(value: &str) -> Option<i128> {
    let (negative, magnitude) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };
    let digits = magnitude
        .strip_prefix("0x")
        .or_else(|| magnitude.strip_prefix("0X"))
        .unwrap_or(magnitude);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let magnitude = i128::try_from(u128::from_str_radix(digits, 16).ok()?).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Divides `value` by a small non-zero divisor, returning the quotient and the remainder.
///
/// Returns `None` only when `divisor` is zero.
pub(crate) fn div_rem_small(value: &U256, divisor: u64) -> Option<(U256, u64)> {
    let nz: Option<NonZero<U256>> = NonZero::new(U256::from_u64(divisor)).into();
    let (quotient, remainder) = value.div_rem(&nz?);
    Some((quotient, remainder.as_words()[0] as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(parse_hex_u256("0x17"), Some(U256::from_u64(23)));
        assert_eq!(parse_hex_u256("ff"), Some(U256::from_u64(255)));
        assert_eq!(parse_hex_u256(""), None);
        assert_eq!(parse_hex_u256("0x"), None);
        assert_eq!(parse_hex_u256("12g4"), None);
        assert_eq!(parse_hex_u256(&"1".repeat(65)), None);
    }

    #[test]
    fn test_signed_hex_parsing() {
        assert_eq!(parse_signed_hex("0x44e992b44a6909f1"), Some(4965661367192848881));
        // the BLS12-381 parameter does not fit an i64
        assert_eq!(parse_signed_hex("-0xd201000000010000"), Some(-15132376222941642752));
        assert_eq!(parse_signed_hex("-1"), Some(-1));
        assert_eq!(parse_signed_hex("-"), None);
        assert_eq!(parse_signed_hex("0x-1"), None);
        assert_eq!(parse_signed_hex("+1"), None);
        assert_eq!(parse_signed_hex(&"f".repeat(33)), None);
        assert_eq!(parse_signed_hex(&"f".repeat(32)), None);
    }

    #[test]
    fn test_small_division() {
        let (q, r) = div_rem_small(&U256::from_u64(22), 6).unwrap();
        assert_eq!(q, U256::from_u64(3));
        assert_eq!(r, 4);
        assert!(div_rem_small(&U256::ONE, 0).is_none());
    }

    #[test]
    fn test_widening_keeps_value() {
        let x = U256::from_u64(0xdead_beef);
        assert_eq!(u256_to_u512(&x), U512::from_u64(0xdead_beef));
    }
}
