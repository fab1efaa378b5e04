use alloy::primitives::{aliases::U80, U256};

/// Parse an unsigned integer given either as decimal or as "0x" prefixed hex.
///
/// Upkeep ids are 256-bit hashes and usually quoted in decimal, while RPC tools
/// print them in hex, so both forms are accepted. Digit separators are not.
pub fn parse_u256(value: &str) -> Result<U256, String> {
    let (digits, radix) = match value.strip_prefix("0x") {
        Some(hex) => (hex, 16),
        None => (value, 10),
    };
    if digits.is_empty() {
        return Err(format!("Missing digits in {:?}", value));
    }
    if digits.contains('_') {
        return Err(format!("Digit separators are not allowed in {:?}", value));
    }
    U256::from_str_radix(digits, radix).map_err(|e| format!("Invalid value {:?}: {}", value, e))
}

/// Parse a feed round id, which the aggregator interface limits to 80 bits.
pub fn parse_round_id(value: &str) -> Result<U80, String> {
    let round_id = parse_u256(value)?;
    U80::checked_from_limbs_slice(round_id.as_limbs()).ok_or_else(|| format!("Round id {} does not fit in uint80", round_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_parse_from_decimal_and_hex() {
        assert_eq!(parse_u256("255").unwrap(), U256::from(255u64));
        assert_eq!(parse_u256("0xff").unwrap(), U256::from(255u64));
        assert!(parse_u256("0xzz").is_err());
        assert!(parse_u256("-1").is_err());
    }

    #[test]
    fn empty_digits_and_separators_are_rejected() {
        assert!(parse_u256("").is_err());
        assert!(parse_u256("0x").is_err());
        assert!(parse_u256("1_000").is_err());
        assert!(parse_u256("0x_ff").is_err());
    }

    #[test]
    fn round_ids_are_bounded_to_80_bits() {
        assert_eq!(parse_round_id("42").unwrap(), U80::from(42u64));
        // 2^80
        assert!(parse_round_id("0x100000000000000000000").is_err());
        assert!(parse_round_id("0x").is_err());
    }
}
