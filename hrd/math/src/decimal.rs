use {
    crate::{MathError, MathResult, Uint256},
    std::str::FromStr,
};

/// Decimal places of token amounts ("atto" precision).
pub const ATTO_DECIMAL_PLACES: u32 = 18;

/// Decimal places of rates and accumulators ("ronto" precision).
pub const RONTO_DECIMAL_PLACES: u32 = 27;

/// Render a fixed-point integer as a decimal string.
///
/// - If the fractional part is zero, only the whole part is written, without
///   a separator.
/// - Otherwise the fractional part is left-padded with zeros to exactly
///   `decimal_places` digits. Trailing zeros are kept.
/// - If `max_fractional_digits` is given, the fractional digits are cut to
///   that length. This truncates; it never rounds. Cutting to zero digits
///   drops the separator as well.
///
/// ```rust
/// use hrd_math::{encode, Uint256};
///
/// let amount = Uint256::new_from_u128(1_234_500_000_000_000_000);
/// assert_eq!(encode(amount, 18, None), "1.234500000000000000");
/// assert_eq!(encode(amount, 18, Some(3)), "1.234");
/// ```
pub fn encode(amount: Uint256, decimal_places: u32, max_fractional_digits: Option<usize>) -> String {
    let places = decimal_places as usize;
    let digits = amount.to_string();

    let (whole, fractional) = if digits.len() > places {
        let (whole, fractional) = digits.split_at(digits.len() - places);
        (whole.to_string(), fractional.to_string())
    } else {
        ("0".to_string(), format!("{digits:0>places$}"))
    };

    if fractional.bytes().all(|b| b == b'0') {
        return whole;
    }

    let shown = match max_fractional_digits {
        Some(max) => &fractional[..max.min(places)],
        None => &fractional[..],
    };

    if shown.is_empty() {
        whole
    } else {
        format!("{whole}.{shown}")
    }
}

/// Parse a decimal string into a fixed-point integer.
///
/// Returns `None` if the text is not of the form `digits` or `digits.digits`,
/// or if the value doesn't fit in 256 bits. A half-typed input is a routine
/// condition, so no error is raised.
///
/// Fractional digits beyond `decimal_places` are discarded, not rounded:
///
/// ```rust
/// use hrd_math::{decode, Uint256};
///
/// assert_eq!(
///     decode("1.9999999999999999999", 18),
///     Some(Uint256::new_from_u128(1_999_999_999_999_999_999)),
/// );
/// assert_eq!(decode("1.2.3", 18), None);
/// ```
pub fn decode(input: &str, decimal_places: u32) -> Option<Uint256> {
    try_decode(input, decimal_places).ok()
}

/// Same as [`decode`], but reports why the input was rejected.
pub fn try_decode(input: &str, decimal_places: u32) -> MathResult<Uint256> {
    let (whole, fractional) = match input.split_once('.') {
        Some((whole, fractional)) => (whole, Some(fractional)),
        None => (input, None),
    };

    if !is_ascii_digits(whole) {
        return Err(MathError::parse_number::<Uint256, _, _>(
            input,
            "whole part must be one or more ASCII digits",
        ));
    }

    // A second dot ends up in the fractional part and is rejected here.
    if let Some(fractional) = fractional {
        if !is_ascii_digits(fractional) {
            return Err(MathError::parse_number::<Uint256, _, _>(
                input,
                "fractional part must be one or more ASCII digits",
            ));
        }
    }

    let places = decimal_places as usize;
    let fractional = fractional.unwrap_or("0");
    let fractional = if fractional.len() >= places {
        fractional[..places].to_string()
    } else {
        format!("{fractional:0<places$}")
    };

    let whole_atomics = Uint256::from_str(&format!("{whole}{}", "0".repeat(places)))
        .map_err(|_| MathError::parse_number::<Uint256, _, _>(input, "value too big"))?;

    let fractional_atomics = if fractional.is_empty() {
        Uint256::default()
    } else {
        Uint256::from_str(&fractional)?
    };

    whole_atomics
        .checked_add(fractional_atomics)
        .map_err(|_| MathError::parse_number::<Uint256, _, _>(input, "value too big"))
}

fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

// ----------------------------------- tests -----------------------------------
