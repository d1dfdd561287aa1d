use {
    crate::{AddrEncoder, EncodedBytes},
    std::str::FromStr,
};

/// An account or contract address: 20 bytes, written as `0x` followed by 40
/// lowercase hex digits.
///
/// Addresses are validated when parsed or deserialized, so holding an `Addr`
/// means holding a well-formed address.
pub type Addr = EncodedBytes<[u8; 20], AddrEncoder>;

impl Addr {
    pub const LENGTH: usize = 20;

    pub const fn from_array(array: [u8; Self::LENGTH]) -> Self {
        Self::from_inner(array)
    }

    /// Generate a mock address for use in testing.
    pub const fn mock(index: u8) -> Self {
        let mut bytes = [0; Self::LENGTH];
        bytes[Self::LENGTH - 1] = index;
        Self::from_inner(bytes)
    }
}

/// Parse an address typed or pasted by the user. Returns `None` for anything
/// that isn't an optional `0x` followed by exactly 40 hex digits.
pub fn parse_address(input: &str) -> Option<Addr> {
    Addr::from_str(input).ok()
}

/// Canonical text form: `0x` and 40 lowercase hex digits.
pub fn format_address(addr: &Addr) -> String {
    addr.to_string()
}

// ----------------------------------- tests -----------------------------------
