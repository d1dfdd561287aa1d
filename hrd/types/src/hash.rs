use {
    crate::{EncodedBytes, HashEncoder},
    std::str::FromStr,
};

/// A 32-byte hash, such as a transaction hash, written as `0x` followed by 64
/// lowercase hex digits.
pub type Hash256 = EncodedBytes<[u8; 32], HashEncoder>;

impl Hash256 {
    pub const LENGTH: usize = 32;
    pub const ZERO: Self = Self::from_inner([0; Self::LENGTH]);

    pub const fn from_array(array: [u8; Self::LENGTH]) -> Self {
        Self::from_inner(array)
    }
}

/// Parse a 32-byte hash. Returns `None` for anything that isn't an optional
/// `0x` followed by exactly 64 hex digits.
pub fn parse_hash(input: &str) -> Option<Hash256> {
    Hash256::from_str(input).ok()
}

pub fn format_hash(hash: &Hash256) -> String {
    hash.to_string()
}

// ----------------------------------- tests -----------------------------------
