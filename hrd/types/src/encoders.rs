use data_encoding::{Encoding, HEXLOWER, HEXLOWER_PERMISSIVE};

/// Describes a scheme for encoding bytes to strings.
pub trait Encoder {
    const NAME: &str;
    /// Used when rendering bytes to text.
    const ENCODING: Encoding;
    /// Used when parsing text; may be more lenient than `ENCODING`.
    const DECODING: Encoding;
    /// Always written; optional when parsing.
    const PREFIX: &str;
}

/// Binary encoder for addresses.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AddrEncoder;

impl Encoder for AddrEncoder {
    const DECODING: Encoding = HEXLOWER_PERMISSIVE;
    const ENCODING: Encoding = HEXLOWER;
    const NAME: &str = "Addr";
    const PREFIX: &str = "0x";
}

/// Binary encoder for hashes.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HashEncoder;

impl Encoder for HashEncoder {
    const DECODING: Encoding = HEXLOWER_PERMISSIVE;
    const ENCODING: Encoding = HEXLOWER;
    const NAME: &str = "Hash";
    const PREFIX: &str = "0x";
}
