use {
    crate::{MathError, MathResult},
    bnum::{cast::As, types::U256},
    serde::{de, ser},
    std::{
        fmt::{self, Display},
        str::FromStr,
    },
};

/// A 256-bit unsigned integer, the width of an EVM word.
///
/// Every on-chain balance, rate, and allowance fits in this type, including the
/// "unlimited" allowance `2^256 - 1`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uint256(pub(crate) U256);

impl Uint256 {
    /// The number of bytes in the big-endian representation.
    pub const BYTES: usize = 32;

    pub const fn new(value: U256) -> Self {
        Self(value)
    }

    pub const fn new_from_u128(value: u128) -> Self {
        Self(U256::from_digits([value as u64, (value >> 64) as u64, 0, 0]))
    }

    pub fn from_be_bytes(bytes: [u8; Self::BYTES]) -> Self {
        let mut digits = [0_u64; 4];
        for (digit, chunk) in digits.iter_mut().zip(bytes.rchunks_exact(8)) {
            let mut buf = [0_u8; 8];
            buf.copy_from_slice(chunk);
            *digit = u64::from_be_bytes(buf);
        }
        Self(U256::from_digits(digits))
    }

    pub fn to_be_bytes(self) -> [u8; Self::BYTES] {
        let mut bytes = [0_u8; Self::BYTES];
        for (chunk, digit) in bytes.rchunks_exact_mut(8).zip(self.0.digits()) {
            chunk.copy_from_slice(&digit.to_be_bytes());
        }
        bytes
    }

    /// Number of significant bits, i.e. the position of the highest set bit.
    pub fn bits(&self) -> u32 {
        self.0.bits()
    }

    /// Lossy conversion to the nearest double-precision float.
    pub fn to_f64(self) -> f64 {
        self.0.as_::<f64>()
    }

    pub fn checked_add(self, rhs: Self) -> MathResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or_else(|| MathError::overflow_add(self, rhs))
    }

    pub fn checked_sub(self, rhs: Self) -> MathResult<Self> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or_else(|| MathError::overflow_sub(self, rhs))
    }

    pub fn checked_mul(self, rhs: Self) -> MathResult<Self> {
        self.0
            .checked_mul(rhs.0)
            .map(Self)
            .ok_or_else(|| MathError::overflow_mul(self, rhs))
    }

    pub fn checked_div(self, rhs: Self) -> MathResult<Self> {
        self.0
            .checked_div(rhs.0)
            .map(Self)
            .ok_or_else(|| MathError::division_by_zero(self))
    }

    pub fn checked_pow(self, exp: u32) -> MathResult<Self> {
        self.0
            .checked_pow(exp)
            .map(Self)
            .ok_or_else(|| MathError::overflow_pow(self, exp))
    }

    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl From<u64> for Uint256 {
    fn from(value: u64) -> Self {
        Self::new_from_u128(value as u128)
    }
}

impl FromStr for Uint256 {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        U256::from_str_radix(s, 10)
            .map(Self)
            .map_err(|err| MathError::parse_number::<Self, _, _>(s, err))
    }
}

impl Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ser::Serialize for Uint256 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> de::Deserialize<'de> for Uint256 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(UintVisitor)
    }
}

struct UintVisitor;

impl de::Visitor<'_> for UintVisitor {
    type Value = Uint256;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string-encoded unsigned integer")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Uint256::from_str(v).map_err(E::custom)
    }
}

// ----------------------------------- tests -----------------------------------
