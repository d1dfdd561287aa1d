use {
    crate::{Bytes, Encoder, StdError, StdResult},
    hrd_math::{MathError, Uint256},
    serde::{de, ser},
    std::{
        fmt::{self, Debug, Display},
        marker::PhantomData,
        str::FromStr,
    },
};

/// A wrapper over some bytes that encodes them into a string with a specific
/// encoding scheme.
#[derive(Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EncodedBytes<B, E>
where
    B: Bytes,
    E: Encoder,
{
    bytes: B,
    encoder: PhantomData<E>,
}

impl<B, E> EncodedBytes<B, E>
where
    B: Bytes,
    E: Encoder,
{
    pub const fn from_inner(bytes: B) -> Self {
        Self {
            bytes,
            encoder: PhantomData,
        }
    }
}

impl<E, const N: usize> EncodedBytes<[u8; N], E>
where
    E: Encoder,
{
    /// Interpret the bytes as a big-endian unsigned integer.
    ///
    /// `N` must not exceed [`Uint256::BYTES`].
    pub fn to_uint(&self) -> Uint256 {
        let mut buf = [0; Uint256::BYTES];
        buf[Uint256::BYTES - N..].copy_from_slice(&self.bytes);
        Uint256::from_be_bytes(buf)
    }

    /// Take the low `N` bytes of a big-endian unsigned integer. Errors if the
    /// integer has any set bit above those bytes.
    pub fn from_uint(value: Uint256) -> StdResult<Self> {
        if value.bits() as usize > N * 8 {
            return Err(MathError::overflow_conversion::<_, Self>(value).into());
        }

        let mut bytes = [0; N];
        bytes.copy_from_slice(&value.to_be_bytes()[Uint256::BYTES - N..]);

        Ok(Self::from_inner(bytes))
    }
}

impl<B, E> Display for EncodedBytes<B, E>
where
    B: Bytes,
    E: Encoder,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}",
            E::PREFIX,
            E::ENCODING.encode(self.bytes.as_bytes())
        )
    }
}

impl<B, E> Debug for EncodedBytes<B, E>
where
    B: Bytes,
    E: Encoder,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}({}{})",
            E::NAME,
            E::PREFIX,
            E::ENCODING.encode(self.bytes.as_bytes())
        )
    }
}

impl<B, E> FromStr for EncodedBytes<B, E>
where
    B: Bytes,
    E: Encoder,
{
    type Err = StdError;

    /// The prefix is optional. Digits may be of either case.
    fn from_str(s: &str) -> StdResult<Self> {
        let digits = s.strip_prefix(E::PREFIX).unwrap_or(s);

        if digits.len() != B::LENGTH * 2 {
            return Err(StdError::deserialize::<Self, _>(
                E::NAME,
                format!(
                    "expecting {} hex digits, found {}",
                    B::LENGTH * 2,
                    digits.len()
                ),
            ));
        }

        let vec = E::DECODING.decode(digits.as_bytes())?;
        let bytes = B::try_from_vec(vec)?;

        Ok(Self::from_inner(bytes))
    }
}

impl<B, E> ser::Serialize for EncodedBytes<B, E>
where
    B: Bytes,
    E: Encoder,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de, B, E> de::Deserialize<'de> for EncodedBytes<B, E>
where
    B: Bytes,
    E: Encoder,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(Visitor(PhantomData, PhantomData))
    }
}

struct Visitor<B, E>(PhantomData<B>, PhantomData<E>);

impl<B, E> de::Visitor<'_> for Visitor<B, E>
where
    B: Bytes,
    E: Encoder,
{
    type Value = EncodedBytes<B, E>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a byte string in {} encoding", E::NAME)
    }

    fn visit_str<Err>(self, value: &str) -> Result<Self::Value, Err>
    where
        Err: de::Error,
    {
        Self::Value::from_str(value).map_err(Err::custom)
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        crate::{Addr, Hash256, StdError},
        hrd_math::{NumberConst, Uint256},
        std::str::FromStr,
        test_case::test_case,
    };

    #[test_case("0x0000000000000000000000000000000000000001"; "with prefix")]
    #[test_case("0000000000000000000000000000000000000001"; "without prefix")]
    fn prefix_is_optional(input: &str) {
        assert_eq!(Addr::from_str(input).unwrap(), Addr::mock(1));
    }

    #[test]
    fn mixed_case_digits_are_accepted() {
        let upper = Addr::from_str("0xABCDEF0000000000000000000000000000000000").unwrap();
        let lower = Addr::from_str("0xabcdef0000000000000000000000000000000000").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.to_string(), "0xabcdef0000000000000000000000000000000000");
    }

    #[test_case("0x"; "prefix only")]
    #[test_case("0xZZ"; "short and not hex")]
    #[test_case("0x00000000000000000000000000000000000000"; "too short")]
    #[test_case("0x000000000000000000000000000000000000000001"; "too long")]
    #[test_case("0X0000000000000000000000000000000000000001"; "uppercase prefix")]
    fn rejecting_wrong_length(input: &str) {
        assert!(matches!(
            Addr::from_str(input),
            Err(StdError::Deserialize { .. })
        ));
    }

    #[test]
    fn rejecting_non_hex_digits() {
        assert!(matches!(
            Addr::from_str("0xg000000000000000000000000000000000000000"),
            Err(StdError::Decode(_))
        ));
    }

    #[test]
    fn debug_names_the_encoder() {
        assert_eq!(
            format!("{:?}", Addr::mock(255)),
            "Addr(0x00000000000000000000000000000000000000ff)"
        );
    }

    #[test]
    fn uint_conversion_checks_width() {
        // 2^160 - 1
        let max_addr =
            Uint256::from_str("1461501637330902918203684832716283019655932542975").unwrap();
        assert_eq!(Addr::from_uint(max_addr).unwrap(), Addr::from_array([0xff; 20]));

        let too_big = max_addr.checked_add(Uint256::ONE).unwrap();
        assert!(matches!(Addr::from_uint(too_big), Err(StdError::Math(_))));

        assert_eq!(Hash256::from_uint(Uint256::MAX).unwrap().to_uint(), Uint256::MAX);
    }

    #[test]
    fn serde_uses_prefixed_hex() {
        let addr = Addr::mock(7);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"0x0000000000000000000000000000000000000007\"");
        assert_eq!(serde_json::from_str::<Addr>(&json).unwrap(), addr);
        assert!(serde_json::from_str::<Addr>("\"0x07\"").is_err());
    }
}
