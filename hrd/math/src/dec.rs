use {
    crate::{
        decode, encode, try_decode, FixedPoint, IsZero, MathError, MathResult, NumberConst,
        Uint256,
    },
    serde::{de, ser},
    std::{
        cmp::Ordering,
        fmt::{self, Display},
        marker::PhantomData,
        str::FromStr,
    },
};

/// Powers of ten as the nearest `f64`, so that `10^S` matches the literal the
/// compiler would produce for `1eS`.
const POWERS_OF_TEN: [f64; 39] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22, 1e23, 1e24, 1e25, 1e26, 1e27, 1e28, 1e29, 1e30, 1e31,
    1e32, 1e33, 1e34, 1e35, 1e36, 1e37, 1e38,
];

/// An unsigned fixed-point decimal with `S` decimal places, backed by a
/// [`Uint256`] numerator.
///
/// `S` can be at most 38, so that `10^S` fits in a `u128` at compile time.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dec<const S: u32>(pub(crate) Uint256);

/// Token amount with 18 decimal places.
pub type Atto = Dec<18>;

/// Rate or accumulator with 27 decimal places.
pub type Ronto = Dec<27>;

impl<const S: u32> FixedPoint for Dec<S> {
    const DECIMAL_PLACES: u32 = S;
    const PRECISION: Uint256 = Uint256::new_from_u128(10_u128.pow(S));
    const TICK: Self = Self(Uint256::ONE);
}

impl<const S: u32> Dec<S> {
    /// Create a new [`Dec`] _without_ adding decimal places.
    ///
    /// ```rust
    /// use hrd_math::{Atto, Uint256};
    ///
    /// let decimal = Atto::raw(Uint256::new_from_u128(100));
    /// assert_eq!(decimal.to_string(), "0.000000000000000100");
    /// ```
    pub const fn raw(value: Uint256) -> Self {
        Self(value)
    }

    /// Create a new [`Dec`] adding decimal places.
    ///
    /// ```rust
    /// use hrd_math::Atto;
    ///
    /// assert_eq!(Atto::new(100).to_string(), "100");
    /// ```
    ///
    /// ## Panics
    ///
    /// `x * 10^S` is computed in `u128`, so `x` must not exceed
    /// `u128::MAX / 10^S`: about 3.4e20 for [`Atto`] and 3.4e11 for [`Ronto`].
    /// Larger values go through [`FromStr`] or [`Dec::checked_from_atomics`].
    pub const fn new(x: u128) -> Self {
        Self(Uint256::new_from_u128(x * 10_u128.pow(S)))
    }

    pub const fn numerator(&self) -> &Uint256 {
        &self.0
    }

    /// Build a decimal from an integer that carries `decimal_places` decimal
    /// places. Extra precision is truncated.
    ///
    /// This is how a 27-decimal accumulator becomes an 18-decimal ratio:
    ///
    /// ```rust
    /// use hrd_math::{Atto, Uint256};
    ///
    /// let chi = Uint256::new_from_u128(1_020_000_000_999_999_999_999_999_999);
    /// let ratio = Atto::checked_from_atomics(chi, 27).unwrap();
    /// assert_eq!(ratio.to_string(), "1.020000000999999999");
    /// ```
    pub fn checked_from_atomics(atomics: Uint256, decimal_places: u32) -> MathResult<Self> {
        let inner = match decimal_places.cmp(&S) {
            Ordering::Less => {
                let factor = Uint256::TEN.checked_pow(S - decimal_places)?;
                atomics.checked_mul(factor)?
            },
            Ordering::Equal => atomics,
            Ordering::Greater => match Uint256::TEN.checked_pow(decimal_places - S) {
                Ok(factor) => atomics.checked_div(factor)?,
                // The factor exceeds 256 bits, so any numerator divided by it is 0.
                Err(_) => Uint256::ZERO,
            },
        };

        Ok(Self(inner))
    }

    /// Render with at most `max_fractional_digits` fractional digits. See
    /// [`encode`](crate::encode) for the exact rules.
    pub fn encode(&self, max_fractional_digits: Option<usize>) -> String {
        encode(self.0, S, max_fractional_digits)
    }

    /// Parse user input. See [`decode`](crate::decode) for the exact rules.
    pub fn decode(input: &str) -> Option<Self> {
        decode(input, S).map(Self)
    }

    /// Lossy conversion to a plain float: `numerator / 10^S`.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64() / POWERS_OF_TEN[S as usize]
    }

    pub fn checked_add(self, rhs: Self) -> MathResult<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> MathResult<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// `None` for a zero value, `Some` otherwise.
    pub fn non_zero(self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self)
        }
    }
}

impl<const S: u32> Display for Dec<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Precision flag acts as the truncation limit, e.g. `{:.3}`.
        f.write_str(&self.encode(f.precision()))
    }
}

impl<const S: u32> FromStr for Dec<S> {
    type Err = MathError;

    /// Converts the decimal string to a Dec.
    /// Possible inputs: "1.23", "1", "000012", "1.123000000"
    /// Disallowed: "", ".23", "1.", "-1", "1e5"
    ///
    /// Fractional digits beyond `S` are truncated, never rounded.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        try_decode(input, S).map(Self).map_err(|err| match err {
            MathError::ParseNumber { input, reason, .. } => {
                MathError::parse_number::<Self, _, _>(input, reason)
            },
            err => err,
        })
    }
}

impl<const S: u32> ser::Serialize for Dec<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de, const S: u32> de::Deserialize<'de> for Dec<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(DecVisitor::<S>(PhantomData))
    }
}

struct DecVisitor<const S: u32>(PhantomData<Dec<S>>);

impl<const S: u32> de::Visitor<'_> for DecVisitor<S> {
    type Value = Dec<S>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("string-encoded decimal")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Dec::from_str(v).map_err(E::custom)
    }
}

// ----------------------------------- tests -----------------------------------
