use {
    crate::{parse_address, Addr},
    hrd_math::Atto,
};

/// Text typed into an amount field.
///
/// Half-typed input is routine while the user is typing, so parsing never
/// fails loudly: it yields `None` until the text denotes a positive amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountInput;

impl AmountInput {
    /// A positive 18-decimal amount, or `None` if the text is malformed or
    /// denotes zero.
    pub fn parse(input: &str) -> Option<Atto> {
        Atto::decode(input)?.non_zero()
    }

    /// Text that fills the field with the whole balance. Parsing it back
    /// yields exactly `balance`.
    pub fn max(balance: Atto) -> String {
        balance.encode(None)
    }
}

/// A transfer the user is ready to submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendIntent {
    pub recipient: Addr,
    pub amount: Atto,
}

impl SendIntent {
    /// Both fields must be valid for the intent to exist.
    pub fn parse(recipient: &str, amount: &str) -> Option<Self> {
        Some(Self {
            recipient: parse_address(recipient)?,
            amount: AmountInput::parse(amount)?,
        })
    }
}

// ----------------------------------- tests -----------------------------------
