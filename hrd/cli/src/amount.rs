use {
    anyhow::anyhow,
    clap::Parser,
    hrd_math::{encode, try_decode, Uint256, ATTO_DECIMAL_PLACES},
};

#[derive(Parser)]
pub struct EncodeCmd {
    /// Integer amount in the smallest unit
    atomics: Uint256,

    /// Number of decimal places the integer carries
    #[arg(long, default_value_t = ATTO_DECIMAL_PLACES)]
    decimals: u32,

    /// Truncate the fractional part to this many digits
    #[arg(long)]
    digits: Option<usize>,
}

impl EncodeCmd {
    pub fn run(self) -> anyhow::Result<()> {
        println!("{}", self.output());
        Ok(())
    }

    fn output(&self) -> String {
        encode(self.atomics, self.decimals, self.digits)
    }
}

#[derive(Parser)]
pub struct DecodeCmd {
    /// Decimal string, e.g. "1.5"
    text: String,

    /// Number of decimal places of the resulting integer
    #[arg(long, default_value_t = ATTO_DECIMAL_PLACES)]
    decimals: u32,
}

impl DecodeCmd {
    pub fn run(self) -> anyhow::Result<()> {
        println!("{}", self.output()?);
        Ok(())
    }

    fn output(&self) -> anyhow::Result<String> {
        let atomics = try_decode(&self.text, self.decimals).map_err(|err| {
            tracing::debug!(%err, "Rejected decimal input");
            anyhow!("invalid decimal: `{}`", self.text)
        })?;

        Ok(atomics.to_string())
    }
}

// ----------------------------------- tests -----------------------------------
