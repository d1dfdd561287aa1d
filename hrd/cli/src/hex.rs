use {
    anyhow::anyhow,
    clap::Parser,
    hrd_math::Uint256,
    hrd_types::{format_address, format_hash, parse_address, parse_hash, Addr},
};

#[derive(Parser)]
pub struct AddressCmd {
    /// Hex address with or without `0x`, or a decimal integer with `--from-uint`
    input: String,

    /// Read the input as a decimal integer below 2^160
    #[arg(long, conflicts_with = "to_uint")]
    from_uint: bool,

    /// Print the address as a decimal integer
    #[arg(long)]
    to_uint: bool,
}

impl AddressCmd {
    pub fn run(self) -> anyhow::Result<()> {
        println!("{}", self.output()?);
        Ok(())
    }

    fn output(&self) -> anyhow::Result<String> {
        let addr = if self.from_uint {
            let value = self
                .input
                .parse::<Uint256>()
                .map_err(|_| anyhow!("invalid integer: `{}`", self.input))?;
            Addr::from_uint(value)?
        } else {
            parse_address(&self.input).ok_or_else(|| anyhow!("invalid address: `{}`", self.input))?
        };

        if self.to_uint {
            Ok(addr.to_uint().to_string())
        } else {
            Ok(format_address(&addr))
        }
    }
}

#[derive(Parser)]
pub struct HashCmd {
    /// Hex hash with or without `0x`
    input: String,
}

impl HashCmd {
    pub fn run(self) -> anyhow::Result<()> {
        println!("{}", self.output()?);
        Ok(())
    }

    fn output(&self) -> anyhow::Result<String> {
        let hash = parse_hash(&self.input).ok_or_else(|| anyhow!("invalid hash: `{}`", self.input))?;

        Ok(format_hash(&hash))
    }
}

// ----------------------------------- tests -----------------------------------
