use {
    adder_math::{Adder, OverflowMode, parse_operand},
    clap::Parser,
};

#[derive(Parser, Debug)]
#[command(allow_negative_numbers = true)]
pub struct SumCmd {
    /// First operand
    a: String,

    /// Second operand
    b: String,

    /// Overflow behavior [default: from config file]
    #[arg(long)]
    overflow: Option<OverflowMode>,
}

impl SumCmd {
    pub fn run(self, default_mode: OverflowMode) -> anyhow::Result<()> {
        println!("{}", self.compute(default_mode)?);

        Ok(())
    }

    fn compute(&self, default_mode: OverflowMode) -> anyhow::Result<i64> {
        let adder = Adder::new(self.overflow.unwrap_or(default_mode));
        let a = parse_operand::<i64>(&self.a)?;
        let b = parse_operand::<i64>(&self.b)?;

        tracing::debug!(a, b, mode = %adder.mode(), "Computing sum");

        Ok(adder.add(a, b)?)
    }
}

#[derive(Parser, Debug)]
#[command(allow_negative_numbers = true)]
pub struct SumAllCmd {
    /// Operands to add, left to right
    operands: Vec<String>,

    /// Overflow behavior [default: from config file]
    #[arg(long)]
    overflow: Option<OverflowMode>,
}

impl SumAllCmd {
    pub fn run(self, default_mode: OverflowMode) -> anyhow::Result<()> {
        println!("{}", self.compute(default_mode)?);

        Ok(())
    }

    fn compute(&self, default_mode: OverflowMode) -> anyhow::Result<i64> {
        let adder = Adder::new(self.overflow.unwrap_or(default_mode));
        let operands = self
            .operands
            .iter()
            .map(|s| parse_operand::<i64>(s))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(count = operands.len(), mode = %adder.mode(), "Computing sum of operands");

        Ok(adder.add_all(operands)?)
    }
}
