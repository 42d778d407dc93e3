use clap::{Parser, Subcommand};

use crate::sum::{ElementWidth, Reducer};

mod check;
mod demo;
mod sum;

#[derive(Parser, Debug)]
#[command(name = "kira-sumint", version, about = "Kira Sumint CLI")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sum ascending demo buffers with every reducer
    Demo(demo::DemoArgs),
    /// Sum a raw little-endian buffer file
    Sum(sum::SumArgs),
    /// Cross-check the vector reducers against the scalar ones
    Check(check::CheckArgs),
}

impl Cli {
    pub fn dispatch(self) -> anyhow::Result<()> {
        match self.command {
            Command::Demo(args) => demo::handle(args),
            Command::Sum(args) => sum::handle(args),
            Command::Check(args) => check::handle(args),
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidthArg {
    #[value(name = "8")]
    Bits8,
    #[value(name = "32")]
    Bits32,
}

impl From<WidthArg> for ElementWidth {
    fn from(value: WidthArg) -> Self {
        match value {
            WidthArg::Bits8 => ElementWidth::Bits8,
            WidthArg::Bits32 => ElementWidth::Bits32,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReducerArg {
    Scalar,
    Vector,
}

impl From<ReducerArg> for Reducer {
    fn from(value: ReducerArg) -> Self {
        match value {
            ReducerArg::Scalar => Reducer::Scalar,
            ReducerArg::Vector => Reducer::Vector,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;
