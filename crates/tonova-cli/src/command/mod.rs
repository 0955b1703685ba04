use clap::{Parser, Subcommand};

use self::{analyze::AnalyzeArg, levene::LeveneArg};

mod analyze;
mod levene;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Compare indicator columns across signal tones (one-way ANOVA)
    Analyze(#[clap(flatten)] AnalyzeArg),
    /// Check homogeneity of variances across signal tones (Levene's test)
    Levene(#[clap(flatten)] LeveneArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Analyze(arg) => analyze::run(&arg)?,
        Mode::Levene(arg) => levene::run(&arg)?,
    }
    Ok(())
}
