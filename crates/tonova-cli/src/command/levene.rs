//! Variance-homogeneity command
//!
//! Partitions one value column by signal tone and runs Levene's test
//! (Brown-Forsythe by default) to check whether the group variances can be
//! treated as equal — an assumption of the ANOVA F test.

use std::path::PathBuf;

use anyhow::Context;
use tonova_analysis::{
    homogeneity::VarianceHomogeneity,
    partition::{normalize_labels, partition_column},
};
use tonova_stats::levene::Center;

use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct LeveneArg {
    /// Path to the table JSON file (array of row objects)
    pub table: PathBuf,

    /// Name of the column holding the signal label
    #[arg(long)]
    pub label_column: String,

    /// Name of the numeric column to test
    #[arg(long)]
    pub value_column: String,

    /// Significance level for the verdict
    #[arg(long, default_value_t = 0.05)]
    pub alpha: f64,

    /// Per-group centering: median (robust) or mean (classic)
    #[arg(long, default_value = "median")]
    pub center: CenterArg,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub(crate) enum CenterArg {
    Median,
    Mean,
}

impl From<CenterArg> for Center {
    fn from(arg: CenterArg) -> Self {
        match arg {
            CenterArg::Median => Center::Median,
            CenterArg::Mean => Center::Mean,
        }
    }
}

pub(crate) fn run(arg: &LeveneArg) -> anyhow::Result<()> {
    let alpha = util::validate_alpha(arg.alpha)?;
    let table = util::read_table_file(&arg.table)?;

    let tones = normalize_labels(&table, &arg.label_column).with_context(|| {
        format!("label column {:?} not found in table", arg.label_column)
    })?;
    let groups = partition_column(&table, &tones, &arg.value_column)
        .with_context(|| format!("cannot partition column {:?}", arg.value_column))?;

    println!("Levene Test Report (alpha = {alpha})");
    println!("====================================");
    for group in &groups {
        println!("{}: {} value(s)", group.tone, group.values.len());
    }

    let Some(check) = VarianceHomogeneity::from_groups(&groups, arg.center.into(), alpha) else {
        anyhow::bail!("need at least two tones with two or more values each");
    };

    println!();
    println!("W = {}", util::format_stat(check.statistic));
    println!("p = {}", util::format_stat(check.p_value));
    match check.equal_variances {
        Some(true) => {
            println!("=> No evidence against equal variances; the groups can be treated as homogeneous.");
        }
        Some(false) => {
            println!("=> Variances differ significantly; the groups are heterogeneous.");
        }
        None => println!("=> Test not applicable (degenerate deviations)."),
    }

    Ok(())
}
