//! Multi-indicator ANOVA command
//!
//! Runs the full signal-tone comparison pipeline over the requested
//! indicator columns and prints one report block per column: F, p, the
//! significance verdict, effect sizes, and the optional Tukey HSD table.

use std::path::PathBuf;

use tonova_analysis::{
    analyzer::{IndicatorOutcome, IndicatorResult, SignalAnalyzer},
    posthoc::TukeyHsd,
};

use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AnalyzeArg {
    /// Path to the table JSON file (array of row objects)
    pub table: PathBuf,

    /// Name of the column holding the signal label
    #[arg(long)]
    pub label_column: String,

    /// Indicator column names to analyze (comma-separated)
    #[arg(long, value_delimiter = ',', required = true)]
    pub indicators: Vec<String>,

    /// Family-wise significance level
    #[arg(long, default_value_t = 0.05)]
    pub alpha: f64,

    /// Skip the Tukey HSD pairwise comparison
    #[arg(long)]
    pub no_post_hoc: bool,

    /// Write the outcomes as JSON to this path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let alpha = util::validate_alpha(arg.alpha)?;
    let table = util::read_table_file(&arg.table)?;

    let mut analyzer = SignalAnalyzer::new().with_alpha(alpha);
    if !arg.no_post_hoc {
        analyzer = analyzer.with_post_hoc(Box::new(TukeyHsd));
    }

    let outcomes = analyzer.analyze(&table, &arg.label_column, &arg.indicators)?;

    println!("Signal Tone Comparison Report (alpha = {alpha})");
    println!("==============================================");
    for outcome in &outcomes {
        println!();
        match outcome {
            IndicatorOutcome::Analyzed(result) => print_result(result, alpha),
            IndicatorOutcome::Skipped { column, reason } => {
                println!("=== {column} ===");
                println!("[skipped] {reason}");
            }
        }
    }

    if let Some(output) = &arg.output {
        util::write_json_file(&outcomes, output)?;
        println!("\nOutcomes saved to: {}", output.display());
    }

    Ok(())
}

fn print_result(result: &IndicatorResult, alpha: f64) {
    println!("=== {} ===", result.column);

    let tones = result
        .tones
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    println!("Groups: {tones}");

    println!(
        "F = {}, p = {}",
        util::format_stat(result.f_statistic),
        util::format_stat(result.p_value)
    );
    match result.significant {
        Some(true) => println!("=> Statistically significant differences (the signal matters)."),
        Some(false) => println!("=> No statistically significant differences."),
        None => println!("=> Verdict not applicable (degenerate variance)."),
    }
    println!(
        "eta2 = {}, omega2 = {}, effect strength: {}",
        util::format_stat(result.eta_squared),
        util::format_stat(result.omega_squared),
        result
            .strength
            .map_or("n/a", tonova_stats::effect_size::EffectStrength::label)
    );

    if let Some(table) = &result.post_hoc {
        println!("\n--- Tukey HSD (family-wise alpha = {alpha}) ---");
        println!(
            "{:<18} {:>10} {:>10} {:>10} {:>8} {:>8}",
            "pair", "mean diff", "ci lower", "ci upper", "p adj", "reject"
        );
        for row in &table.rows {
            println!(
                "{:<18} {:>10.4} {:>10.4} {:>10.4} {:>8.4} {:>8}",
                format!("{} vs {}", row.pair.0, row.pair.1),
                row.mean_difference,
                row.ci_lower,
                row.ci_upper,
                row.adjusted_p,
                row.reject
            );
        }
    }
}
