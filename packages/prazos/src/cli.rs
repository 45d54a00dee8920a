//! Command-line interface for the deadline calculator.

use clap::{Parser, Subcommand};
use console::style;

use crate::calendar::weekday_name;
use crate::config::parse_date;
use crate::deadline::{compute_deadline, Regime};
use crate::error::Result;

/// Direito Prazos - Compute Brazilian procedural deadlines.
#[derive(Parser)]
#[command(name = "direito-prazos")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute a deadline from a start date and a day count.
    Calcular {
        /// Start date (termo inicial) in YYYY-MM-DD format
        data: String,

        /// Number of days in the time limit
        dias: i64,

        /// Counting regime: 'uteis' (business days) or 'corridos' (calendar days)
        #[arg(short, long, default_value = "uteis")]
        regime: String,

        /// Output the result as JSON
        #[arg(long)]
        json: bool,

        /// Suppress the step-by-step derivation
        #[arg(long)]
        sem_etapas: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Calcular {
            data,
            dias,
            regime,
            json,
            sem_etapas,
        } => calcular_command(&data, dias, &regime, json, sem_etapas),
    }
}

/// Execute the calcular command.
fn calcular_command(
    data: &str,
    dias: i64,
    regime: &str,
    json: bool,
    sem_etapas: bool,
) -> Result<()> {
    let start_date = parse_date(data)?;
    let regime = Regime::parse(regime)?;

    let deadline = compute_deadline(start_date, dias, regime)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&deadline)?);
        return Ok(());
    }

    println!(
        "{} {} ({} {})",
        style("Prazo final:").bold(),
        style(deadline.final_date.format("%Y-%m-%d")).green().bold(),
        weekday_name(deadline.final_date),
        style(deadline.regime.as_str()).cyan()
    );

    if !sem_etapas {
        println!();
        println!("{}", style("Derivação:").bold());
        println!("{}", deadline.render_trace());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_calcular() {
        let cli = Cli::parse_from(["direito-prazos", "calcular", "2024-03-01", "15"]);

        let Commands::Calcular {
            data,
            dias,
            regime,
            json,
            sem_etapas,
        } = cli.command;
        assert_eq!(data, "2024-03-01");
        assert_eq!(dias, 15);
        assert_eq!(regime, "uteis");
        assert!(!json);
        assert!(!sem_etapas);
    }

    #[test]
    fn test_cli_parse_calcular_with_regime() {
        let cli = Cli::parse_from([
            "direito-prazos",
            "calcular",
            "2024-12-20",
            "5",
            "--regime",
            "corridos",
            "--json",
        ]);

        let Commands::Calcular { regime, json, .. } = cli.command;
        assert_eq!(regime, "corridos");
        assert!(json);
    }
}
