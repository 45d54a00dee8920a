//! Command-line interface for the structural validator.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use textwrap::{fill, Options};

use crate::articles::extract_articles;
use crate::config::TEXT_WRAP_WIDTH;
use crate::error::Result;
use crate::http::{create_client, download_page};
use crate::text::strip_html;
use crate::validate::{validate_document, CheckStatus};

/// Direito Estrutura - QA validator for scraped Brazilian legislation.
#[derive(Parser)]
#[command(name = "direito-estrutura")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the structure of a statute text file.
    Validar {
        /// Path to the text file to validate
        arquivo: PathBuf,

        /// Output the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the articles extracted from a statute text file.
    Artigos {
        /// Path to the text file to parse
        arquivo: PathBuf,
    },

    /// Download a statute page, strip HTML, and print or save the text.
    Baixar {
        /// Primary source URL
        url: String,

        /// Additional mirror URLs, tried in order on failure
        #[arg(short, long)]
        mirror: Vec<String>,

        /// Write the text to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validar { arquivo, json } => validar_command(&arquivo, json),
        Commands::Artigos { arquivo } => artigos_command(&arquivo),
        Commands::Baixar {
            url,
            mirror,
            output,
        } => baixar_command(&url, &mirror, output.as_deref()),
    }
}

/// Execute the validar command.
fn validar_command(arquivo: &Path, json: bool) -> Result<()> {
    let text = fs::read_to_string(arquivo)?;
    let report = validate_document(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", style("Relatório de validação").bold());
    println!();

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Success => style("ok").green(),
            CheckStatus::Warning => style("aviso").yellow(),
            CheckStatus::Error => style("erro").red().bold(),
        };
        println!("  [{marker:>5}] {:<14} {}", check.name, check.message);
    }

    println!();
    println!(
        "  Artigos: {}  Duplicatas: {}  Lacunas: {}",
        report.artigos.len(),
        report.duplicatas.len(),
        report.lacunas.len()
    );
    println!(
        "  Pontuação: {}  Válido: {}",
        style(format!("{:.1}%", report.score)).bold(),
        if report.is_valid {
            style("sim").green().bold()
        } else {
            style("não").red().bold()
        }
    );

    Ok(())
}

/// Execute the artigos command.
fn artigos_command(arquivo: &Path) -> Result<()> {
    let text = fs::read_to_string(arquivo)?;
    let articles = extract_articles(&text);

    if articles.is_empty() {
        println!("Nenhum artigo encontrado.");
        return Ok(());
    }

    let options = Options::new(TEXT_WRAP_WIDTH).subsequent_indent("           ");
    for article in &articles {
        println!(
            "{} {}",
            style(format!("Art. {:<6}", article.number)).cyan().bold(),
            fill(&article.text, &options)
        );
    }

    Ok(())
}

/// Execute the baixar command.
fn baixar_command(url: &str, mirrors: &[String], output: Option<&Path>) -> Result<()> {
    let mut urls = Vec::with_capacity(1 + mirrors.len());
    urls.push(url.to_string());
    urls.extend_from_slice(mirrors);

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Baixando...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let client = create_client()?;
    let page = match download_page(&client, &urls) {
        Ok(page) => page,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Extraindo texto...");
    let text = strip_html(&page);
    pb.finish_and_clear();

    if text.is_empty() {
        return Err(crate::error::EstruturaError::EmptyDocument(url.to_string()));
    }

    match output {
        Some(path) => {
            fs::write(path, &text)?;
            println!(
                "{} {}",
                style("Salvo em:").green().bold(),
                path.display()
            );
        }
        None => println!("{text}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_validar() {
        let cli = Cli::parse_from(["direito-estrutura", "validar", "lei.txt"]);

        match cli.command {
            Commands::Validar { arquivo, json } => {
                assert_eq!(arquivo, PathBuf::from("lei.txt"));
                assert!(!json);
            }
            _ => panic!("expected Validar"),
        }
    }

    #[test]
    fn test_cli_parse_baixar_with_mirrors() {
        let cli = Cli::parse_from([
            "direito-estrutura",
            "baixar",
            "https://example.com/lei",
            "--mirror",
            "https://mirror1.example.com/lei",
            "--mirror",
            "https://mirror2.example.com/lei",
        ]);

        match cli.command {
            Commands::Baixar { url, mirror, output } => {
                assert_eq!(url, "https://example.com/lei");
                assert_eq!(mirror.len(), 2);
                assert!(output.is_none());
            }
            _ => panic!("expected Baixar"),
        }
    }
}
