// Cotador CLI - headless quote-building operations

mod exit_codes;
mod import;
mod quote;
mod util;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::{EXIT_IO, EXIT_PARSE, EXIT_SUCCESS};

#[derive(Parser)]
#[command(name = "cotador")]
#[command(about = "Commercial quote builder (CLI mode, headless)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a price-list spreadsheet into a service catalog
    #[command(after_help = "\
Examples:
  cotador import tabela-precos.xlsx -o catalog.json
  cotador import tabela-precos.xlsx --vocab fornecedor.toml
  cotador import tabela-precos.xlsx -q > catalog.json")]
    Import {
        /// Price-list workbook (.xlsx, .xls, .xlsb, .ods)
        input: PathBuf,

        /// Output file (omit for stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// TOML file extending the header-detection vocabulary
        #[arg(long)]
        vocab: Option<PathBuf>,

        /// Suppress the stderr summary line
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// List the entries of an imported catalog
    Catalog {
        /// Catalog file produced by `cotador import`
        catalog: PathBuf,
    },

    /// Scaffold a new quote document stamped with the company profile
    New {
        /// Output file (omit for stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Compute section and document totals of a quote
    #[command(after_help = "\
Materials and supplemental extras are reported as separate figures;
`Total materiais` never includes extras.")]
    Total {
        /// Quote document JSON
        quote: PathBuf,

        /// Emit the figures as JSON instead of the human listing
        #[arg(long)]
        json: bool,
    },

    /// Refine the technical notes through the configured AI provider
    #[command(after_help = "\
If no provider is configured (or the call fails) the document is written
back with the notes unchanged.")]
    Refine {
        /// Quote document JSON
        quote: PathBuf,

        /// Output file (omit for stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Import {
            input,
            output,
            vocab,
            quiet,
        } => import::cmd_import(input, output, vocab, quiet),
        Commands::Catalog { catalog } => quote::cmd_catalog(catalog),
        Commands::New { output } => quote::cmd_new(output),
        Commands::Total { quote, json } => quote::cmd_total(quote, json),
        Commands::Refine { quote, output } => quote::cmd_refine(quote, output),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            eprintln!("error: {}", message);
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn io(msg: impl Into<String>) -> Self {
        Self {
            code: EXIT_IO,
            message: msg.into(),
            hint: None,
        }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self {
            code: EXIT_PARSE,
            message: msg.into(),
            hint: None,
        }
    }
}
