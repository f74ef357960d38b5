use clap::{Parser, Subcommand};
use colored::Colorize;
use soilgen::cli::{self, GenerateOptions};
use soilgen::config::RequestConfig;
use soilgen::error::SoilResult;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "SOILGEN_LOG";

#[derive(Parser)]
#[command(name = "soilgen")]
#[command(about = "Soil Model and .sba wall-data generator for geotechnical workbooks")]
#[command(long_about = "Soilgen - Soil Model generator

Reads a soil-property workbook (.xlsx, .xls, .ods) and writes the material
script for the modelling application. Rows 1-2 of the sheet are a title
block, row 3 holds the column headers, layer data starts on row 4.

COMMANDS:
  inspect   - Show the layers and which outputs the sheet supports
  generate  - Write soil_model_output.txt (and wall_data.sba)

EXAMPLES:
  soilgen inspect soils.xlsx
  soilgen generate soils.xlsx --all
  soilgen generate soils.xlsx -p 0.95 --int --e3 --wall --rows 0,2,5
  soilgen generate soils.xlsx --config request.yaml -o out/")]
#[command(version)]
struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show soil layers and supported outputs of a workbook
    Inspect {
        /// Path to the workbook
        file: PathBuf,

        /// Sheet name (default: first sheet)
        #[arg(short, long)]
        sheet: Option<String>,
    },

    #[command(long_about = "Generate the Soil Model script.

One Mohr-Coulomb material MC_<layer> is written per selected layer.
Optional variants follow each base material:
  --int   MC_<layer>_int  interface (cRef = 1, phi from column AF)
  --e3    MC_<layer>_3E   modulus from column AE, nu = 0.2
  --e5    MC_<layer>_5E   modulus from column AD, nu = 0.2

CONFIDENCE LEVEL:
  0.85  phi / c / gammaUnsat from columns F / G / Q
  0.95  phi / c / gammaUnsat from columns I / J / S

WALL DATA:
  --wall also writes wall_data.sba from columns AS:AY, column by column.
  If the sheet has none of these columns a warning is shown instead.

REQUEST FILE:
  --config request.yaml supplies any of: sheet, confidence, interface,
  three_e, five_e, wall, rows, layers, all, seed.
  Command-line options take precedence.")]
    /// Generate the Soil Model script and wall data
    Generate {
        /// Path to the workbook
        file: PathBuf,

        /// Sheet name (default: first sheet)
        #[arg(short, long)]
        sheet: Option<String>,

        /// YAML request file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Confidence level
        #[arg(short = 'p', long, value_parser = ["0.85", "0.95"])]
        confidence: Option<String>,

        /// Add interface materials (_int)
        #[arg(long = "int")]
        interface: bool,

        /// Add 3E materials
        #[arg(long = "e3")]
        three_e: bool,

        /// Add 5E materials
        #[arg(long = "e5")]
        five_e: bool,

        /// Also write wall_data.sba
        #[arg(long)]
        wall: bool,

        /// Data row indices to include (0-based, comma separated)
        #[arg(short, long, value_delimiter = ',')]
        rows: Vec<usize>,

        /// Layer labels to include (comma separated)
        #[arg(short, long, value_delimiter = ',')]
        layers: Vec<String>,

        /// Include every layer
        #[arg(short, long)]
        all: bool,

        /// Seed for the material colours
        #[arg(long, env = "SOILGEN_SEED")]
        seed: Option<u64>,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Print the beginning of the Soil Model
        #[arg(long)]
        preview: bool,

        /// Generate without writing files
        #[arg(short = 'n', long)]
        dry_run: bool,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "soilgen=debug" } else { "soilgen=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "❌ Error:".bold().red(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> SoilResult<()> {
    match cli.command {
        Commands::Inspect { file, sheet } => cli::inspect(file, sheet, cli.verbose),

        Commands::Generate {
            file,
            sheet,
            config,
            confidence,
            interface,
            three_e,
            five_e,
            wall,
            rows,
            layers,
            all,
            seed,
            out_dir,
            preview,
            dry_run,
        } => cli::generate(GenerateOptions {
            file,
            config,
            overrides: RequestConfig {
                sheet,
                confidence,
                interface,
                three_e,
                five_e,
                wall,
                rows,
                layers,
                all,
                seed,
            },
            out_dir,
            preview,
            dry_run,
            verbose: cli.verbose,
        })
        .map(|_| ()),
    }
}
