use crate::config::RequestConfig;
use crate::core::columns::{self, wall_window};
use crate::core::{GenerationOutput, SoilModelGenerator, WallData};
use crate::error::SoilResult;
use crate::excel::WorkbookLoader;
use crate::types::SoilTable;
use crate::writer::{self, WrittenFiles};
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

/// Characters of the Soil Model shown by `--preview`
const PREVIEW_CHARS: usize = 2000;

/// Options of the generate command
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub file: PathBuf,
    /// YAML request file
    pub config: Option<PathBuf>,
    /// Values given on the command line
    pub overrides: RequestConfig,
    pub out_dir: PathBuf,
    pub preview: bool,
    pub dry_run: bool,
    pub verbose: bool,
}

/// First `PREVIEW_CHARS` characters, with "..." when cut
fn preview_text(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Outputs a table of this width can produce
fn supported_outputs(width: usize) -> Vec<(&'static str, bool)> {
    vec![
        ("base materials", width > columns::E_INIT),
        ("int / 3E / 5E variants", width > columns::PHI_INTERFACE),
        ("wall data (.sba)", !wall_window(width).is_empty()),
    ]
}

/// Execute the inspect command
pub fn inspect(file: PathBuf, sheet: Option<String>, verbose: bool) -> SoilResult<()> {
    println!("{}", "🪨 Soilgen - Workbook Overview".bold().green());
    println!("   File: {}\n", file.display());

    let table = WorkbookLoader::new(&file).with_sheet(sheet).load()?;
    print_overview(&table, verbose);
    Ok(())
}

fn print_overview(table: &SoilTable, verbose: bool) {
    println!("   Rows:    {}", table.row_count());
    println!("   Columns: {}\n", table.width);

    if verbose {
        println!("{}", "📊 Columns:".cyan());
        for (idx, header) in table.headers.iter().enumerate() {
            if !header.is_empty() {
                println!("      [{:>2}] {}", idx, header);
            }
        }
        println!();
    }

    println!("{}", "🏗️  Soil layers:".cyan());
    for row in &table.rows {
        println!("      [{}] {}", row.index, row.label().bright_blue());
    }
    println!();

    for (name, supported) in supported_outputs(table.width) {
        if supported {
            println!("   {} {}", "✅".green(), name);
        } else {
            println!("   {} {}", "❌".red(), name);
        }
    }
    println!();
}

/// Execute the generate command
pub fn generate(options: GenerateOptions) -> SoilResult<GenerationOutput> {
    println!("{}", "🪨 Soilgen - Generating Soil Model".bold().green());
    println!("   Input:  {}", options.file.display());

    let config = match &options.config {
        Some(path) => {
            if options.verbose {
                println!("   Config: {}", path.display());
            }
            RequestConfig::load(path)?
        }
        None => RequestConfig::default(),
    }
    .merge(options.overrides.clone());
    println!("   Output: {}\n", options.out_dir.display());

    if options.dry_run {
        println!(
            "{}",
            "📋 DRY RUN MODE - No files will be written\n".yellow()
        );
    }

    if options.verbose {
        println!("{}", "📖 Reading workbook...".cyan());
    }
    let table = WorkbookLoader::new(&options.file)
        .with_sheet(config.sheet.clone())
        .load()?;
    if options.verbose {
        println!(
            "   Found {} rows, {} columns\n",
            table.row_count(),
            table.width
        );
    }

    let request = config.to_request(&table)?;
    println!(
        "   Confidence: {}   Layers: {}",
        request.confidence.to_string().bright_yellow().bold(),
        request.selection.len()
    );
    let variants: Vec<&str> = [
        (request.variants.interface, "int"),
        (request.variants.three_e, "3E"),
        (request.variants.five_e, "5E"),
        (request.wall, "Wall"),
    ]
    .iter()
    .filter(|(on, _)| *on)
    .map(|(_, name)| *name)
    .collect();
    if !variants.is_empty() {
        println!("   Options: {}", variants.join(", "));
    }
    println!();

    let output = match config.seed {
        Some(seed) => SoilModelGenerator::seeded(seed).generate(&table, &request)?,
        None => SoilModelGenerator::from_os_rng().generate(&table, &request)?,
    };

    if output.wall_data == WallData::Unavailable {
        println!(
            "{}",
            "⚠️  Columns AS:AY not found - wall data skipped".yellow()
        );
    }

    if options.dry_run {
        println!("{}", "📋 Dry run complete - no files written".yellow());
    } else {
        let written = writer::write_outputs(&options.out_dir, &output)?;
        info!(path = %written.soil_model.display(), "wrote soil model");
        print_written(&written);
    }

    println!(
        "{}",
        format!("✅ Generated {} layer(s)", output.layers).bold().green()
    );

    if options.preview {
        println!("\n{}", "👀 Soil Model preview:".cyan());
        println!("{}", preview_text(&output.soil_model));
    }

    Ok(output)
}

fn print_written(written: &WrittenFiles) {
    println!("   📄 {}", written.soil_model.display());
    if let Some(path) = &written.wall_data {
        println!("   📄 {}", path.display());
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
