//! sheetlens CLI - inspect xlsx workbooks from the command line

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{LevelFilter, Metadata, Record};
use sheetlens::prelude::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sheetlens")]
#[command(author, version, about = "Read-only inspection of xlsx workbooks")]
struct Cli {
    /// Print decoder diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the entries of the xlsx package
    Entries {
        /// Input workbook (.xlsx)
        input: PathBuf,
    },

    /// List the sheets of a workbook
    Sheets {
        /// Input workbook (.xlsx)
        input: PathBuf,
    },

    /// Show a single cell
    Cell {
        /// Input workbook (.xlsx)
        input: PathBuf,

        /// Cell address (e.g. B2)
        address: String,

        /// Worksheet number (1-based)
        #[arg(short, long, default_value = "1")]
        sheet: u32,
    },

    /// Show the merged range having a cell as a corner
    Merge {
        /// Input workbook (.xlsx)
        input: PathBuf,

        /// Corner cell address (e.g. H1)
        start: String,

        /// Worksheet number (1-based)
        #[arg(short, long, default_value = "1")]
        sheet: u32,
    },

    /// List all merged ranges of a worksheet
    Merges {
        /// Input workbook (.xlsx)
        input: PathBuf,

        /// Worksheet number (1-based)
        #[arg(short, long, default_value = "1")]
        sheet: u32,
    },

    /// Show the declared used range of a worksheet
    Dimension {
        /// Input workbook (.xlsx)
        input: PathBuf,

        /// Worksheet number (1-based)
        #[arg(short, long, default_value = "1")]
        sheet: u32,
    },

    /// Export cells as JSON to stdout or a file
    Json {
        /// Input workbook (.xlsx)
        input: PathBuf,

        /// Cell range (default: the worksheet dimension)
        #[arg(short, long)]
        range: Option<String>,

        /// Worksheet number (1-based)
        #[arg(short, long, default_value = "1")]
        sheet: u32,

        /// Output JSON file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the document on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Summarize the charts of a workbook
    Charts {
        /// Input workbook (.xlsx)
        input: PathBuf,
    },
}

/// Writes log records to stderr
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: bool) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        });
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Entries { input } => list_entries(&input),
        Commands::Sheets { input } => list_sheets(&input),
        Commands::Cell {
            input,
            address,
            sheet,
        } => show_cell(&input, &address, sheet),
        Commands::Merge {
            input,
            start,
            sheet,
        } => show_merge(&input, &start, sheet),
        Commands::Merges { input, sheet } => list_merges(&input, sheet),
        Commands::Dimension { input, sheet } => show_dimension(&input, sheet),
        Commands::Json {
            input,
            range,
            sheet,
            output,
            compact,
        } => export_json(&input, range.as_deref(), sheet, output.as_deref(), compact),
        Commands::Charts { input } => list_charts(&input),
    }
}

fn open(input: &Path) -> Result<XlsxArchive> {
    XlsxArchive::open(input).with_context(|| format!("Failed to open '{}'", input.display()))
}

fn list_entries(input: &Path) -> Result<()> {
    let archive = open(input)?;
    for name in archive.entry_names() {
        println!("{}", name);
    }
    Ok(())
}

fn list_sheets(input: &Path) -> Result<()> {
    let archive = open(input)?;
    for (i, sheet) in archive.workbook().sheets().iter().enumerate() {
        match &sheet.state {
            Some(state) => println!("{}\t{}\t({})", i + 1, sheet.name, state),
            None => println!("{}\t{}", i + 1, sheet.name),
        }
    }
    Ok(())
}

fn show_cell(input: &Path, address: &str, sheet: u32) -> Result<()> {
    let addr = CellAddress::parse(address)
        .with_context(|| format!("Invalid cell address '{}'", address))?;

    let mut archive = open(input)?;
    let cell = archive
        .cell(addr.row, addr.col, sheet)
        .with_context(|| format!("Failed to read {} on sheet {}", address, sheet))?;

    println!("Address: {}", cell.address);
    println!("Value:   {}", cell.value);
    if !cell.formula.is_empty() {
        println!("Formula: ={}", cell.formula);
    }
    if cell.shared.is_rich() {
        println!("Runs:    {}", cell.shared.rpr.len());
    }

    let style = &cell.style;
    if !style.is_default() {
        if !style.num_fmt.format_code.is_empty() {
            println!("Format:  {} (id {})", style.num_fmt.format_code, style.num_fmt.id);
        }
        if !style.font.name.is_empty() {
            let mut flags = String::new();
            if style.font.b {
                flags.push_str(" bold");
            }
            if style.font.i {
                flags.push_str(" italic");
            }
            println!("Font:    {} {}{}", style.font.name, style.font.sz, flags);
        }
        if !style.fill.is_none() {
            println!("Fill:    {}", style.fill.pattern_type);
        }
        if style.border.has_any() {
            println!("Border:  yes");
        }
    }
    Ok(())
}

fn show_merge(input: &Path, start: &str, sheet: u32) -> Result<()> {
    let mut archive = open(input)?;
    let range = archive
        .merge_range(&start.to_uppercase(), sheet)
        .with_context(|| format!("Failed to read merges of sheet {}", sheet))?;

    if range.is_empty() {
        eprintln!("{} is not a corner of a merged range", start);
    } else {
        println!("{}", range);
    }
    Ok(())
}

fn list_merges(input: &Path, sheet: u32) -> Result<()> {
    let mut archive = open(input)?;
    let all = archive
        .merge_ranges(sheet)
        .with_context(|| format!("Failed to read merges of sheet {}", sheet))?;

    for range in all.values().flatten() {
        println!("{}", range);
    }
    Ok(())
}

fn show_dimension(input: &Path, sheet: u32) -> Result<()> {
    let mut archive = open(input)?;
    match archive.dimension(sheet)? {
        Some(range) => println!(
            "{}\t{} rows x {} columns",
            range,
            range.row_count(),
            range.col_count()
        ),
        None => eprintln!("Sheet {} declares no dimension", sheet),
    }
    Ok(())
}

fn export_json(
    input: &Path,
    range: Option<&str>,
    sheet: u32,
    output: Option<&Path>,
    compact: bool,
) -> Result<()> {
    let mut archive = open(input)?;

    let range = match range {
        Some(text) => {
            CellRange::parse(text).with_context(|| format!("Invalid range '{}'", text))?
        }
        None => match archive.dimension(sheet)? {
            Some(range) => range,
            None => bail!("Sheet {} declares no dimension; pass --range", sheet),
        },
    };

    let options = if compact {
        ExportOptions::compact()
    } else {
        ExportOptions::default()
    };

    if let Some(output_path) = output {
        archive
            .write_json(output_path, &range, sheet, &options)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!(
            "Wrote {} cells to '{}'",
            range.cell_count(),
            output_path.display()
        );
    } else {
        let json = archive.to_json(&range, sheet, &options)?;
        let mut stdout = io::stdout();
        writeln!(stdout, "{}", json).context("Failed to write to stdout")?;
    }

    Ok(())
}

fn list_charts(input: &Path) -> Result<()> {
    let mut archive = open(input)?;
    let count = archive.chart_parts().len();

    for index in 1..=count {
        let Some(chart) = archive.chart(index)? else {
            continue;
        };

        let kind = chart.kind.map_or("unsupported", |k| k.element_name());
        println!("{}\t{}\t{}", index, chart.part, kind);
        if let Some(title) = &chart.title {
            println!("  title: {}", title);
        }
        for series in &chart.series {
            let values = series.values.as_ref().map_or("", |v| v.formula.as_str());
            let points = series.values.as_ref().map_or(0, |v| v.cache.len());
            println!("  series: {} ({} cached points)", values, points);
        }
    }

    if count == 0 {
        log::debug!("{} has no chart parts", input.display());
    }
    Ok(())
}
