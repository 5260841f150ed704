//! unitfix CLI
//!
//! Command-line tool for repairing unit table exports where each record is
//! split across a primary row and three property continuation lines.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use unitfix_core::{
    find_exports, fixed_output_path, parse_fixed, read_lines, reshape, write_lines, FixEntry,
    FixReport, ReshapeOptions,
};

#[derive(Parser)]
#[command(name = "unitfix")]
#[command(about = "Repair unit table exports split across 4-line groups", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Repair a single export file
    Fix {
        /// Input export file
        #[arg(default_value = "builder_units.csv")]
        input: PathBuf,

        /// Output path (defaults to the input name with a _fixed suffix)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Field separator
        #[arg(long, default_value_t = ',')]
        separator: char,
    },

    /// Report what a repair would do, without writing anything
    Inspect {
        /// Input export file
        file: PathBuf,

        /// Field separator
        #[arg(long, default_value_t = ',')]
        separator: char,
    },

    /// Repair in memory and display the result
    Show {
        /// Input export file
        file: PathBuf,

        /// Maximum number of rows to display
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,

        /// Field separator
        #[arg(long, default_value_t = ',')]
        separator: char,
    },

    /// Repair every export found under the given roots
    Batch {
        /// Root directories to scan
        #[arg(short, long, required = true)]
        root: Vec<PathBuf>,

        /// Write a JSON report of the run to this path
        #[arg(long)]
        report: Option<PathBuf>,

        /// Field separator
        #[arg(long, default_value_t = ',')]
        separator: char,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> unitfix_core::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fix {
            input,
            output,
            separator,
        } => cmd_fix(&input, output, separator),
        Commands::Inspect { file, separator } => cmd_inspect(&file, separator),
        Commands::Show {
            file,
            limit,
            format,
            separator,
        } => cmd_show(&file, limit, &format, separator),
        Commands::Batch {
            root,
            report,
            separator,
        } => cmd_batch(&root, report, separator),
    }
}

fn options(separator: char) -> ReshapeOptions {
    ReshapeOptions {
        separator,
        ..ReshapeOptions::default()
    }
}

fn cmd_fix(input: &Path, output: Option<PathBuf>, separator: char) -> unitfix_core::Result<()> {
    let opts = options(separator);
    let lines = read_lines(input)?;
    let result = reshape(&lines, &opts)?;

    let output = output.unwrap_or_else(|| fixed_output_path(input));
    write_lines(&output, &result.lines)?;

    println!(
        "Fixed {} and saved as '{}'",
        input.display(),
        output.display()
    );
    println!(
        "  {} records combined, {} markers kept, {} lines dropped",
        result.stats.units, result.stats.markers, result.stats.dropped
    );
    if result.stats.short_groups > 0 {
        println!(
            "  Warning: {} group(s) near end of file were missing property lines",
            result.stats.short_groups
        );
    }

    Ok(())
}

fn cmd_inspect(file: &Path, separator: char) -> unitfix_core::Result<()> {
    let opts = options(separator);
    let lines = read_lines(file)?;
    let result = reshape(&lines, &opts)?;

    println!("File: {}", file.display());
    println!("Lines in:  {}", lines.len());
    println!("Lines out: {}", result.lines.len());
    println!();
    println!("Combined records: {}", result.stats.units);
    println!("Markers kept:     {}", result.stats.markers);
    println!("Lines dropped:    {}", result.stats.dropped);
    println!("Short groups:     {}", result.stats.short_groups);

    Ok(())
}

fn cmd_show(
    file: &Path,
    limit: Option<usize>,
    format: &str,
    separator: char,
) -> unitfix_core::Result<()> {
    let opts = options(separator);
    let lines = read_lines(file)?;
    let result = reshape(&lines, &opts)?;
    let table = parse_fixed(&result.lines, separator)?;

    match format.to_lowercase().as_str() {
        "table" => {
            let header: Vec<&str> = table.columns.iter().map(String::as_str).collect();
            println!("{}", header.join("\t"));
            println!("{}", "-".repeat(header.len() * 12));

            let row_limit = limit.unwrap_or(table.rows.len());
            for row in table.rows.iter().take(row_limit) {
                println!("{}", row.join("\t"));
            }

            if table.rows.len() > row_limit {
                println!("... ({} more rows)", table.rows.len() - row_limit);
            }
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        _ => {
            eprintln!("Unknown format: {}. Supported formats: table, json", format);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn cmd_batch(
    roots: &[PathBuf],
    report_path: Option<PathBuf>,
    separator: char,
) -> unitfix_core::Result<()> {
    let opts = options(separator);
    let mut report = FixReport::new();
    let mut errors: Vec<(PathBuf, String)> = Vec::new();

    for root in roots {
        let exports = find_exports(root)?;
        println!(
            "Found {} export(s) under {}",
            exports.len(),
            root.display()
        );

        for input in exports {
            match fix_one(&input, &opts) {
                Ok(entry) => {
                    println!(
                        "  {} -> {} ({} records)",
                        entry.input.display(),
                        entry.output.display(),
                        entry.stats.units
                    );
                    report.add_entry(entry);
                }
                Err(e) => {
                    errors.push((input, e.to_string()));
                }
            }
        }
    }

    println!();
    println!("Batch complete:");
    println!("  {} file(s) fixed", report.entries.len());
    println!("  {} record(s) combined", report.total_units());

    if let Some(path) = report_path {
        report.save(&path)?;
        println!("  report written to {}", path.display());
    }

    if !errors.is_empty() {
        println!("\nErrors ({}):", errors.len());
        for (path, err) in &errors {
            println!("  {}: {}", path.display(), err);
        }
    }

    Ok(())
}

fn fix_one(input: &Path, opts: &ReshapeOptions) -> unitfix_core::Result<FixEntry> {
    let lines = read_lines(input)?;
    let result = reshape(&lines, opts)?;

    let output = fixed_output_path(input);
    write_lines(&output, &result.lines)?;

    Ok(FixEntry {
        input: input.to_path_buf(),
        output,
        lines_read: lines.len(),
        lines_written: result.lines.len(),
        stats: result.stats,
    })
}
