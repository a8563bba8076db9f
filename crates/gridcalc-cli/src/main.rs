//! gridcalc CLI - evaluate formulas and edit a sheet from the terminal

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use gridcalc::{format_number, EvaluationOptions, RenderOptions, Spreadsheet, DEFAULT_MAX_DEPTH};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gridcalc")]
#[command(author, version, about = "Spreadsheet formula evaluation tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression against a sheet and print the result
    Eval {
        #[command(flatten)]
        sheet: SheetArgs,

        /// Expression to evaluate, e.g. "A1*2+SUM(A1:A3)" (a leading '=' is optional)
        expression: String,
    },

    /// Print the sheet as a table of computed values
    Show {
        #[command(flatten)]
        sheet: SheetArgs,

        /// Column width in characters
        #[arg(short, long, default_value = "8")]
        width: usize,
    },

    /// Edit cells interactively
    Repl {
        #[command(flatten)]
        sheet: SheetArgs,
    },
}

#[derive(Args)]
struct SheetArgs {
    /// Number of rows (labelled A, B, ...)
    #[arg(long, default_value = "10")]
    rows: u32,

    /// Number of columns (numbered 1, 2, ...)
    #[arg(long, default_value = "10")]
    cols: u32,

    /// Preset a cell, e.g. `--set A1=5` or `--set A2==A1+3`
    #[arg(short = 's', long = "set", value_name = "REF=TEXT", value_parser = parse_assignment)]
    cells: Vec<(String, String)>,

    /// Maximum nesting of formula references
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Eval { sheet, expression } => eval(&sheet, &expression),
        Commands::Show { sheet, width } => show(&sheet, width),
        Commands::Repl { sheet } => {
            let mut sheet = build_sheet(&sheet)?;
            let stdin = io::stdin();
            run_repl(&mut sheet, stdin.lock(), io::stdout())
        }
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("GRIDCALC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Split `REF=TEXT` at the first '='
fn parse_assignment(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((label, text)) if !label.trim().is_empty() => {
            Ok((label.trim().to_string(), text.to_string()))
        }
        _ => Err(format!("expected REF=TEXT, got '{}'", s)),
    }
}

fn build_sheet(args: &SheetArgs) -> Result<Spreadsheet> {
    if args.rows == 0 || args.cols == 0 {
        bail!("Sheet must have at least one row and one column");
    }

    let mut sheet = Spreadsheet::new(args.rows, args.cols).with_options(EvaluationOptions {
        max_depth: args.max_depth,
    });

    for (label, text) in &args.cells {
        sheet
            .set_cell(label, text.as_str())
            .with_context(|| format!("Failed to set cell '{}'", label))?;
    }
    tracing::debug!(
        rows = args.rows,
        cols = args.cols,
        presets = args.cells.len(),
        "sheet ready"
    );

    Ok(sheet)
}

fn eval(args: &SheetArgs, expression: &str) -> Result<()> {
    let sheet = build_sheet(args)?;
    let value = sheet
        .evaluate(expression)
        .with_context(|| format!("Failed to evaluate '{}'", expression))?;

    println!("{}", format_number(value));
    Ok(())
}

fn show(args: &SheetArgs, width: usize) -> Result<()> {
    let sheet = build_sheet(args)?;
    let options = RenderOptions {
        cell_width: width,
        ..Default::default()
    };

    io::stdout()
        .write_all(sheet.render_with(&options).as_bytes())
        .context("Failed to write to stdout")?;
    Ok(())
}

// === Interactive mode ===

fn run_repl<R: BufRead, W: Write>(sheet: &mut Spreadsheet, input: R, mut out: W) -> Result<()> {
    let mut lines = input.lines();

    loop {
        writeln!(out, "\n--- gridcalc ---")?;
        writeln!(out, "1. Show sheet")?;
        writeln!(out, "2. Edit cell")?;
        writeln!(out, "3. Quit")?;

        let choice = match prompt(&mut lines, &mut out, "Select an option: ")? {
            Some(choice) => choice,
            None => return Ok(()),
        };

        match choice.trim() {
            "1" => {
                writeln!(out, "\nSheet contents:")?;
                write!(out, "{}", sheet.render())?;
            }
            "2" => {
                if !edit_cell(sheet, &mut lines, &mut out)? {
                    return Ok(());
                }
            }
            "3" | "q" | "quit" => {
                writeln!(out, "Bye.")?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid option, try again.")?,
        }
    }
}

/// Prompt for a cell and its new content; returns false at end of input
fn edit_cell<I, W>(sheet: &mut Spreadsheet, lines: &mut I, out: &mut W) -> Result<bool>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    let Some(row) = prompt(lines, out, "Row (A, B, C, ...): ")? else {
        return Ok(false);
    };
    let Some(col) = prompt(lines, out, "Column (1, 2, 3, ...): ")? else {
        return Ok(false);
    };
    let Some(content) = prompt(lines, out, "Content (e.g. '=A1+B2' or '10'): ")? else {
        return Ok(false);
    };

    let label = format!("{}{}", row.trim(), col.trim());
    match sheet.set_cell(&label, content) {
        Ok(()) => writeln!(out, "Cell {} updated.", label.to_ascii_uppercase())?,
        Err(e) => writeln!(out, "Cannot set '{}': {}", label, e)?,
    }
    Ok(true)
}

fn prompt<I, W>(lines: &mut I, out: &mut W, message: &str) -> Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    write!(out, "{}", message)?;
    out.flush()?;
    lines
        .next()
        .transpose()
        .context("Failed to read from stdin")
}
