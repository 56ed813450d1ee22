// src/main.rs
use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use huffpack::file::{process_file, Mode, DEFAULT_OUTPUT};
use huffpack::report::{append_report, Report};
use huffpack::{logger, CodeTable};

#[derive(Parser)]
#[command(name = "huffpack", version)]
#[command(about = "Static Huffman compressor. Compressed inputs are decompressed.", long_about = None)]
struct Cli {
    /// File to compress or decompress
    input: PathBuf,

    /// Where to write the result
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    #[arg(long, value_enum, default_value_t = ModeArg::Auto)]
    mode: ModeArg,

    /// Print the code table to stdout
    #[arg(long)]
    print_table: bool,

    /// Print the tree structure to stdout
    #[arg(long)]
    print_tree: bool,

    /// Append a JSON line describing the run to this file
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum ModeArg {
    #[value(help = "Decompress if the input starts with the magic marker, else compress (Default).")]
    Auto,
    #[value(help = "Always compress.")]
    Encode,
    #[value(help = "Always decompress.")]
    Decode,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(logger::level_for(cli.verbose, cli.quiet))?;

    let span = tracing::info_span!("huffpack", input = %cli.input.display(), mode = ?cli.mode);
    let _enter = span.enter();

    let mode = match cli.mode {
        ModeArg::Auto => None,
        ModeArg::Encode => Some(Mode::Encode),
        ModeArg::Decode => Some(Mode::Decode),
    };

    let outcome = process_file(&cli.input, &cli.output, mode)
        .with_context(|| format!("could not process \"{}\"", cli.input.display()))?;

    if cli.print_tree {
        print!("{}", outcome.tree().render());
    }
    if cli.print_table {
        print!("{}", CodeTable::from_tree(outcome.tree()));
    }

    if let Some(path) = &cli.report {
        let report = Report::new(&cli.input, &cli.output, &outcome);
        append_report(path, &report)
            .with_context(|| format!("could not write report to \"{}\"", path.display()))?;
    }

    println!(
        "{} -> {} ({} bytes)",
        cli.input.display(),
        cli.output.display(),
        outcome.bytes().len()
    );
    Ok(())
}
