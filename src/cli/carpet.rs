use std::io::{self, Write};

use clap::Args;

use crate::cli::OutputFormat;
use crate::grid::carpet::Grid;
use crate::grid::pattern::Pattern;
use crate::grid::search::SearchResult;
use crate::repl::CarpetSession;

#[derive(Args)]
pub struct CarpetArgs {
    /// Carpet width (batch mode)
    #[arg(long)]
    pub width: Option<usize>,

    /// Carpet height (batch mode)
    #[arg(long)]
    pub height: Option<usize>,

    /// Seed for a random carpet (1-20)
    #[arg(
        long,
        conflicts_with = "colors",
        value_parser = clap::value_parser!(u64).range(1..=20)
    )]
    pub seed: Option<u64>,

    /// Explicit carpet colors, one letter (R, G, B, Y, W) per cell, row by row
    #[arg(long)]
    pub colors: Option<String>,

    /// Pattern of 4 colors to search for; can be specified multiple times.
    /// Without any pattern the interactive session starts instead.
    #[arg(short, long = "pattern")]
    pub patterns: Vec<Pattern>,
}

/// Execute carpet subcommand
///
/// # Errors
///
/// Returns an error if the carpet cannot be built or reading input / writing
/// output fails. Invalid patterns are rejected by clap.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CarpetArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    if args.patterns.is_empty() {
        if args.width.is_some()
            || args.height.is_some()
            || args.seed.is_some()
            || args.colors.is_some()
        {
            anyhow::bail!("--width, --height, --seed and --colors require at least one --pattern");
        }

        let stdin = io::stdin();
        let grid = CarpetSession::new().run(stdin.lock(), io::stdout().lock())?;
        if verbose {
            eprintln!("Session ended on a {}x{} carpet", grid.width(), grid.height());
        }
        return Ok(());
    }

    let (Some(width), Some(height)) = (args.width, args.height) else {
        anyhow::bail!("--pattern requires both --width and --height");
    };

    let grid = match (args.seed, args.colors.as_deref()) {
        (Some(seed), None) => Grid::from_seed(width, height, seed)?,
        (None, Some(colors)) => Grid::from_colors(colors, width, height)?,
        _ => anyhow::bail!("--pattern requires either --seed or --colors"),
    };

    let searches: Vec<(Pattern, SearchResult)> = args
        .patterns
        .iter()
        .map(|pattern| (*pattern, grid.search(pattern)))
        .collect();

    if verbose {
        eprintln!(
            "Searched a {}x{} carpet for {} patterns",
            width,
            height,
            searches.len()
        );
    }

    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Text => print_text(&mut stdout, &grid, &searches)?,
        OutputFormat::Json => print_json(&mut stdout, &grid, &searches)?,
        OutputFormat::Tsv => print_tsv(&mut stdout, &searches)?,
    }

    Ok(())
}

fn print_text<W: Write>(
    out: &mut W,
    grid: &Grid,
    searches: &[(Pattern, SearchResult)],
) -> io::Result<()> {
    write!(out, "{grid}")?;
    for (pattern, result) in searches {
        writeln!(out, "\nPattern {pattern}:")?;
        for position in &result.matches {
            writeln!(out, " - Found at {position}")?;
        }
        writeln!(out, " = Matches found: {}", result.count())?;
    }
    Ok(())
}

fn print_json<W: Write>(
    out: &mut W,
    grid: &Grid,
    searches: &[(Pattern, SearchResult)],
) -> anyhow::Result<()> {
    let rows: Vec<String> = grid
        .rows()
        .map(|row| row.iter().map(|c| c.as_char()).collect())
        .collect();

    let output = serde_json::json!({
        "width": grid.width(),
        "height": grid.height(),
        "carpet": rows,
        "searches": searches
            .iter()
            .map(|(pattern, result)| serde_json::json!({
                "pattern": pattern.to_string(),
                "count": result.count(),
                "matches": result.matches,
            }))
            .collect::<Vec<_>>(),
    });

    writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

fn print_tsv<W: Write>(out: &mut W, searches: &[(Pattern, SearchResult)]) -> io::Result<()> {
    writeln!(out, "pattern\tx\ty")?;
    for (pattern, result) in searches {
        for position in &result.matches {
            writeln!(out, "{pattern}\t{}\t{}", position.x, position.y)?;
        }
    }
    Ok(())
}
