use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Subcommand};

use crate::catalog::query::{CatalogQuery, Query, QueryOutput, Reservability};
use crate::catalog::store::LibraryCatalog;
use crate::cli::OutputFormat;
use crate::repl::input::{prompt, read_line};
use crate::repl::LibrarySession;

#[derive(Args)]
pub struct LibraryArgs {
    /// Catalog file (`library;author;title;reservations` per line, `;` or `,`)
    /// Prompted for on stdin when omitted
    pub input: Option<PathBuf>,

    /// Run a single query instead of the interactive prompt
    #[command(subcommand)]
    pub query: Option<QueryCommand>,
}

#[derive(Subcommand)]
pub enum QueryCommand {
    /// List library names
    Libraries,

    /// List every book of a library as "author: title"
    Material {
        #[arg(required = true)]
        library: String,
    },

    /// List an author's books in a library with reservation status
    Books {
        #[arg(required = true)]
        library: String,

        /// Author name (several words allowed)
        #[arg(required = true, num_args = 1..)]
        author: Vec<String>,
    },

    /// Find the libraries with the shortest reservation queue for a book
    Reservable {
        #[arg(required = true)]
        author: String,

        /// Title (several words allowed)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// List titles with a copy on the shelf in any library
    Loanable,

    /// List a library's books sorted by author and title
    Summary {
        #[arg(required = true)]
        library: String,
    },

    /// Show an author's titles in a library from the per-title view
    Author {
        #[arg(required = true)]
        library: String,

        /// Author name (several words allowed)
        #[arg(required = true, num_args = 1..)]
        author: Vec<String>,
    },
}

impl From<QueryCommand> for Query {
    fn from(command: QueryCommand) -> Self {
        match command {
            QueryCommand::Libraries => Query::Libraries,
            QueryCommand::Material { library } => Query::Material { library },
            QueryCommand::Books { library, author } => Query::Books {
                library,
                author: author.join(" "),
            },
            QueryCommand::Reservable { author, title } => Query::Reservable {
                author,
                title: title.join(" "),
            },
            QueryCommand::Loanable => Query::Loanable,
            QueryCommand::Summary { library } => Query::Summary { library },
            QueryCommand::Author { library, author } => Query::AuthorInfo {
                library,
                author: author.join(" "),
            },
        }
    }
}

/// Execute library subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be opened or parsed, if a one-shot
/// query fails, or if writing output fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: LibraryArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout().lock();

    let path = match args.input {
        Some(path) => path,
        None => {
            prompt(&mut stdout, "Input file: ")?;
            let line = read_line(&mut input)?.context("no input file given")?;
            PathBuf::from(line.trim())
        }
    };

    let catalog = LibraryCatalog::load_from_file(&path)?;

    if verbose {
        eprintln!(
            "Loaded {} records in {} libraries from {}",
            catalog.record_count(),
            catalog.len(),
            path.display()
        );
    }

    match args.query {
        Some(command) => {
            let output = CatalogQuery::new(&catalog).execute(&command.into())?;
            write_output(&mut stdout, &output, format)?;
        }
        None => run_session(&catalog, input, stdout)?,
    }

    Ok(())
}

fn run_session<R: BufRead, W: Write>(
    catalog: &LibraryCatalog,
    input: R,
    out: W,
) -> anyhow::Result<()> {
    LibrarySession::new(catalog).run(input, out)?;
    Ok(())
}

fn write_output<W: Write>(
    out: &mut W,
    output: &QueryOutput,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => write!(out, "{output}")?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(output)?)?,
        OutputFormat::Tsv => write_tsv(out, output)?,
    }
    Ok(())
}

fn write_tsv<W: Write>(out: &mut W, output: &QueryOutput) -> io::Result<()> {
    match output {
        QueryOutput::Libraries(names) => {
            writeln!(out, "library")?;
            for name in names {
                writeln!(out, "{name}")?;
            }
        }
        QueryOutput::Titles(entries) => {
            writeln!(out, "author\ttitle")?;
            for e in entries {
                writeln!(out, "{}\t{}", e.author, e.title)?;
            }
        }
        QueryOutput::Shelf(entries) => {
            writeln!(out, "title\treservations")?;
            for e in entries {
                writeln!(out, "{}\t{}", e.title, e.status.reservations())?;
            }
        }
        QueryOutput::Reservability(r) => {
            writeln!(out, "result\treservations\tlibrary")?;
            match r {
                Reservability::NotALibraryBook => writeln!(out, "not_a_library_book\t\t")?,
                Reservability::NotReservable => writeln!(out, "not_reservable\t\t")?,
                Reservability::Reservable { status, libraries } => {
                    for library in libraries {
                        writeln!(out, "reservable\t{}\t{library}", status.reservations())?;
                    }
                }
            }
        }
    }
    Ok(())
}
