//! Parser for catalog REPL commands.
//!
//! A line is split on whitespace into a command word and its arguments.
//! Double quotes group words, so `reservable Kivi "Seven Brothers"` has two
//! arguments. A missing closing quote runs to the end of the line.

use thiserror::Error;

use crate::catalog::query::Query;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command")]
    UnknownCommand(String),

    #[error("wrong number of parameters")]
    WrongArity { command: &'static str },
}

/// A parsed REPL line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Query(Query),
    Quit,
}

/// One word of a command line
#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    text: String,
    /// The word opened with a double quote
    quoted: bool,
}

/// Split a line into words, keeping quoted text together
#[must_use]
pub fn tokenize(line: &str) -> Vec<String> {
    split_tokens(line).into_iter().map(|t| t.text).collect()
}

fn split_tokens(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut starts_quoted = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                if !in_token {
                    starts_quoted = true;
                }
                quoted = !quoted;
                in_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(Token {
                        text: std::mem::take(&mut current),
                        quoted: starts_quoted,
                    });
                    in_token = false;
                    starts_quoted = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if in_token {
        tokens.push(Token {
            text: current,
            quoted: starts_quoted,
        });
    }

    tokens
}

/// Parse one input line. Blank lines yield `Ok(None)`.
///
/// Commands taking an author or title accept it as the remaining words of
/// the line, so `books Metso Tove Jansson` needs no quotes. A quoted author
/// or title ends at its closing quote and any words after it are ignored.
///
/// # Errors
///
/// Returns `CommandError::UnknownCommand` for an unrecognized command word, or
/// `CommandError::WrongArity` if the argument count does not fit the command.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let tokens = split_tokens(line);
    let Some((name, args)) = tokens.split_first() else {
        return Ok(None);
    };
    let name = &name.text;

    if args.iter().any(|t| t.text.is_empty()) {
        return Err(CommandError::WrongArity {
            command: command_name(name)?,
        });
    }

    let query = match name.as_str() {
        "quit" | "exit" => return Ok(Some(Command::Quit)),
        "libraries" => {
            expect_exactly(args, 0, "libraries")?;
            Query::Libraries
        }
        "material" => {
            expect_exactly(args, 1, "material")?;
            Query::Material {
                library: args[0].text.clone(),
            }
        }
        "books" => {
            let (library, author) = split_rest(args, "books")?;
            Query::Books { library, author }
        }
        "reservable" => {
            let (author, title) = split_rest(args, "reservable")?;
            Query::Reservable { author, title }
        }
        "loanable" => {
            expect_exactly(args, 0, "loanable")?;
            Query::Loanable
        }
        "summary" => {
            expect_exactly(args, 1, "summary")?;
            Query::Summary {
                library: args[0].text.clone(),
            }
        }
        "author" => {
            let (library, author) = split_rest(args, "author")?;
            Query::AuthorInfo { library, author }
        }
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };

    Ok(Some(Command::Query(query)))
}

fn command_name(name: &str) -> Result<&'static str, CommandError> {
    const KNOWN: [&str; 9] = [
        "quit",
        "exit",
        "libraries",
        "material",
        "books",
        "reservable",
        "loanable",
        "summary",
        "author",
    ];
    KNOWN
        .into_iter()
        .find(|known| *known == name)
        .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))
}

fn expect_exactly(args: &[Token], n: usize, command: &'static str) -> Result<(), CommandError> {
    if args.len() == n {
        Ok(())
    } else {
        Err(CommandError::WrongArity { command })
    }
}

/// First argument, plus all remaining arguments joined by single spaces.
/// If the second argument is quoted it stands alone.
fn split_rest(args: &[Token], command: &'static str) -> Result<(String, String), CommandError> {
    match args {
        [first, second, ..] if second.quoted => Ok((first.text.clone(), second.text.clone())),
        [first, rest @ ..] if !rest.is_empty() => {
            let words: Vec<&str> = rest.iter().map(|t| t.text.as_str()).collect();
            Ok((first.text.clone(), words.join(" ")))
        }
        _ => Err(CommandError::WrongArity { command }),
    }
}
