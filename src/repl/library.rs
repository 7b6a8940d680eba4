use std::io::{BufRead, Write};

use tracing::debug;

use crate::catalog::query::CatalogQuery;
use crate::catalog::store::LibraryCatalog;
use crate::parsing::command::{parse_command, Command};
use crate::repl::input::{prompt, read_line};
use crate::repl::ReplError;

/// Prompt shown before each catalog command
pub const PROMPT: &str = "lib> ";

/// Interactive query loop over a loaded catalog
///
/// Bad commands and failed queries print an `Error:` line and the loop
/// carries on; only `quit`, `exit` or end of input stop it.
pub struct LibrarySession<'a> {
    query: CatalogQuery<'a>,
}

impl<'a> LibrarySession<'a> {
    pub fn new(catalog: &'a LibraryCatalog) -> Self {
        Self {
            query: CatalogQuery::new(catalog),
        }
    }

    /// Run until `quit`/`exit` or end of input
    ///
    /// # Errors
    ///
    /// Returns `ReplError::Io` if reading input or writing output fails.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut out: W) -> Result<(), ReplError> {
        debug!("Starting catalog session");
        let mut commands = 0usize;

        loop {
            prompt(&mut out, PROMPT)?;
            let Some(line) = read_line(&mut input)? else {
                writeln!(out)?;
                break;
            };

            match parse_command(&line) {
                Ok(None) => {}
                Ok(Some(Command::Quit)) => break,
                Ok(Some(Command::Query(query))) => {
                    commands += 1;
                    match self.query.execute(&query) {
                        Ok(output) => write!(out, "{output}")?,
                        Err(e) => writeln!(out, "Error: {e}")?,
                    }
                }
                Err(e) => writeln!(out, "Error: {e}")?,
            }
        }

        debug!("Catalog session ended after {commands} queries");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_session(catalog_text: &str, script: &str) -> String {
        let catalog = LibraryCatalog::from_text(catalog_text).unwrap();
        let mut out = Vec::new();
        LibrarySession::new(&catalog)
            .run(script.as_bytes(), &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_session_answers_queries() {
        let out = run_session(
            "A;Bob;Book1;0\nA;Bob;Book2;3\n",
            "libraries\nbooks A Bob\nquit\n",
        );
        assert_eq!(
            out,
            "lib> A\nlib> Book1 --- on the shelf\nBook2 --- 3 reservations\nlib> "
        );
    }

    #[test]
    fn test_session_survives_errors() {
        let out = run_session(
            "A;Bob;Book1;0\n",
            "material Nowhere\nbooks A Ann\nfrobnicate\nmaterial\nloanable\nexit\n",
        );
        assert_eq!(
            out,
            "lib> Error: unknown library\n\
             lib> Error: unknown author\n\
             lib> Error: unknown command\n\
             lib> Error: wrong number of parameters\n\
             lib> Bob: Book1\n\
             lib> "
        );
    }

    #[test]
    fn test_session_stops_at_quit() {
        let out = run_session("A;Bob;Book1;0\n", "quit\nlibraries\n");
        assert_eq!(out, "lib> ");
    }

    #[test]
    fn test_session_ends_at_eof() {
        let out = run_session("A;Bob;Book1;0\n", "\nlibraries");
        assert_eq!(out, "lib> lib> A\nlib> \n");
    }

    #[test]
    fn test_session_survives_invalid_utf8() {
        let catalog = LibraryCatalog::from_text("A;Bob;Book1;0\n").unwrap();
        let mut out = Vec::new();
        LibrarySession::new(&catalog)
            .run(&b"\xff\xfe\nlibraries\nquit\n"[..], &mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "lib> Error: unknown command\nlib> A\nlib> "
        );
    }

    #[test]
    fn test_session_reservable() {
        let out = run_session(
            "A;Kivi;Seven Brothers;2\nB,Kivi,Seven Brothers,100\n",
            "reservable Kivi \"Seven Brothers\"\nreservable Kivi Nummisuutarit\nquit\n",
        );
        assert_eq!(
            out,
            "lib> 2 reservations\n--- A\nlib> Book is not a library book\nlib> "
        );
    }
}
