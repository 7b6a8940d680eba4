use std::io::{BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use crate::grid::carpet::{Grid, GridError};
use crate::grid::pattern::{Pattern, PATTERN_SIDE};
use crate::grid::search::SearchResult;
use crate::repl::input::{prompt, Scanner};
use crate::repl::ReplError;
use crate::utils::validation::is_valid_seed;

const SIZE_PROMPT: &str = "Enter carpet's width and height: ";
const MODE_PROMPT: &str = "Select start (R for random, I for input): ";
const SEED_PROMPT: &str = "Enter seed value (1-20): ";
const COLORS_PROMPT: &str = "Input: ";
const PATTERN_PROMPT: &str = "Enter 4 colors, or q to quit: ";

/// How the carpet gets its colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StartMode {
    Random,
    Input,
}

/// Interactive carpet builder and pattern search loop
#[derive(Debug, Default)]
pub struct CarpetSession {
    /// Seed used when an explicit color string is rejected
    fallback_seed: Option<u64>,
}

impl CarpetSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed seed instead of the clock when falling back to a random carpet
    #[must_use]
    pub fn with_fallback_seed(mut self, seed: u64) -> Self {
        self.fallback_seed = Some(seed);
        self
    }

    /// Build a carpet from the prompts, print it, then answer pattern queries
    /// until `q` or end of input.
    ///
    /// # Errors
    ///
    /// Returns `ReplError::Grid` if the carpet is smaller than the pattern,
    /// `ReplError::InvalidNumber` for a non-numeric size,
    /// `ReplError::UnexpectedEof` if input ends before a carpet exists, or
    /// `ReplError::Io` on read/write failure.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut out: W) -> Result<Grid, ReplError> {
        let mut scanner = Scanner::new(input);

        prompt(&mut out, SIZE_PROMPT)?;
        let width = read_size(&mut scanner)?;
        let height = read_size(&mut scanner)?;
        let (width, height) = match (usize::try_from(width), usize::try_from(height)) {
            (Ok(w), Ok(h)) if w >= PATTERN_SIDE && h >= PATTERN_SIDE => (w, h),
            _ => return Err(GridError::TooSmall { width, height }.into()),
        };

        let grid = match read_mode(&mut scanner, &mut out)? {
            StartMode::Random => {
                let seed = read_seed(&mut scanner, &mut out)?;
                Grid::from_seed(width, height, seed)?
            }
            StartMode::Input => self.read_colors(&mut scanner, &mut out, width, height)?,
        };
        debug!("Built {}x{} carpet", grid.width(), grid.height());

        write!(out, "{grid}")?;

        loop {
            prompt(&mut out, PATTERN_PROMPT)?;
            let Some(token) = scanner.next_token()? else {
                writeln!(out)?;
                break;
            };
            if token.starts_with('q') {
                break;
            }

            match Pattern::parse(&token) {
                Ok(pattern) => write_matches(&mut out, &grid.search(&pattern))?,
                Err(e) => writeln!(out, "Error: {}", error_message(&e))?,
            }
        }

        Ok(grid)
    }

    fn read_colors<R: BufRead, W: Write>(
        &self,
        scanner: &mut Scanner<R>,
        out: &mut W,
        width: usize,
        height: usize,
    ) -> Result<Grid, ReplError> {
        prompt(out, COLORS_PROMPT)?;
        let colors = scanner.next_token()?.ok_or(ReplError::UnexpectedEof)?;

        match Grid::from_colors(&colors, width, height) {
            Ok(grid) => Ok(grid),
            Err(e @ (GridError::InvalidLength { .. } | GridError::UnknownColor(_))) => {
                writeln!(out, "Error: {}", error_message(&e))?;
                let seed = self.fallback_seed.unwrap_or_else(clock_seed);
                warn!("Rejected carpet input ({e}), using random carpet with seed {seed}");
                Ok(Grid::from_seed(width, height, seed)?)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Sizes are read signed so a negative size reports as too small
fn read_size<R: BufRead>(scanner: &mut Scanner<R>) -> Result<i64, ReplError> {
    let token = scanner.next_token()?.ok_or(ReplError::UnexpectedEof)?;
    token
        .parse()
        .map_err(|_| ReplError::InvalidNumber(token))
}

fn read_mode<R: BufRead, W: Write>(
    scanner: &mut Scanner<R>,
    out: &mut W,
) -> Result<StartMode, ReplError> {
    loop {
        prompt(out, MODE_PROMPT)?;
        let token = scanner.next_token()?.ok_or(ReplError::UnexpectedEof)?;
        match token.as_str() {
            "R" | "r" => return Ok(StartMode::Random),
            "I" | "i" => return Ok(StartMode::Input),
            _ => {}
        }
    }
}

fn read_seed<R: BufRead, W: Write>(
    scanner: &mut Scanner<R>,
    out: &mut W,
) -> Result<u64, ReplError> {
    loop {
        prompt(out, SEED_PROMPT)?;
        let token = scanner.next_token()?.ok_or(ReplError::UnexpectedEof)?;
        match token.parse::<u64>() {
            Ok(seed) if is_valid_seed(seed) => return Ok(seed),
            _ => writeln!(out, "Error: Wrong seed value.")?,
        }
    }
}

fn write_matches<W: Write>(out: &mut W, result: &SearchResult) -> std::io::Result<()> {
    for position in &result.matches {
        writeln!(out, " - Found at {position}")?;
    }
    writeln!(out, " = Matches found: {}", result.count())
}

/// Short user-facing message for rejected colors
fn error_message(e: &GridError) -> &'static str {
    match e {
        GridError::UnknownColor(_) => "Unknown color.",
        _ => "Wrong amount of colors.",
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
