//! Terminal size detection.
//!
//! `$LINES`/`$COLUMNS` take precedence over what the TTY reports. Nothing
//! here is consulted while rendering; [`max_columns`] is a hint for callers
//! that want to keep output within the terminal.

use std::env;
use std::io;
use std::sync::OnceLock;

use crossterm::terminal;
use thiserror::Error;

/// Used when the terminal width can't be determined.
pub const DEFAULT_COLUMNS: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub lines: u16,
    pub columns: u16,
}

#[derive(Debug, Error)]
pub enum TermError {
    #[error("no terminal attached")]
    NoTty,
    #[error("terminal size query failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid ${name}: {value:?}")]
    InvalidEnv { name: &'static str, value: String },
}

/// Size from `$LINES` and `$COLUMNS`. Either may be missing, in which case
/// that field is `0`; `None` if both are.
pub fn env_size() -> Result<Option<Size>, TermError> {
    parse_env_size(
        env::var("LINES").ok().as_deref(),
        env::var("COLUMNS").ok().as_deref(),
    )
}

pub fn parse_env_size(
    lines: Option<&str>,
    columns: Option<&str>,
) -> Result<Option<Size>, TermError> {
    let lines = lines.filter(|value| !value.is_empty());
    let columns = columns.filter(|value| !value.is_empty());
    if lines.is_none() && columns.is_none() {
        return Ok(None);
    }

    Ok(Some(Size {
        lines: parse_dimension("LINES", lines)?,
        columns: parse_dimension("COLUMNS", columns)?,
    }))
}

fn parse_dimension(name: &'static str, value: Option<&str>) -> Result<u16, TermError> {
    match value {
        None => Ok(0),
        Some(value) => value.trim().parse().map_err(|_| TermError::InvalidEnv {
            name,
            value: value.to_string(),
        }),
    }
}

/// Size the kernel holds for the controlling TTY.
pub fn tty_size() -> Result<Size, TermError> {
    let (columns, lines) = terminal::size()?;
    if columns == 0 && lines == 0 {
        return Err(TermError::NoTty);
    }
    Ok(Size { lines, columns })
}

/// Environment first, then the TTY.
pub fn size() -> Result<Size, TermError> {
    let env = env_size().unwrap_or_else(|err| {
        log::debug!("ignoring terminal size from environment: {err}");
        None
    });
    merge_sizes(env, tty_size)
}

/// A complete environment size wins outright. Otherwise the TTY size is used
/// with any non-zero environment field laid over it; if the TTY can't be
/// queried a partial environment size is still better than nothing.
pub fn merge_sizes<F>(env: Option<Size>, tty: F) -> Result<Size, TermError>
where
    F: FnOnce() -> Result<Size, TermError>,
{
    if let Some(env) = env {
        if env.lines != 0 && env.columns != 0 {
            return Ok(env);
        }
    }

    let tty = match tty() {
        Ok(tty) => tty,
        Err(err) => return env.ok_or(err),
    };

    Ok(match env {
        None => tty,
        Some(env) => Size {
            lines: if env.lines == 0 { tty.lines } else { env.lines },
            columns: if env.columns == 0 { tty.columns } else { env.columns },
        },
    })
}

/// Terminal width in columns, detected once per process.
pub fn max_columns() -> usize {
    static MAX_COLUMNS: OnceLock<usize> = OnceLock::new();

    *MAX_COLUMNS.get_or_init(|| match size() {
        Ok(size) if size.columns > 0 => usize::from(size.columns),
        Ok(_) => DEFAULT_COLUMNS,
        Err(err) => {
            log::debug!("terminal size unavailable, assuming {DEFAULT_COLUMNS} columns: {err}");
            DEFAULT_COLUMNS
        }
    })
}
