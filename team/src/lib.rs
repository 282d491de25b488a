//! Team file parsing.
//!
//! A team file lists one member per line as one or two whitespace-separated
//! type names:
//!
//! ```text
//! fire
//! ghost dark
//! water ground
//! ----------------
//! anything below the separator is ignored
//! ```

use std::path::PathBuf;

use thiserror::Error;

mod parse;

pub use parse::{parse_team, read_team_file, TeamEntry, SEPARATOR};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Cannot read team file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: expected one or two types, found {found}")]
    TooManyTypes { line: usize, found: usize },
}
