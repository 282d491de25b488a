use std::fs;
use std::path::Path;

use typecov_chart::TypeTag;

use crate::ParseError;

/// Lines starting with this character end the team list
pub const SEPARATOR: char = '-';

/// One member as written in the team file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamEntry {
    /// 1-based line number
    pub line: usize,
    pub primary: TypeTag,
    pub secondary: Option<TypeTag>,
}

impl TeamEntry {
    /// Tags that name no known type
    pub fn unknown(&self) -> impl Iterator<Item = &TypeTag> {
        std::iter::once(&self.primary)
            .chain(self.secondary.as_ref())
            .filter(|tag| tag.known().is_none())
    }
}

/// Read and parse a team file
pub fn read_team_file(path: impl AsRef<Path>) -> Result<Vec<TeamEntry>, ParseError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_team(&text)
}

/// Parse team file contents
///
/// A leading byte order mark is skipped and blank lines are ignored. Type
/// names are not validated here; unknown names come back as
/// [`TypeTag::Unknown`].
pub fn parse_team(text: &str) -> Result<Vec<TeamEntry>, ParseError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut entries = Vec::new();

    for (i, line) in text.lines().enumerate() {
        if line.starts_with(SEPARATOR) {
            break;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let line = i + 1;
        let entry = match tokens.as_slice() {
            [] => continue,
            [primary] => TeamEntry {
                line,
                primary: TypeTag::parse(primary),
                secondary: None,
            },
            [primary, secondary] => TeamEntry {
                line,
                primary: TypeTag::parse(primary),
                secondary: Some(TypeTag::parse(secondary)),
            },
            more => {
                return Err(ParseError::TooManyTypes {
                    line,
                    found: more.len(),
                });
            }
        };
        entries.push(entry);
    }

    Ok(entries)
}
