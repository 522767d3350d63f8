//! The identifier of the currently chosen Pokémon.

use std::fmt;
use std::str::FromStr;

/// Identifier resolvable by the species endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection {
    /// National dex number
    Id(u32),
    /// Lowercase species or Pokémon name
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("Please enter a Pokémon name or ID")]
    Empty,
    #[error("ID out of range: {0}")]
    IdOutOfRange(String),
}

impl FromStr for Selection {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s.is_empty() {
            return Err(SelectionError::Empty);
        }
        if s.bytes().all(|b| b.is_ascii_digit()) {
            return s
                .parse()
                .map(Self::Id)
                .map_err(|_| SelectionError::IdOutOfRange(s));
        }
        Ok(Self::Name(s))
    }
}

impl From<u32> for Selection {
    fn from(id: u32) -> Self {
        Self::Id(id)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}
