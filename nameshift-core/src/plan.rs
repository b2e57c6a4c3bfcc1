use crate::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// What the executor does with a (source, destination) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Move,
    Copy,
    Rename,
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::Move => "move",
            Self::Copy => "copy",
            Self::Rename => "rename",
        };
        f.write_str(verb)
    }
}

/// A single two-argument rename step. Created by either pipeline, consumed
/// once by the executor, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameStep {
    pub source: PathBuf,
    pub dest: PathBuf,
}

impl RenameStep {
    pub fn new(source: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
        }
    }
}

/// Cyclic rearrangement applied to an explicit path list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermutationMode {
    RotateLeft,
    RotateRight,
    Swap,
    Flip,
}

impl PermutationMode {
    const NAMES: [(&'static str, Self); 4] = [
        ("rotate-left", Self::RotateLeft),
        ("rotate-right", Self::RotateRight),
        ("swap", Self::Swap),
        ("flip", Self::Flip),
    ];

    /// Swap and flip exchange consecutive pairs and need an even-length list.
    pub fn requires_pairs(self) -> bool {
        matches!(self, Self::Swap | Self::Flip)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::RotateLeft => "rotate-left",
            Self::RotateRight => "rotate-right",
            Self::Swap => "swap",
            Self::Flip => "flip",
        }
    }
}

impl fmt::Display for PermutationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PermutationMode {
    type Err = Error;

    /// Accepts the single-letter shorthands `l`, `r`, `s`, `f` and any
    /// unambiguous prefix of the long names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "l" => return Ok(Self::RotateLeft),
            "r" => return Ok(Self::RotateRight),
            "s" => return Ok(Self::Swap),
            "f" => return Ok(Self::Flip),
            "" => return Err(Error::BadMode(s.to_string())),
            _ => {},
        }

        let mut matches = Self::NAMES
            .iter()
            .filter(|(name, _)| name.starts_with(s))
            .map(|(_, mode)| *mode);

        match (matches.next(), matches.next()) {
            (Some(mode), None) => Ok(mode),
            _ => Err(Error::BadMode(s.to_string())),
        }
    }
}
