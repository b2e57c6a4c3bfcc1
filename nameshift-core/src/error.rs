use crate::plan::Verb;
use std::io;
use std::path::PathBuf;

/// Error taxonomy for the rename engine.
///
/// Configuration variants (`BadExpression`, `UnknownModule`, `UnknownCodec`,
/// `BadMode`) and permutation preconditions (`InvalidInput`, `MissingPath`)
/// are always fatal and precede any filesystem mutation. `Action` fatality
/// is decided by the caller: transform mode warns and continues, permutation
/// mode aborts.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A transform expression failed to parse or compile.
    #[error("invalid transform expression '{expr}': {reason}")]
    BadExpression { expr: String, reason: String },

    /// A module-load directive named a module the registry does not know.
    #[error("unknown module '{0}'")]
    UnknownModule(String),

    /// A transcode specification named a codec the encoding table rejects.
    #[error("unknown codec '{0}'")]
    UnknownCodec(String),

    /// A permutation mode selector matched no mode, or more than one.
    #[error("unknown or ambiguous permutation mode '{0}'")]
    BadMode(String),

    /// Name bytes the decode codec rejects, or transformed text the encode
    /// codec cannot represent.
    #[error("cannot transcode '{name}': {reason}")]
    Transcode { name: String, reason: String },

    /// A permutation precondition other than existence was violated.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A path named for permutation does not exist.
    #[error("no such path: '{}'", .0.display())]
    MissingPath(PathBuf),

    /// The OS-level move/copy/rename primitive failed.
    #[error("cannot {} '{}' to '{}': {}", .verb, .from.display(), .to.display(), .source)]
    Action {
        verb: Verb,
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn bad_expression(expr: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::BadExpression {
            expr: expr.into(),
            reason: reason.into(),
        }
    }

    pub fn transcode(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Transcode {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Shared result alias for the core crate.
pub type Result<T> = std::result::Result<T, Error>;
