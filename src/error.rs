use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipError {
    /// A block of the export did not have the expected four-part shape.
    ///
    /// `block` is the zero-based position of the offending block in the export.
    #[error("invalid structure in clipping #{block}: {source}")]
    Structure {
        block: usize,
        #[source]
        source: crate::domain::InvalidStructure,
    },

    #[error("clippings file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ClipError {
    /// Returns `true` for structural errors, which callers may recover from
    /// by substituting an empty collection.
    pub fn is_structural(&self) -> bool {
        matches!(self, ClipError::Structure { .. })
    }

    /// Process exit status for a load that cannot continue.
    pub fn exit_code(&self) -> u8 {
        match self {
            ClipError::NotFound(_) => 1,
            ClipError::Structure { .. } | ClipError::Io(_) => 2,
        }
    }
}

pub type ClipResult<T> = Result<T, ClipError>;
