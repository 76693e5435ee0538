use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure to load a sprite. Always fatal: the game never starts without
/// its full asset set.
#[derive(Debug)]
pub enum AssetError {
    Io { path: PathBuf, source: io::Error },
    MalformedHeader { path: PathBuf, line: String },
    EmptyArt { path: PathBuf },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Io { path, source } => {
                write!(f, "cannot read asset {}: {}", path.display(), source)
            }
            AssetError::MalformedHeader { path, line } => write!(
                f,
                "asset {} has malformed size header {:?} (expected WIDTHxHEIGHT)",
                path.display(),
                line
            ),
            AssetError::EmptyArt { path } => {
                write!(f, "asset {} has no glyph rows", path.display())
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum GameError {
    Asset(AssetError),
    Io(io::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Asset(e) => write!(f, "asset error: {}", e),
            GameError::Io(e) => write!(f, "terminal i/o error: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Asset(e) => Some(e),
            GameError::Io(e) => Some(e),
        }
    }
}

impl From<AssetError> for GameError {
    fn from(e: AssetError) -> Self {
        GameError::Asset(e)
    }
}

impl From<io::Error> for GameError {
    fn from(e: io::Error) -> Self {
        GameError::Io(e)
    }
}
