use std::fmt;

/// All errors the library can surface.
#[derive(Debug)]
pub enum NetworkError {
    /// The connection did not have exactly two layers.
    InvalidConnectionLength { found: usize },
    /// The value given as a connection is not a recognized connection type.
    InvalidStructure(String),
    /// The connection is well formed but its layers have the wrong kind.
    Connection(String),
    InvalidShape(String),
    InvalidData(String),
    InvalidConfig(String),
    /// Attribute lookup or delete on a key that is not present.
    MissingAttribute(String),
    Io(std::io::Error),
    Json(serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetworkError>;

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConnectionLength { found } => {
                write!(f, "this network should contain two layers, got {found}")
            }
            Self::InvalidStructure(msg) => write!(f, "invalid network connection structure: {msg}"),
            Self::Connection(msg) => write!(f, "network connection error: {msg}"),
            Self::InvalidShape(msg) => write!(f, "invalid shape: {msg}"),
            Self::InvalidData(msg) => write!(f, "invalid data: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::MissingAttribute(name) => write!(f, "no attribute named '{name}'"),
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for NetworkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NetworkError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for NetworkError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
