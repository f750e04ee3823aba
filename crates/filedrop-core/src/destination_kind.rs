use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Upload destination types
///
/// Selects where the upload handler writes file bytes. It's defined in core
/// because configuration parses it and the storage factory dispatches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationKind {
    /// Bytes are read and dropped.
    #[default]
    Discard,
    /// Bytes are written to a generated file inside the save directory.
    Directory,
}

impl FromStr for DestinationKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "discard" => Ok(DestinationKind::Discard),
            "directory" => Ok(DestinationKind::Directory),
            _ => Err(anyhow::anyhow!("Invalid upload destination: {}", s)),
        }
    }
}

impl Display for DestinationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DestinationKind::Discard => write!(f, "discard"),
            DestinationKind::Directory => write!(f, "directory"),
        }
    }
}
