//! Error taxonomy
//!
//! Only startup can fail. Simulation is total, and persistence problems are
//! logged and replaced with defaults where they happen.

use std::path::PathBuf;

use thiserror::Error;

use crate::assets::AssetKind;

/// A single asset that could not be loaded
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("{kind} asset `{name}` not found at {}", path.display())]
    Missing {
        kind: AssetKind,
        name: String,
        path: PathBuf,
    },

    #[error("failed to read {kind} asset `{name}`: {source}")]
    Io {
        kind: AssetKind,
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image `{name}`: {source}")]
    Image {
        name: String,
        #[source]
        source: image::ImageError,
    },
}

impl AssetError {
    /// Logical name of the asset that failed
    pub fn name(&self) -> &str {
        match self {
            AssetError::Missing { name, .. }
            | AssetError::Io { name, .. }
            | AssetError::Image { name, .. } => name,
        }
    }
}

/// Fatal failure before the main loop starts
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("required asset failed to load: {0}")]
    Asset(#[from] AssetError),
}
