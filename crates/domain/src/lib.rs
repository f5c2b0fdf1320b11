#![allow(clippy::multiple_crate_versions)]

pub mod model;
pub mod patch;

pub use model::{LineEnding, PatchOutcome, TextDocument};
pub use patch::{
    CONNECTOR_MARKER, ConnectorPatch, DEFAULT_INSTALLER_LINE, InsertPosition, InstallerPatch,
};
