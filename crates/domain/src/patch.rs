pub mod connector;
pub mod installer;

pub use connector::{CONNECTOR_MARKER, ConnectorPatch};
pub use installer::{DEFAULT_INSTALLER_LINE, InsertPosition, InstallerPatch};
