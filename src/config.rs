// src/config.rs
use crate::cli::Args;
use derive_builder::Builder;
use std::path::PathBuf;
use version_patch_domain::InsertPosition;
use version_patch_shared_kernel::PresentationError;

pub const DEFAULT_CONNECTOR_FILE: &str = "speckle_connector.rb";
pub const DEFAULT_INSTALLER_FILE: &str = "speckle-sharp-ci-tools/sketchup.iss";

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub tag: Option<String>,
    #[builder(default = "PathBuf::from(\".\")")]
    pub root: PathBuf,
    #[builder(default = "PathBuf::from(DEFAULT_CONNECTOR_FILE)")]
    pub connector_path: PathBuf,
    #[builder(default = "PathBuf::from(DEFAULT_INSTALLER_FILE)")]
    pub installer_path: PathBuf,
    #[builder(default)]
    pub installer_position: InsertPosition,
    #[builder(default)]
    pub strict: bool,
    #[builder(default)]
    pub dry_run: bool,
}

impl Config {
    pub fn connector_file(&self) -> PathBuf {
        self.root.join(&self.connector_path)
    }

    pub fn installer_file(&self) -> PathBuf {
        self.root.join(&self.installer_path)
    }
}

impl TryFrom<Args> for Config {
    type Error = PresentationError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let installer_position = match (args.installer_anchor, args.installer_line) {
            (Some(anchor), _) => InsertPosition::AfterAnchor(anchor),
            (None, Some(line)) => InsertPosition::Index(line),
            (None, None) => InsertPosition::default(),
        };

        ConfigBuilder::default()
            .tag(args.tag)
            .root(args.root)
            .connector_path(args.connector_file)
            .installer_path(args.installer_file)
            .installer_position(installer_position)
            .strict(args.strict)
            .dry_run(args.dry_run)
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))
    }
}
