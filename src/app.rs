// src/app.rs
//! Plan-then-commit orchestration of the two release patches.
//!
//! Planning reads both files and computes their new contents in memory, so a
//! bad tag, a missing file or an out-of-range insertion aborts before anything
//! is written. Committing writes each changed file atomically and restores
//! already-written files if a later write fails.

use crate::config::Config;
use crate::presentation;
use std::fs;
use std::path::{Path, PathBuf};
use version_patch_domain::{
    CONNECTOR_MARKER, ConnectorPatch, InstallerPatch, PatchOutcome, TextDocument,
};
use version_patch_infra::{FileReader, StagedWrite, WriteSet};
use version_patch_shared_kernel::{DomainError, ErrorContext, Result, VersionTag};

/// One file's share of the plan.
#[derive(Debug, Clone)]
pub struct FilePatch {
    /// Path as configured, used in status messages.
    pub path: PathBuf,
    pub outcome: PatchOutcome,
}

#[derive(Debug)]
pub struct PatchSummary {
    pub tag: VersionTag,
    pub connector: FilePatch,
    pub installer: FilePatch,
    /// Files actually written, in commit order. Empty for a dry run.
    pub written: Vec<PathBuf>,
}

#[derive(Debug)]
pub enum RunReport {
    /// No tag on the command line; nothing was read or written.
    NoTag,
    DryRun(PatchSummary),
    Applied(PatchSummary),
}

/// Both patches computed but not yet written.
#[derive(Debug)]
pub struct Plan {
    pub tag: VersionTag,
    pub connector: FilePatch,
    pub installer: FilePatch,
    writes: WriteSet,
}

impl Plan {
    /// Read both target files and apply the patches in memory.
    ///
    /// # Errors
    /// Any read failure, a missing marker under `strict`, or an installer
    /// position that cannot be resolved.
    pub fn build(config: &Config, tag: VersionTag) -> Result<Self> {
        let connector_file = config.connector_file();
        let installer_file = config.installer_file();
        let mut writes = WriteSet::new();

        let connector_text =
            FileReader::read_text(&connector_file).context("reading connector source")?;
        let mut connector_doc = TextDocument::parse(&connector_text);
        let connector = patch_connector(config, &tag, &connector_file, &mut connector_doc)?;

        // Both patches go into one document when the paths alias, otherwise
        // the second write would discard the first.
        let installer = if same_file(&connector_file, &installer_file) {
            log::info!(
                "connector and installer are the same file {}",
                connector_file.display()
            );
            let installer = patch_installer(config, &tag, &installer_file, &mut connector_doc)?;
            writes.push(StagedWrite::new(&connector_file, connector_text, connector_doc.render()));
            installer
        } else {
            writes.push(StagedWrite::new(&connector_file, connector_text, connector_doc.render()));
            let installer_text =
                FileReader::read_text(&installer_file).context("reading installer script")?;
            let mut installer_doc = TextDocument::parse(&installer_text);
            let installer = patch_installer(config, &tag, &installer_file, &mut installer_doc)?;
            writes.push(StagedWrite::new(&installer_file, installer_text, installer_doc.render()));
            installer
        };

        Ok(Self {
            tag,
            connector,
            installer,
            writes,
        })
    }

    pub fn summarize(self) -> PatchSummary {
        PatchSummary {
            tag: self.tag,
            connector: self.connector,
            installer: self.installer,
            written: Vec::new(),
        }
    }

    /// Write the planned contents, all or nothing.
    ///
    /// # Errors
    /// A write failure (after rollback of earlier writes) or a failed rollback.
    pub fn commit(self) -> Result<PatchSummary> {
        let Self {
            tag,
            connector,
            installer,
            writes,
        } = self;
        let written = writes.commit().context("committing patched files")?;
        Ok(PatchSummary {
            tag,
            connector,
            installer,
            written,
        })
    }
}

/// True when both paths exist and resolve to the same file.
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn patch_connector(
    config: &Config,
    tag: &VersionTag,
    file: &Path,
    doc: &mut TextDocument,
) -> Result<FilePatch> {
    let outcome = ConnectorPatch::new(tag.clone()).apply(doc);
    match &outcome {
        PatchOutcome::Replaced { line_index, previous } => {
            log::info!(
                "{}:{}: {} -> {}",
                file.display(),
                line_index + 1,
                previous.trim_end(),
                doc.line(*line_index).unwrap_or_default().trim_end()
            );
        }
        _ if config.strict => {
            return Err::<FilePatch, _>(DomainError::MarkerNotFound {
                marker: CONNECTOR_MARKER.trim_end().to_string(),
            })
            .with_context(|| format!("patching {}", file.display()));
        }
        _ => log::warn!(
            "no line containing '{}' in {}; connector version left as is",
            CONNECTOR_MARKER.trim_end(),
            file.display()
        ),
    }

    Ok(FilePatch {
        path: config.connector_path.clone(),
        outcome,
    })
}

fn patch_installer(
    config: &Config,
    tag: &VersionTag,
    file: &Path,
    doc: &mut TextDocument,
) -> Result<FilePatch> {
    let outcome = InstallerPatch::new(tag.clone(), config.installer_position.clone())
        .apply(doc)
        .with_context(|| format!("patching {}", file.display()))?;
    if let Some(index) = outcome.line_index() {
        log::info!("{}:{}: inserted AppVersion define", file.display(), index + 1);
    }

    Ok(FilePatch {
        path: config.installer_path.clone(),
        outcome,
    })
}

/// Validate the tag, then patch the connector and the installer, in that order.
///
/// # Errors
/// An invalid tag fails before any file is read. Planning and commit errors
/// are propagated with context; neither leaves a file half-patched.
pub fn run(config: &Config) -> Result<RunReport> {
    let Some(raw) = config.tag.as_deref() else {
        log::warn!("no version tag given; nothing to patch");
        return Ok(RunReport::NoTag);
    };

    let tag = VersionTag::parse(raw)?;
    presentation::announce(&tag);

    let plan = Plan::build(config, tag)?;
    if config.dry_run {
        return Ok(RunReport::DryRun(plan.summarize()));
    }
    plan.commit().map(RunReport::Applied)
}
