// crates/domain/src/patch/installer.rs
use version_patch_shared_kernel::{DomainError, DomainResult, VersionTag};

use crate::model::{LineEnding, PatchOutcome, TextDocument};

/// Zero-based line the `AppVersion` define is inserted at by default.
pub const DEFAULT_INSTALLER_LINE: usize = 11;

/// Where the `#define AppVersion` line goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertPosition {
    /// Before the line currently at this zero-based index.
    Index(usize),
    /// Directly after the first line containing this text.
    AfterAnchor(String),
}

impl Default for InsertPosition {
    fn default() -> Self {
        Self::Index(DEFAULT_INSTALLER_LINE)
    }
}

impl InsertPosition {
    fn resolve(&self, doc: &TextDocument) -> DomainResult<usize> {
        match self {
            Self::Index(index) => {
                if *index > doc.line_count() {
                    Err(DomainError::InsertOutOfRange {
                        index: *index,
                        line_count: doc.line_count(),
                    })
                } else {
                    Ok(*index)
                }
            }
            Self::AfterAnchor(anchor) => doc
                .find(anchor)
                .map(|i| i + 1)
                .ok_or_else(|| DomainError::AnchorNotFound {
                    anchor: anchor.clone(),
                }),
        }
    }
}

/// Inserts the `AppVersion` preprocessor define into the Inno Setup script.
///
/// There is no check for an existing define: applying twice yields two lines.
#[derive(Debug, Clone)]
pub struct InstallerPatch {
    tag: VersionTag,
    position: InsertPosition,
}

impl InstallerPatch {
    pub fn new(tag: VersionTag, position: InsertPosition) -> Self {
        Self { tag, position }
    }

    pub fn define_line(&self, ending: LineEnding) -> String {
        format!("#define AppVersion \"{}\"{}", self.tag, ending.as_str())
    }

    /// Insert the define line at the configured position.
    ///
    /// # Errors
    /// [`DomainError::InsertOutOfRange`] when the index lies past the end of
    /// the document, [`DomainError::AnchorNotFound`] when the anchor is absent.
    /// The document is untouched on error.
    pub fn apply(&self, doc: &mut TextDocument) -> DomainResult<PatchOutcome> {
        let index = self.position.resolve(doc)?;
        let line = self.define_line(doc.line_ending());
        doc.insert_line(index, line);
        Ok(PatchOutcome::Inserted { line_index: index })
    }
}
