// crates/domain/src/patch/connector.rs
use version_patch_shared_kernel::VersionTag;

use crate::model::{LineEnding, PatchOutcome, TextDocument};

/// Substring identifying the version-constant assignment.
pub const CONNECTOR_MARKER: &str = "CONNECTOR_VERSION = ";

/// Rewrites the `CONNECTOR_VERSION` assignment of the connector entry file.
#[derive(Debug, Clone)]
pub struct ConnectorPatch {
    tag: VersionTag,
}

impl ConnectorPatch {
    pub fn new(tag: VersionTag) -> Self {
        Self { tag }
    }

    /// The assignment line written for this tag, terminated by `ending`.
    pub fn replacement_line(&self, ending: LineEnding) -> String {
        format!(
            "    CONNECTOR_VERSION = \"{}\"{}",
            self.tag,
            ending.as_str()
        )
    }

    /// Replace the first line containing [`CONNECTOR_MARKER`].
    ///
    /// Later matches are left alone. The replaced line keeps its terminator;
    /// an unterminated last line gets `\n`.
    pub fn apply(&self, doc: &mut TextDocument) -> PatchOutcome {
        let Some(index) = doc.find(CONNECTOR_MARKER) else {
            return PatchOutcome::Unchanged;
        };

        let ending = doc
            .line(index)
            .and_then(LineEnding::of)
            .unwrap_or(LineEnding::Lf);
        let previous = doc.replace_line(index, self.replacement_line(ending));

        PatchOutcome::Replaced {
            line_index: index,
            previous,
        }
    }
}
