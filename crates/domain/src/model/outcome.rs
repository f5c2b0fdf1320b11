// crates/domain/src/model/outcome.rs

/// What a patch did to a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The line at `line_index` was rewritten; `previous` is its old content.
    Replaced { line_index: usize, previous: String },
    /// A new line now sits at `line_index`.
    Inserted { line_index: usize },
    /// Nothing matched, the document is untouched.
    Unchanged,
}

impl PatchOutcome {
    #[inline]
    pub const fn is_changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    pub const fn line_index(&self) -> Option<usize> {
        match self {
            Self::Replaced { line_index, .. } | Self::Inserted { line_index } => Some(*line_index),
            Self::Unchanged => None,
        }
    }
}
