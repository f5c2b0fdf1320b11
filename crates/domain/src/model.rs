pub mod document;
pub mod outcome;

pub use document::{LineEnding, TextDocument};
pub use outcome::PatchOutcome;
